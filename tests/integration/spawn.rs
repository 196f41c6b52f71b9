use std::fs;

use tempfile::tempdir;

use crate::common::run_launcher;

#[test]
fn unknown_executable_exits_with_code_three() {
    let temp = tempdir().expect("can create temporary directory");
    let config = temp.path().join("launcher.toml");
    fs::write(
        &config,
        "[program]\nbinary = \"vplot-launcher-test-no-such-binary\"\n",
    )
    .expect("can write config");

    let output = run_launcher(
        temp.path(),
        &["--platform", "other", "--mode", "server", "--port", "4242"],
    );

    assert_eq!(output.status.code(), Some(3), "output: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("vplot-launcher-test-no-such-binary"),
        "stderr: {stderr}"
    );
}
