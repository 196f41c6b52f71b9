use std::fs;

use tempfile::tempdir;

use crate::common::run_launcher;

#[test]
fn samples_subcommand_writes_default_file() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_launcher(temp.path(), &["samples"]);

    assert!(output.status.success(), "samples should succeed: {output:?}");
    let csv = fs::read_to_string(temp.path().join("VectorField.csv"))
        .expect("VectorField.csv should be written");
    assert_eq!(csv.lines().count(), 126);
    assert!(csv.starts_with("x,y,z,xArrow,yArrow,zArrow,label\n"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"rows\": 125"), "stdout: {stdout}");
}

#[test]
fn help_lists_modes_and_samples() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_launcher(temp.path(), &["--help"]);
    assert!(output.status.success(), "--help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["--mode", "--file", "--address", "--port", "--dry-run", "samples"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}
