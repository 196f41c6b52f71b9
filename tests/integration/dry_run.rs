use tempfile::tempdir;

use crate::common::{fixture, run_launcher, stdout_argv};

#[test]
fn client_dry_run_prints_posix_command() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_launcher(
        temp.path(),
        &[
            "--dry-run",
            "--platform",
            "posix",
            "--mode",
            "client",
            "--address",
            "10.0.0.5",
            "--port",
            "9000",
        ],
    );

    assert!(output.status.success(), "dry run should succeed: {output:?}");
    assert_eq!(
        stdout_argv(&output),
        ["open", "vPlot.app", "--args", "--client", "10.0.0.5", "9000"]
    );
}

#[test]
fn client_dry_run_prints_direct_command_on_other_platforms() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_launcher(
        temp.path(),
        &[
            "--dry-run",
            "--platform",
            "other",
            "--mode",
            "client",
            "--address",
            "10.0.0.5",
            "--port",
            "9000",
            "--file",
            "ignored.csv",
        ],
    );

    assert!(output.status.success(), "dry run should succeed: {output:?}");
    assert_eq!(
        stdout_argv(&output),
        ["vPlot", "--client", "10.0.0.5", "9000"]
    );
}

#[test]
fn file_mode_is_the_default() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_launcher(
        temp.path(),
        &["--dry-run", "--platform", "other", "--file", "/data/My Field.csv"],
    );

    assert!(output.status.success(), "dry run should succeed: {output:?}");
    assert_eq!(
        stdout_argv(&output),
        ["vPlot", "--file", "/data/My Field.csv"]
    );
}

#[test]
fn missing_file_path_exits_with_code_two() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_launcher(temp.path(), &["--dry-run"]);

    assert_eq!(output.status.code(), Some(2), "output: {output:?}");
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("filePath"), "stderr: {stderr}");
}

#[test]
fn config_file_seeds_mode_and_program_names() {
    let temp = tempdir().expect("can create temporary directory");
    let config = fixture("tests/fixtures/launcher_server.toml");
    let output = run_launcher(
        temp.path(),
        &["--dry-run", "--platform", "other", "--config", &config],
    );

    assert!(output.status.success(), "dry run should succeed: {output:?}");
    assert_eq!(stdout_argv(&output), ["vplot-dev", "--server", "4242"]);
}

#[test]
fn cli_values_override_config_defaults() {
    let temp = tempdir().expect("can create temporary directory");
    let config = fixture("tests/fixtures/launcher_valid.toml");
    let output = run_launcher(
        temp.path(),
        &[
            "--dry-run",
            "--platform",
            "posix",
            "--config",
            &config,
            "--port",
            "9100",
        ],
    );

    assert!(output.status.success(), "dry run should succeed: {output:?}");
    assert_eq!(
        stdout_argv(&output),
        [
            "open",
            "/Applications/vPlot.app",
            "--args",
            "--client",
            "10.0.0.5",
            "9100"
        ]
    );
}

#[test]
fn missing_explicit_config_fails() {
    let temp = tempdir().expect("can create temporary directory");
    let output = run_launcher(
        temp.path(),
        &["--dry-run", "--config", "does-not-exist.toml", "--mode", "server"],
    );

    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.toml"), "stderr: {stderr}");
}
