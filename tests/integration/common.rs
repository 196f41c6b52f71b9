use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_vplot-launcher");

/// Run the launcher in `cwd` with no inherited config override.
pub fn run_launcher(cwd: &Path, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("VPLOT_LAUNCHER_CONFIG")
        .env("RUST_LOG", "warn")
        .output()
        .expect("launcher process should start")
}

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

pub fn stdout_argv(output: &Output) -> Vec<String> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim())
        .unwrap_or_else(|err| panic!("stdout should be a JSON array ({err}): {stdout}"))
}
