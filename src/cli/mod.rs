//! CLI entrypoint module structure.
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::lib::samples::write_vector_field_file;

pub mod args;
pub mod profile;

pub use args::{CliCommand, LauncherArgs, ParsedCommand, SamplesArgs};
pub use profile::{LaunchOverrides, LaunchProfile};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Samples(args) => write_samples(&args.output, args.limit),
    }
}

/// Write the sample CSV and format a JSON response payload.
fn write_samples(output: &Path, limit: i32) -> Result<String> {
    let rows = write_vector_field_file(output, limit).with_context(|| {
        format!(
            "failed to write sample data to {}",
            output.to_string_lossy()
        )
    })?;

    let payload = json!({
        "status": "written",
        "path": output.to_string_lossy(),
        "rows": rows,
        "limit": limit
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
