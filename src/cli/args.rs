//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use crate::launcher::{Platform, RunMode};

use super::{LaunchOverrides, LaunchProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Launch(LaunchProfile),
    Cli(CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Write a vector-field sample CSV that vPlot can open in file mode.
    #[command(about = "Write a vector-field sample CSV for file mode")]
    Samples(SamplesArgs),
}

/// Arguments for `samples`.
#[derive(Debug, Clone, Args)]
#[command(
    after_help = "The CSV has the columns x,y,z,xArrow,yArrow,zArrow,label with one row per integer grid point."
)]
pub struct SamplesArgs {
    /// Output CSV path.
    #[arg(long, short, default_value = crate::lib::samples::DEFAULT_SAMPLE_FILE)]
    pub output: PathBuf,
    /// Grid extends from -LIMIT to LIMIT on every axis.
    #[arg(long, default_value_t = crate::lib::samples::DEFAULT_GRID_LIMIT)]
    pub limit: i32,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "vPlot Launcher: start vPlot in file, client, or server mode",
    long_about = None
)]
pub struct LauncherArgs {
    /// Run mode (defaults to the config file's mode, then `file`).
    #[arg(long, value_enum)]
    pub mode: Option<RunMode>,
    /// CSV file to plot (file mode).
    #[arg(long)]
    pub file: Option<String>,
    /// IP address of the data source server (client mode).
    #[arg(long)]
    pub address: Option<String>,
    /// Socket port (client and server modes).
    #[arg(long)]
    pub port: Option<String>,
    /// Override host platform detection for the launch prefix.
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,
    /// Path to launcher.toml (overrides VPLOT_LAUNCHER_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Print the vPlot command as JSON instead of starting it.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LauncherArgs {
    /// Build a `LaunchProfile` from CLI args.
    pub fn build(self) -> LaunchProfile {
        LaunchProfile {
            config_path: self.config_override,
            mode: self.mode,
            platform: self.platform.unwrap_or_else(Platform::current),
            overrides: LaunchOverrides {
                file: self.file,
                address: self.address,
                port: self.port,
            },
            dry_run: self.dry_run,
        }
    }

    /// Parse CLI args into either launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(command) => {
                validate_command(&command)?;
                Ok(ParsedCommand::Cli(command))
            }
            None => Ok(ParsedCommand::Launch(self.build())),
        }
    }
}

fn validate_command(command: &CliCommand) -> Result<()> {
    match command {
        CliCommand::Samples(args) => {
            if args.limit < 0 {
                return Err(anyhow!("invalid grid limit: must be zero or greater"));
            }
        }
    }

    Ok(())
}
