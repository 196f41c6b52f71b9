//! Entry point for the vPlot launcher.
use std::process::ExitCode;

use clap::Parser;
use vplot_launcher::{
    cli::{execute_cli_command, CliCommand, LaunchProfile, LauncherArgs, ParsedCommand},
    config::LauncherConfig,
    lib::telemetry,
    runtime::{self, LaunchOutcome, LauncherExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), LauncherExit> {
    telemetry::init_tracing().map_err(LauncherExit::from_error)?;
    let args = LauncherArgs::parse();
    let command = args.into_command().map_err(LauncherExit::from_error)?;

    match command {
        ParsedCommand::Launch(profile) => launch(profile),
        ParsedCommand::Cli(command) => handle_cli_command(command),
    }
}

fn launch(profile: LaunchProfile) -> Result<(), LauncherExit> {
    let config =
        LauncherConfig::load(profile.config_path.clone()).map_err(LauncherExit::from_error)?;
    match runtime::run_launcher(profile, config)? {
        LaunchOutcome::Started => {}
        LaunchOutcome::Previewed(argv) => {
            let payload = serde_json::to_string(&argv).map_err(LauncherExit::from_error)?;
            println!("{payload}");
        }
    }
    Ok(())
}

fn handle_cli_command(command: CliCommand) -> Result<(), LauncherExit> {
    let message = execute_cli_command(command).map_err(LauncherExit::from_error)?;
    println!("{message}");
    Ok(())
}
