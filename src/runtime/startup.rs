use std::process::ExitCode;

use anyhow::Error;
use tokio::sync::watch;
use tracing::debug;

use crate::{
    cli::LaunchProfile,
    config::LauncherConfig,
    launcher::{
        visible_fields, DryRunLauncher, ModeController, ProcessLauncher, RunMode,
        SystemProcessLauncher,
    },
    lib::{
        errors::LaunchError,
        telemetry::{emit_session, SessionTelemetry},
    },
};

const EXIT_MISSING_PARAMETER: u8 = 2;
const EXIT_SPAWN_FAILED: u8 = 3;

/// Bundles a launcher error message with an exit code.
#[derive(Debug)]
pub struct LauncherExit {
    message: String,
    code: u8,
}

impl LauncherExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            code: 1,
        }
    }

    pub fn from_launch_error(err: LaunchError) -> Self {
        let code = match err {
            LaunchError::MissingParameter { .. } => EXIT_MISSING_PARAMETER,
            LaunchError::Spawn { .. } => EXIT_SPAWN_FAILED,
        };
        Self {
            message: err.to_string(),
            code,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.code)
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a launcher session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// vPlot was started.
    Started,
    /// Nothing was spawned; holds the command that would have run.
    Previewed(Vec<String>),
}

/// Run one launcher session: seed state from config, apply the CLI profile,
/// then start vPlot (or preview the command on `--dry-run`).
pub fn run_launcher(
    profile: LaunchProfile,
    config: LauncherConfig,
) -> Result<LaunchOutcome, LauncherExit> {
    let launcher: Box<dyn ProcessLauncher> = if profile.dry_run {
        Box::new(DryRunLauncher)
    } else {
        Box::new(SystemProcessLauncher)
    };
    let controller =
        ModeController::with_mode(launcher, config.program.clone(), config.defaults.mode);
    let mut mode_changes = controller.subscribe();

    if let Some(mode) = profile.mode {
        controller.set_mode(mode);
    }
    let mode = observe_mode(&mut mode_changes);

    let mut params = config.defaults.params.clone();
    profile.overrides.apply(&mut params);
    for field in profile.overrides.ignored_for(mode) {
        debug!(
            target: "vplot_launcher::mode",
            mode = %mode,
            field = %field,
            "Ignoring value not used by the selected mode"
        );
    }

    let config_path = config.source_display();
    emit_session(&SessionTelemetry {
        mode,
        platform: profile.platform,
        config_path: Some(config_path.as_str()),
        dry_run: profile.dry_run,
    });

    controller
        .start(&params, profile.platform)
        .map_err(LauncherExit::from_launch_error)?;

    if profile.dry_run {
        let argv = controller
            .command(&params, profile.platform)
            .map_err(LauncherExit::from_launch_error)?;
        return Ok(LaunchOutcome::Previewed(argv));
    }
    Ok(LaunchOutcome::Started)
}

/// Read the mode the presentation layer should render and log its fields.
fn observe_mode(receiver: &mut watch::Receiver<RunMode>) -> RunMode {
    let mode = *receiver.borrow_and_update();
    debug!(
        target: "vplot_launcher::mode",
        mode = %mode,
        visible = ?visible_fields(mode),
        "Showing fields for mode"
    );
    mode
}
