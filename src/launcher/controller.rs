//! Owner of the active run mode.
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::lib::errors::LaunchError;

use super::{
    build_command, visible_fields, LaunchField, LaunchParameters, Platform, ProcessLauncher,
    ProgramTarget, RunMode,
};

/// Single source of truth for the active `RunMode` in a launcher session.
///
/// Presentation code subscribes to mode changes through [`ModeController::subscribe`]
/// and decides which inputs to show from [`visible_fields`].
pub struct ModeController<L> {
    mode: watch::Sender<RunMode>,
    launcher: L,
    target: ProgramTarget,
}

impl<L: ProcessLauncher> ModeController<L> {
    /// Create a controller starting in `RunMode::File`.
    pub fn new(launcher: L, target: ProgramTarget) -> Self {
        Self::with_mode(launcher, target, RunMode::default())
    }

    pub fn with_mode(launcher: L, target: ProgramTarget, mode: RunMode) -> Self {
        let (sender, _) = watch::channel(mode);
        Self {
            mode: sender,
            launcher,
            target,
        }
    }

    pub fn mode(&self) -> RunMode {
        *self.mode.borrow()
    }

    /// Switch the active mode and notify subscribers.
    pub fn set_mode(&self, mode: RunMode) {
        let previous = self.mode.send_replace(mode);
        debug!(
            target: "vplot_launcher::mode",
            from = %previous,
            to = %mode,
            visible = ?visible_fields(mode),
            "Run mode changed"
        );
    }

    /// Receiver that observes every subsequent `set_mode`.
    pub fn subscribe(&self) -> watch::Receiver<RunMode> {
        self.mode.subscribe()
    }

    pub fn visible_fields(&self) -> &'static [LaunchField] {
        visible_fields(self.mode())
    }

    pub fn target(&self) -> &ProgramTarget {
        &self.target
    }

    /// True when `start` only previews the command.
    pub fn is_preview(&self) -> bool {
        !self.launcher.spawns_process()
    }

    /// Build the vPlot command for the active mode without starting it.
    pub fn command(
        &self,
        params: &LaunchParameters,
        platform: Platform,
    ) -> Result<Vec<String>, LaunchError> {
        build_command(self.mode(), params, platform, &self.target)
    }

    /// Build the command for the active mode and hand it to the launcher.
    pub fn start(&self, params: &LaunchParameters, platform: Platform) -> Result<(), LaunchError> {
        let mode = self.mode();
        let result = self
            .command(params, platform)
            .and_then(|argv| self.launcher.execute(&argv).map(|()| argv));

        match result {
            Ok(_) if self.is_preview() => Ok(()),
            Ok(argv) => {
                info!(
                    target: "vplot_launcher::launch",
                    mode = %mode,
                    platform = platform.as_str(),
                    argv = ?argv,
                    "Started vPlot"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    target: "vplot_launcher::launch",
                    mode = %mode,
                    platform = platform.as_str(),
                    code = err.code(),
                    reason = %err,
                    "Failed to start vPlot"
                );
                Err(err)
            }
        }
    }
}
