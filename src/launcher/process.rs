//! Fire-and-forget process spawning.
use std::{io, process::Stdio};

use tokio::process::Command;
use tracing::info;

use crate::lib::errors::LaunchError;

/// Starts an external process from an argument list.
pub trait ProcessLauncher {
    /// Request the OS to start `argv[0]` with the remaining tokens as
    /// arguments. Returns as soon as the process has been created.
    fn execute(&self, argv: &[String]) -> Result<(), LaunchError>;

    /// False for launchers that only preview the command.
    fn spawns_process(&self) -> bool {
        true
    }
}

/// Spawns real processes through `tokio::process`.
///
/// Must be called from within a Tokio runtime so the child can be reaped in
/// the background after its handle is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessLauncher;

impl ProcessLauncher for SystemProcessLauncher {
    fn execute(&self, argv: &[String]) -> Result<(), LaunchError> {
        let (program, args) = argv.split_first().ok_or_else(|| LaunchError::Spawn {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty argument list"),
        })?;

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?;

        info!(
            target: "vplot_launcher::launch",
            program = %program,
            pid = child.id(),
            "Spawned external process"
        );
        Ok(())
    }
}

/// Launcher that spawns nothing, used for previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunLauncher;

impl ProcessLauncher for DryRunLauncher {
    fn execute(&self, argv: &[String]) -> Result<(), LaunchError> {
        info!(
            target: "vplot_launcher::launch",
            argv = ?argv,
            "Dry run; process not spawned"
        );
        Ok(())
    }

    fn spawns_process(&self) -> bool {
        false
    }
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for &L {
    fn execute(&self, argv: &[String]) -> Result<(), LaunchError> {
        (**self).execute(argv)
    }

    fn spawns_process(&self) -> bool {
        (**self).spawns_process()
    }
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for Box<L> {
    fn execute(&self, argv: &[String]) -> Result<(), LaunchError> {
        (**self).execute(argv)
    }

    fn spawns_process(&self) -> bool {
        (**self).spawns_process()
    }
}
