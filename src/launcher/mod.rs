//! Mode selection and vPlot command construction.
mod command;
mod controller;
mod mode;
mod params;
mod process;

pub use command::{
    build_command, Platform, ProgramTarget, DEFAULT_BINARY, DEFAULT_BUNDLE, DEFAULT_OPENER,
};
pub use controller::ModeController;
pub use mode::{visible_fields, LaunchField, RunMode};
pub use params::LaunchParameters;
pub use process::{DryRunLauncher, ProcessLauncher, SystemProcessLauncher};
