//! Launcher session startup.
mod startup;

pub use startup::{run_launcher, LaunchOutcome, LauncherExit};
