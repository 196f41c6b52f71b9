//! Translate (mode, parameters, platform) into a vPlot argument list.
use crate::lib::errors::LaunchError;

use super::{visible_fields, LaunchParameters, RunMode};

pub const DEFAULT_BINARY: &str = "vPlot";
pub const DEFAULT_BUNDLE: &str = "vPlot.app";
pub const DEFAULT_OPENER: &str = "open";
/// Separator after which `open` forwards tokens to the bundle.
const BUNDLE_ARGS_SEPARATOR: &str = "--args";

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Platform {
    /// Launch through the application bundle opener.
    Posix,
    /// Launch the binary directly.
    Other,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(unix) {
            Platform::Posix
        } else {
            Platform::Other
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Posix => "posix",
            Platform::Other => "other",
        }
    }
}

/// Names used to invoke the external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramTarget {
    pub binary: String,
    pub bundle: String,
    pub opener: String,
}

impl Default for ProgramTarget {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            bundle: DEFAULT_BUNDLE.to_string(),
            opener: DEFAULT_OPENER.to_string(),
        }
    }
}

impl ProgramTarget {
    /// Leading tokens needed to run the program on `platform`.
    pub fn prefix(&self, platform: Platform) -> Vec<String> {
        match platform {
            Platform::Posix => vec![
                self.opener.clone(),
                self.bundle.clone(),
                BUNDLE_ARGS_SEPARATOR.to_string(),
            ],
            Platform::Other => vec![self.binary.clone()],
        }
    }
}

/// Build the argv for launching vPlot in `mode`.
///
/// Only the fields visible in `mode` are read; every one of them must be
/// non-blank. Values are passed through verbatim as separate tokens.
pub fn build_command(
    mode: RunMode,
    params: &LaunchParameters,
    platform: Platform,
    target: &ProgramTarget,
) -> Result<Vec<String>, LaunchError> {
    let fields = visible_fields(mode);
    let mut values = Vec::with_capacity(fields.len());
    for &field in fields {
        let value = params
            .filled(field)
            .ok_or(LaunchError::MissingParameter { mode, field })?;
        values.push(value.to_string());
    }

    let mut argv = target.prefix(platform);
    argv.push(mode.flag().to_string());
    argv.extend(values);
    Ok(argv)
}
