use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::launcher::{LaunchField, RunMode};

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file {path} does not exist")]
    NotFound { path: PathBuf },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures returned by `ModeController::start`.
///
/// Both variants leave the launcher state untouched, so the caller can fix
/// the cause and retry.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A field required by the active mode is empty or absent.
    #[error("{mode} mode requires `{field}` but it is empty")]
    MissingParameter { mode: RunMode, field: LaunchField },
    /// The OS could not create the process.
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Stable code for logs and exit status mapping.
    pub const fn code(&self) -> &'static str {
        match self {
            LaunchError::MissingParameter { .. } => "missing_parameter",
            LaunchError::Spawn { .. } => "spawn_failed",
        }
    }
}
