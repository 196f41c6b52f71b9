//! Load and validate launcher configuration.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::{launcher::ProgramTarget, lib::errors::ConfigError};

pub mod defaults;
pub mod program;
pub mod telemetry;

pub use defaults::{parse_defaults_section, RawDefaultsSection, SessionDefaults};
pub use program::{parse_program_section, RawProgramSection};

pub const CONFIG_ENV_KEY: &str = "VPLOT_LAUNCHER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "launcher.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Cli,
    Env,
    Default,
}

impl ConfigOrigin {
    /// Explicitly named files must exist; the default one is optional.
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, ConfigOrigin::Default)
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub program: ProgramTarget,
    pub defaults: SessionDefaults,
    /// `None` when built-in defaults are in effect.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    program: Option<RawProgramSection>,
    defaults: Option<RawDefaultsSection>,
}

/// Resolve the config path in the order: CLI override → env var → default.
pub fn resolve_config_source(
    override_path: Option<PathBuf>,
    env_value: Option<OsString>,
) -> (PathBuf, ConfigOrigin) {
    if let Some(path) = override_path {
        return (path, ConfigOrigin::Cli);
    }
    match env_value {
        Some(value) if !value.is_empty() => (PathBuf::from(value), ConfigOrigin::Env),
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigOrigin::Default),
    }
}

impl LauncherConfig {
    /// Load using `--config`, then `VPLOT_LAUNCHER_CONFIG`, then `launcher.toml`.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let (path, origin) = resolve_config_source(override_path, env::var_os(CONFIG_ENV_KEY));
        telemetry::log_source(&path, origin);

        if !path.exists() {
            if origin.is_explicit() {
                let error = ConfigError::NotFound { path: path.clone() };
                error!(
                    target: "vplot_launcher::config",
                    path = %path.display(),
                    reason = %error,
                    "Configuration file is missing"
                );
                return Err(error);
            }
            telemetry::log_builtin_defaults(&path);
            return Ok(Self::default());
        }

        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let source = ::config::File::from(path.clone()).format(::config::FileFormat::Toml);
        let builder = ::config::Config::builder().add_source(source);
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "vplot_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "vplot_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "vplot_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let program = parse_program_section(raw.program, &path)?;
        let defaults = parse_defaults_section(raw.defaults);

        Ok(Self {
            program,
            defaults,
            source_path: Some(path),
        })
    }

    pub fn source_display(&self) -> String {
        self.source_path
            .as_deref()
            .map(Path::display)
            .map(|display| display.to_string())
            .unwrap_or_else(|| "<built-in>".to_string())
    }
}
