use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_source(path: &std::path::Path, origin: super::ConfigOrigin) {
    match origin {
        super::ConfigOrigin::Cli => info!(
            target: "vplot_launcher::config",
            path = %path.display(),
            "Loading configuration from --config"
        ),
        super::ConfigOrigin::Env => info!(
            target: "vplot_launcher::config",
            path = %path.display(),
            "Loading configuration using VPLOT_LAUNCHER_CONFIG environment variable"
        ),
        super::ConfigOrigin::Default => debug!(
            target: "vplot_launcher::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "VPLOT_LAUNCHER_CONFIG not set; using default launcher.toml"
        ),
    }
}

pub fn log_builtin_defaults(path: &std::path::Path) {
    debug!(
        target: "vplot_launcher::config",
        path = %path.display(),
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "vplot_launcher::config",
        path = %config.source_display(),
        binary = %config.program.binary,
        bundle = %config.program.bundle,
        opener = %config.program.opener,
        default_mode = %config.defaults.mode,
        "Configuration file loaded successfully"
    );
}
