use serde::Deserialize;

use crate::launcher::{LaunchParameters, RunMode};

/// Initial mode and field values for a launcher session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDefaults {
    pub mode: RunMode,
    pub params: LaunchParameters,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDefaultsSection {
    pub mode: Option<RunMode>,
    pub file: Option<String>,
    pub address: Option<String>,
    pub port: Option<String>,
}

pub fn parse_defaults_section(raw: Option<RawDefaultsSection>) -> SessionDefaults {
    let defaults_raw = raw.unwrap_or_default();
    SessionDefaults {
        mode: defaults_raw.mode.unwrap_or_default(),
        params: LaunchParameters {
            file_path: defaults_raw.file,
            server_address: defaults_raw.address,
            port: defaults_raw.port,
        },
    }
}
