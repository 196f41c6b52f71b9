//! LaunchProfile and how its field overrides apply to a session.
use std::path::PathBuf;

use crate::launcher::{visible_fields, LaunchField, LaunchParameters, Platform, RunMode};

/// Field values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOverrides {
    pub file: Option<String>,
    pub address: Option<String>,
    pub port: Option<String>,
}

impl LaunchOverrides {
    /// Write the supplied values into `params`.
    ///
    /// `--file` goes through the file-chooser path, so an empty value keeps
    /// whatever the config file provided.
    pub fn apply(&self, params: &mut LaunchParameters) {
        if let Some(file) = &self.file {
            params.apply_file_selection(file);
        }
        if let Some(address) = &self.address {
            params.set_server_address(address.as_str());
        }
        if let Some(port) = &self.port {
            params.set_port(port.as_str());
        }
    }

    /// Supplied fields that `mode` does not read.
    pub fn ignored_for(&self, mode: RunMode) -> Vec<LaunchField> {
        let supplied = [
            (LaunchField::FilePath, self.file.is_some()),
            (LaunchField::ServerAddress, self.address.is_some()),
            (LaunchField::Port, self.port.is_some()),
        ];
        let visible = visible_fields(mode);
        supplied
            .into_iter()
            .filter(|(field, present)| *present && !visible.contains(field))
            .map(|(field, _)| field)
            .collect()
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: Option<PathBuf>,
    pub mode: Option<RunMode>,
    pub platform: Platform,
    pub overrides: LaunchOverrides,
    pub dry_run: bool,
}
