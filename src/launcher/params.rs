//! Current values of the user-editable launch fields.
use super::LaunchField;

/// Values for every launch field regardless of the active mode.
///
/// Switching modes keeps stale values around; only the fields visible in the
/// active mode are read when a command is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParameters {
    pub file_path: Option<String>,
    pub server_address: Option<String>,
    pub port: Option<String>,
}

impl LaunchParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_file_path(&mut self, value: impl Into<String>) {
        self.file_path = Some(value.into());
    }

    pub fn set_server_address(&mut self, value: impl Into<String>) {
        self.server_address = Some(value.into());
    }

    pub fn set_port(&mut self, value: impl Into<String>) {
        self.port = Some(value.into());
    }

    pub fn set(&mut self, field: LaunchField, value: impl Into<String>) {
        match field {
            LaunchField::FilePath => self.set_file_path(value),
            LaunchField::ServerAddress => self.set_server_address(value),
            LaunchField::Port => self.set_port(value),
        }
    }

    /// Apply a file-chooser result. An empty selection means the dialog was
    /// cancelled and keeps the previous path.
    pub fn apply_file_selection(&mut self, selection: &str) {
        if !selection.is_empty() {
            self.set_file_path(selection);
        }
    }

    pub fn get(&self, field: LaunchField) -> Option<&str> {
        match field {
            LaunchField::FilePath => self.file_path.as_deref(),
            LaunchField::ServerAddress => self.server_address.as_deref(),
            LaunchField::Port => self.port.as_deref(),
        }
    }

    /// Returns the trimmed-non-empty value of `field`, if any.
    pub fn filled(&self, field: LaunchField) -> Option<&str> {
        self.get(field).filter(|value| !value.trim().is_empty())
    }
}
