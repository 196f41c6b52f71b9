//! Run modes and the fields each mode makes visible.
use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// The three mutually exclusive ways vPlot can be launched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Plot a CSV file.
    #[default]
    File,
    /// Connect to a data source server.
    Client,
    /// Listen for a data source client.
    Server,
}

impl RunMode {
    pub const ALL: [RunMode; 3] = [RunMode::File, RunMode::Client, RunMode::Server];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RunMode::File => "file",
            RunMode::Client => "client",
            RunMode::Server => "server",
        }
    }

    /// Flag understood by the vPlot executable.
    pub const fn flag(&self) -> &'static str {
        match self {
            RunMode::File => "--file",
            RunMode::Client => "--client",
            RunMode::Server => "--server",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-editable launch fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchField {
    FilePath,
    ServerAddress,
    Port,
}

impl LaunchField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LaunchField::FilePath => "filePath",
            LaunchField::ServerAddress => "serverAddress",
            LaunchField::Port => "port",
        }
    }
}

impl fmt::Display for LaunchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shown for `mode`, in the order they are passed to vPlot.
///
/// The command builder reads exactly these fields and nothing else.
pub const fn visible_fields(mode: RunMode) -> &'static [LaunchField] {
    match mode {
        RunMode::File => &[LaunchField::FilePath],
        RunMode::Client => &[LaunchField::ServerAddress, LaunchField::Port],
        RunMode::Server => &[LaunchField::Port],
    }
}
