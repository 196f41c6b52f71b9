use std::path::Path;

use serde::Deserialize;

use crate::{
    launcher::{ProgramTarget, DEFAULT_BINARY, DEFAULT_BUNDLE, DEFAULT_OPENER},
    lib::errors::ConfigError,
};

#[derive(Debug, Deserialize, Default)]
pub struct RawProgramSection {
    pub binary: Option<String>,
    pub bundle: Option<String>,
    pub opener: Option<String>,
}

pub fn parse_program_section(
    raw: Option<RawProgramSection>,
    path: &Path,
) -> Result<ProgramTarget, ConfigError> {
    let program_raw = raw.unwrap_or_default();
    Ok(ProgramTarget {
        binary: non_blank(program_raw.binary, DEFAULT_BINARY, "program.binary", path)?,
        bundle: non_blank(program_raw.bundle, DEFAULT_BUNDLE, "program.bundle", path)?,
        opener: non_blank(program_raw.opener, DEFAULT_OPENER, "program.opener", path)?,
    })
}

fn non_blank(
    value: Option<String>,
    default: &str,
    field: &'static str,
    path: &Path,
) -> Result<String, ConfigError> {
    match value {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Program names cannot be empty".into(),
        }),
        Some(value) => Ok(value),
    }
}
