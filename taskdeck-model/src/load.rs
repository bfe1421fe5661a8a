//! TOML data-file loader.

use std::path::Path;

use thiserror::Error;

use crate::project::ProjectData;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse data file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load a project data set from a TOML file.
pub fn load(path: &Path) -> Result<ProjectData, DataError> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Parse a project data set from TOML text.
pub fn from_toml_str(content: &str) -> Result<ProjectData, DataError> {
    Ok(toml::from_str(content)?)
}
