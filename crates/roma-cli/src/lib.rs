//! Library half of `romatool`: tracing setup and the subcommand bodies.
//!
//! Commands return their output as a `String` so the binary only prints.

pub mod commands;
pub mod trace_init;

use roma_core::romaji::RomajiConfigError;
use roma_core::settings::SettingsError;
use roma_core::ExpandError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("romaji table: {0}")]
    Romaji(#[from] RomajiConfigError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Expand(#[from] ExpandError),
    #[error("JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0:?} is not in the romaji table")]
    NotInTable(String),
}

/// Read a file into a string, keeping its path in the error.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })
}
