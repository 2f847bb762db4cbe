// ABOUTME: Error types for loading the page configuration
// ABOUTME: Separates unreadable files from documents that do not match the schema

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error reading config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing config file: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error parsing config file: {0}")]
    DecodeYaml(#[from] serde_yaml::Error),
}

impl LoadError {
    /// True when the file was read but its content did not decode
    pub fn is_decode(&self) -> bool {
        matches!(self, LoadError::Decode(_) | LoadError::DecodeYaml(_))
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
