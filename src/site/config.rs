// ABOUTME: Page configuration data structures and decoding
// ABOUTME: Defines the Config root and its organization, announcement, meeting, and project entries

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use super::error::{LoadError, Result};

/// Treats an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub link: String,
    /// Empty means no logo image is rendered.
    #[serde(default, deserialize_with = "nullable")]
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub location: String,
    #[serde(default, deserialize_with = "nullable")]
    pub topic: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub link: String,
}

/// Root of the page configuration document.
///
/// Every field is optional; missing or `null` fields decode to their empty
/// value and unknown fields are ignored. Project categories keep the order in
/// which they appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "nullable")]
    pub copyright: String,
    #[serde(default, deserialize_with = "nullable")]
    pub organization: Organization,
    #[serde(default, deserialize_with = "nullable")]
    pub announcements: Vec<Announcement>,
    #[serde(default, deserialize_with = "nullable")]
    pub meetings: Vec<Meeting>,
    #[serde(default, deserialize_with = "nullable")]
    pub projects: IndexMap<String, Vec<Project>>,
}

/// Encoding of a config document, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl Config {
    /// Read and decode a config file, choosing the decoder by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match ConfigFormat::from_path(path) {
            ConfigFormat::Json => serde_json::from_slice(&bytes).map_err(LoadError::Decode),
            ConfigFormat::Yaml => serde_yaml::from_slice(&bytes).map_err(LoadError::DecodeYaml),
        }
    }

    /// Decode a config from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(LoadError::Decode)
    }

    /// Decode a config from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(LoadError::DecodeYaml)
    }

    /// Number of projects across all categories
    pub fn project_count(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }

    pub fn has_logo(&self) -> bool {
        !self.organization.logo.is_empty()
    }
}
