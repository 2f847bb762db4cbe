// ABOUTME: Site module for the page configuration document
// ABOUTME: Exports the config data model and the loader used by the build pipeline

pub mod config;
pub mod error;

use std::path::Path;
use tracing::{debug, info};

pub use config::{Announcement, Config, ConfigFormat, Meeting, Organization, Project};
pub use error::{LoadError, Result};

/// Load the page configuration from `path`
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!(
        "Reading {} config from {}",
        ConfigFormat::from_path(path).as_str(),
        path.display()
    );

    let config = Config::from_file(path)?;

    debug!(
        "Organization '{}' {} a logo",
        config.organization.name,
        if config.has_logo() { "has" } else { "has no" }
    );
    info!(
        "Loaded config for '{}': {} announcements, {} meetings, {} projects in {} categories",
        config.organization.name,
        config.announcements.len(),
        config.meetings.len(),
        config.project_count(),
        config.projects.len()
    );

    Ok(config)
}
