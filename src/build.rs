// ABOUTME: Build pipeline that loads the config, renders the page, and writes it out
// ABOUTME: Collects stage failures into one error type with a distinct exit status per stage

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::render::{self, RenderError, Renderer};
use crate::site::{self, Config, LoadError};

/// Default input document, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default output document, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "build/index.html";

/// `sysexits.h` codes used for the three failure classes.
pub const EXIT_DATA_ERROR: u8 = 65;
pub const EXIT_SOFTWARE_ERROR: u8 = 70;
pub const EXIT_IO_ERROR: u8 = 74;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Load(e) if e.is_decode() => EXIT_DATA_ERROR,
            Error::Render(e) if e.is_template() => EXIT_SOFTWARE_ERROR,
            _ => EXIT_IO_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub announcements: usize,
    pub meetings: usize,
    pub categories: usize,
    pub projects: usize,
    pub bytes: usize,
    pub written: bool,
}

impl BuildSummary {
    fn new(config: &Config, output: &Path, bytes: usize, written: bool) -> Self {
        Self {
            output: output.to_path_buf(),
            announcements: config.announcements.len(),
            meetings: config.meetings.len(),
            categories: config.projects.len(),
            projects: config.project_count(),
            bytes,
            written,
        }
    }
}

/// Load `config_path`, render it, and write the page to `output_path`
pub fn build<P, Q>(config_path: P, output_path: Q) -> Result<BuildSummary, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    run(config_path.as_ref(), output_path.as_ref(), false)
}

/// Load and render without touching the output path
pub fn check<P, Q>(config_path: P, output_path: Q) -> Result<BuildSummary, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    run(config_path.as_ref(), output_path.as_ref(), true)
}

fn run(config_path: &Path, output_path: &Path, dry_run: bool) -> Result<BuildSummary, Error> {
    let config = site::load(config_path)?;

    let renderer = Renderer::new()?;
    let html = renderer.render(&config)?;

    if dry_run {
        info!(
            "Dry run - rendered {} bytes, not writing {}",
            html.len(),
            output_path.display()
        );
    } else {
        render::write_atomic(output_path, html.as_bytes())?;
    }

    Ok(BuildSummary::new(&config, output_path, html.len(), !dry_run))
}
