// ABOUTME: Error types for page rendering and output
// ABOUTME: Distinguishes template faults from failures writing the finished document

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Error parsing template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Error generating HTML: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Error writing output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// True for faults in the compiled-in template rather than the environment
    pub fn is_template(&self) -> bool {
        matches!(self, RenderError::Template(_) | RenderError::Render(_))
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
