// ABOUTME: Main library module for the clubsite page generator
// ABOUTME: Exports the config loader, the renderer, and the build pipeline

pub mod build;
pub mod cli;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use build::{build, check, BuildSummary, Error};
pub use cli::{App, Args, Settings};
pub use render::{RenderError, Renderer};
pub use site::{Config, LoadError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
