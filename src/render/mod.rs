// ABOUTME: Render module for turning a page config into a static HTML document
// ABOUTME: Exports the Handlebars-backed renderer and the atomic output writer

pub mod engine;
pub mod error;
pub mod helpers;
pub mod writer;

pub use engine::{Renderer, PAGE_TEMPLATE};
pub use error::{RenderError, Result};
pub use writer::write_atomic;
