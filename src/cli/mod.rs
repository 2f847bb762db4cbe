// ABOUTME: CLI module for the clubsite page generator
// ABOUTME: Exports argument parsing, run settings, and the application driver

pub mod app;
pub mod args;
pub mod config;

pub use app::App;
pub use args::{Args, LogFormat};
pub use config::{LoggingConfig, Settings};
