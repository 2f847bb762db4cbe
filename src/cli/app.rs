// ABOUTME: Application driver for the clubsite CLI
// ABOUTME: Installs logging and runs the load, render, and write pipeline with the resolved settings

use anyhow::{anyhow, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::{Args, LogFormat, Settings};
use crate::build::{self, BuildSummary, Error};

pub struct App {
    settings: Settings,
}

impl App {
    /// Create a new application instance
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create application from command line arguments
    pub fn from_args() -> Self {
        let args = Args::parse_args();
        Self::new(Settings::from_args(&args))
    }

    /// Initialize logging; `RUST_LOG` overrides the configured level
    pub fn init_logging(&self) -> Result<()> {
        let logging = &self.settings.logging;
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&logging.level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(logging.color)
            .with_target(false)
            .with_writer(std::io::stderr);

        match logging.format {
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Full => builder.try_init(),
        }
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

        debug!("Logging initialized with level: {}", logging.level);
        Ok(())
    }

    /// Run the pipeline once
    pub fn run(&self) -> std::result::Result<BuildSummary, Error> {
        info!("Starting clubsite v{}", env!("CARGO_PKG_VERSION"));
        debug!(
            "Config: {}, output: {}",
            self.settings.config_path.display(),
            self.settings.output_path.display()
        );

        let summary = if self.settings.dry_run {
            build::check(&self.settings.config_path, &self.settings.output_path)?
        } else {
            build::build(&self.settings.config_path, &self.settings.output_path)?
        };

        info!(
            "Page built: {} announcements, {} meetings, {} projects in {} categories -> {}",
            summary.announcements,
            summary.meetings,
            summary.projects,
            summary.categories,
            summary.output.display()
        );

        Ok(summary)
    }
}
