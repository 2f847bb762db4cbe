// ABOUTME: Run settings for the clubsite CLI
// ABOUTME: Resolves input and output paths, dry-run mode, and logging options from arguments

use std::path::PathBuf;

use super::args::{Args, LogFormat};
use crate::build::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub output_path: PathBuf,
    pub dry_run: bool,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            dry_run: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        let level = if args.verbose { "debug" } else { "info" };

        Self {
            config_path: args.config.clone(),
            output_path: args.output.clone(),
            dry_run: args.dry_run,
            logging: LoggingConfig {
                level: level.to_string(),
                format: args.log_format,
                color: !args.no_color,
            },
        }
    }
}
