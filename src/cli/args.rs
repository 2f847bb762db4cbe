// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Every argument is optional; with none the fixed input and output paths are used

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::build::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Parser, Debug)]
#[command(name = "clubsite")]
#[command(about = "Render an organization's public page from a config file into static HTML")]
#[command(version)]
pub struct Args {
    #[arg(short, long, help = "Path to the page config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[arg(short, long, help = "Path of the HTML document to write", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    #[arg(long, help = "Load and render without writing the output file")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Log line format")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
