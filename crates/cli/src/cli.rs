use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::commands::query_command;

#[derive(Parser, Debug)]
#[command(name = "starquery")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Starlark files to query (e.g., BUILD.bazel)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only report calls to this function (repeatable)
    #[arg(short, long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Log every extracted call when RUST_LOG is unset
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Execute the query
    pub fn execute(self) -> Result<()> {
        query_command(&self.files, &self.names, self.format)
    }
}
