//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pieces framework CLI
#[derive(Parser, Debug)]
#[command(name = "pieces")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Framework configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a piece metadata file (JSON or YAML)
    Validate {
        /// Piece metadata file
        metadata: PathBuf,
    },

    /// Print piece metadata translated into a locale
    Translate {
        /// Piece metadata file
        metadata: PathBuf,

        /// Locale code (e.g. "de", "zh-TW"); defaults to the configured locale
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// List the translation paths in effect
    Paths,

    /// List supported locales
    Locales,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
