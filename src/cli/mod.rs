//! CLI module
//!
//! Command-line interface for inspecting piece metadata.
//!
//! # Commands
//!
//! - `validate` - Check a metadata file against the platform release floor
//! - `translate` - Print metadata translated into a locale
//! - `paths` - List the translation paths in effect
//! - `locales` - List supported locales

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
