//! Metadata loader module
//!
//! Parse piece metadata documents as served by the platform API.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_metadata` - Read a JSON or YAML metadata file
//! - `load_metadata_from_str` - Parse metadata from a string
//! - `validate_metadata` - Consistency checks against a release floor

mod parser;

pub use parser::{load_metadata, load_metadata_from_str, validate_metadata};
