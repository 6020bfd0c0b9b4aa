//! Piece translation
//!
//! # Overview
//!
//! The i18n module provides:
//! - `TranslationKeys` - The table of dotted/wildcard paths to translate
//! - `Translator` - Applies a table to piece metadata for one locale
//! - `translate_piece` - Shorthand using the default table
//!
//! Dictionaries live on the metadata itself (`PieceMetadata::i18n`); finding
//! and loading them is up to the caller.

mod keys;
mod overlay;

pub use keys::{
    truncate_key, Segment, TranslationKeys, TranslationPath, DEFAULT_TRANSLATION_PATHS,
    MAX_KEY_LENGTH,
};
pub use overlay::{translate_piece, Translator};
