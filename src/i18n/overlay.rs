//! Locale overlay engine
//!
//! Rewrites user-facing strings of a piece's metadata with the dictionary for
//! a locale. The input is never mutated: a translated copy is returned, or the
//! input itself when there is nothing to translate or translation fails.

use super::keys::{truncate_key, Segment, TranslationKeys, MAX_KEY_LENGTH};
use crate::error::{Error, Result};
use crate::piece::PieceMetadata;
use crate::types::{JsonValue, Locale};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Applies a translation-key table to piece metadata
#[derive(Debug, Clone)]
pub struct Translator {
    keys: TranslationKeys,
    max_key_length: usize,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslationKeys::default(), MAX_KEY_LENGTH)
    }
}

impl Translator {
    pub fn new(keys: TranslationKeys, max_key_length: usize) -> Self {
        Self {
            keys,
            max_key_length,
        }
    }

    pub fn keys(&self) -> &TranslationKeys {
        &self.keys
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Translate `piece` into `locale`
    ///
    /// Returns the input unchanged when no locale is given, the piece ships
    /// no dictionary for it, or translation fails.
    pub fn translate_piece<'a>(
        &self,
        piece: &'a PieceMetadata,
        locale: Option<Locale>,
    ) -> Cow<'a, PieceMetadata> {
        let Some(locale) = locale else {
            return Cow::Borrowed(piece);
        };
        let Some(dictionary) = piece.translations(locale) else {
            debug!("Piece '{}' has no translations for {}", piece.name, locale);
            return Cow::Borrowed(piece);
        };

        match self.overlay(piece, dictionary) {
            Ok(translated) => Cow::Owned(translated),
            Err(e) => {
                warn!(
                    "Failed to translate piece '{}' to {}: {}",
                    piece.name, locale, e
                );
                Cow::Borrowed(piece)
            }
        }
    }

    fn overlay(
        &self,
        piece: &PieceMetadata,
        dictionary: &BTreeMap<String, String>,
    ) -> Result<PieceMetadata> {
        let mut value = serde_json::to_value(piece)?;
        let replaced = self.translate_value(&mut value, dictionary);
        debug!("Translated {} strings of piece '{}'", replaced, piece.name);

        serde_json::from_value(value)
            .map_err(|e| Error::translation(format!("translated metadata is malformed: {e}")))
    }

    /// Overlay `dictionary` onto a JSON document in place
    ///
    /// Returns the number of strings replaced.
    pub fn translate_value(
        &self,
        value: &mut JsonValue,
        dictionary: &BTreeMap<String, String>,
    ) -> usize {
        self.keys
            .paths()
            .iter()
            .map(|path| self.visit(value, path.segments(), dictionary))
            .sum()
    }

    fn visit(
        &self,
        value: &mut JsonValue,
        segments: &[Segment],
        dictionary: &BTreeMap<String, String>,
    ) -> usize {
        let Some((segment, rest)) = segments.split_first() else {
            return self.replace(value, dictionary);
        };

        match segment {
            Segment::Field(name) => match value.as_object_mut().and_then(|o| o.get_mut(name)) {
                Some(child) => self.visit(child, rest, dictionary),
                None => 0,
            },
            Segment::Wildcard => match value {
                JsonValue::Object(map) => map
                    .values_mut()
                    .map(|child| self.visit(child, rest, dictionary))
                    .sum(),
                JsonValue::Array(items) => items
                    .iter_mut()
                    .map(|child| self.visit(child, rest, dictionary))
                    .sum(),
                _ => 0,
            },
        }
    }

    fn replace(&self, value: &mut JsonValue, dictionary: &BTreeMap<String, String>) -> usize {
        let JsonValue::String(text) = value else {
            return 0;
        };
        if text.is_empty() {
            return 0;
        }

        let key = truncate_key(text, self.max_key_length);
        match dictionary.get(key).filter(|t| !t.is_empty()).cloned() {
            Some(translated) => {
                *text = translated;
                1
            }
            None => 0,
        }
    }
}

/// Translate `piece` with the default key table
pub fn translate_piece(piece: &PieceMetadata, locale: Option<Locale>) -> Cow<'_, PieceMetadata> {
    Translator::default().translate_piece(piece, locale)
}
