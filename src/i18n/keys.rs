//! Translation path table
//!
//! A path spec is a dotted list of segments addressing string fields in the
//! serialized piece metadata. `*` matches every value of a mapping (or every
//! element of a list); any other segment names a field.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Longest dictionary key; source strings are cut to this many characters
/// before lookup
pub const MAX_KEY_LENGTH: usize = 512;

/// Paths translated when no other table is configured
pub const DEFAULT_TRANSLATION_PATHS: &[&str] = &[
    "displayName",
    "description",
    "auth.displayName",
    "auth.description",
    "auth.username.displayName",
    "auth.username.description",
    "auth.password.displayName",
    "auth.password.description",
    "auth.props.*.displayName",
    "auth.props.*.description",
    "auth.props.*.options.options.*.label",
    "actions.*.displayName",
    "actions.*.description",
    "actions.*.props.*.displayName",
    "actions.*.props.*.description",
    "actions.*.props.*.options.options.*.label",
    "actions.*.props.*.properties.*.displayName",
    "actions.*.props.*.properties.*.description",
    "triggers.*.displayName",
    "triggers.*.description",
    "triggers.*.props.*.displayName",
    "triggers.*.props.*.description",
    "triggers.*.props.*.options.options.*.label",
    "triggers.*.props.*.properties.*.displayName",
    "triggers.*.props.*.properties.*.description",
];

/// Cut `text` to at most `max` characters
pub fn truncate_key(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

// ============================================================================
// Path Spec
// ============================================================================

/// One segment of a path spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Descend into the named field
    Field(String),
    /// Descend into every value
    Wildcard,
}

/// A parsed path spec such as `actions.*.props.*.displayName`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPath {
    segments: Vec<Segment>,
}

impl TranslationPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl FromStr for TranslationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::translation_path(s, "path cannot be empty"));
        }

        let segments = s
            .split('.')
            .map(|segment| match segment {
                "" => Err(Error::translation_path(s, "empty segment")),
                "*" => Ok(Segment::Wildcard),
                name => Ok(Segment::Field(name.to_string())),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }
}

impl fmt::Display for TranslationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Field(name) => name.as_str(),
                Segment::Wildcard => "*",
            })
            .collect();
        f.write_str(&parts.join("."))
    }
}

// ============================================================================
// Key Table
// ============================================================================

/// The list of paths the overlay engine rewrites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationKeys {
    paths: Vec<TranslationPath>,
}

impl TranslationKeys {
    /// Parse a table from path specs, rejecting malformed ones
    pub fn new<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = specs
            .into_iter()
            .map(|spec| spec.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { paths })
    }

    /// Append paths, skipping ones already in the table
    pub fn extend<I, S>(&mut self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for spec in specs {
            let path: TranslationPath = spec.as_ref().parse()?;
            if !self.paths.contains(&path) {
                self.paths.push(path);
            }
        }
        Ok(())
    }

    pub fn paths(&self) -> &[TranslationPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for TranslationKeys {
    fn default() -> Self {
        Self {
            paths: DEFAULT_TRANSLATION_PATHS
                .iter()
                .filter_map(|spec| spec.parse().ok())
                .collect(),
        }
    }
}
