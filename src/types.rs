//! Common types used throughout the pieces framework
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Locale
// ============================================================================

/// Locales a piece can ship translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "bg")]
    Bulgarian,
    #[serde(rename = "ca")]
    Catalan,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hu")]
    Hungarian,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "zh")]
    ChineseSimplified,
    #[serde(rename = "zh-TW")]
    ChineseTraditional,
}

impl Locale {
    /// All supported locales
    pub const ALL: [Locale; 20] = [
        Locale::Arabic,
        Locale::Bulgarian,
        Locale::Catalan,
        Locale::German,
        Locale::English,
        Locale::Spanish,
        Locale::French,
        Locale::Hungarian,
        Locale::Indonesian,
        Locale::Italian,
        Locale::Japanese,
        Locale::Korean,
        Locale::Dutch,
        Locale::Polish,
        Locale::Portuguese,
        Locale::Russian,
        Locale::Ukrainian,
        Locale::Vietnamese,
        Locale::ChineseSimplified,
        Locale::ChineseTraditional,
    ];

    /// The locale code (e.g., "fr", "zh-TW")
    pub fn code(self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::Bulgarian => "bg",
            Locale::Catalan => "ca",
            Locale::German => "de",
            Locale::English => "en",
            Locale::Spanish => "es",
            Locale::French => "fr",
            Locale::Hungarian => "hu",
            Locale::Indonesian => "id",
            Locale::Italian => "it",
            Locale::Japanese => "ja",
            Locale::Korean => "ko",
            Locale::Dutch => "nl",
            Locale::Polish => "pl",
            Locale::Portuguese => "pt",
            Locale::Russian => "ru",
            Locale::Ukrainian => "uk",
            Locale::Vietnamese => "vi",
            Locale::ChineseSimplified => "zh",
            Locale::ChineseTraditional => "zh-TW",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| Error::UnknownLocale {
                value: s.to_string(),
            })
    }
}

// ============================================================================
// Piece Category
// ============================================================================

/// Marketplace category a piece is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceCategory {
    ArtificialIntelligence,
    BusinessIntelligence,
    Communication,
    ContentAndFiles,
    CoreUtilities,
    CustomerSupport,
    DeveloperTools,
    Commerce,
    Accounting,
    Forms,
    HumanResources,
    Marketing,
    PaymentProcessing,
    Productivity,
    SalesAndCrm,
    Universal,
}

// ============================================================================
// Release
// ============================================================================

/// Regex for release strings: major.minor.patch
static RELEASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").unwrap());

/// A platform release (`major.minor.patch`), ordered numerically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Release {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Release {
    /// Create a release from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Release {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RELEASE_REGEX
            .captures(s.trim())
            .ok_or_else(|| Error::invalid_release(s, "expected major.minor.patch"))?;

        let part = |i: usize| -> Result<u64> {
            caps[i]
                .parse::<u64>()
                .map_err(|e| Error::invalid_release(s, e.to_string()))
        };

        Ok(Self::new(part(1)?, part(2)?, part(3)?))
    }
}

impl TryFrom<String> for Release {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Release> for String {
    fn from(release: Release) -> Self {
        release.to_string()
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait mapping empty strings to `None`
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
