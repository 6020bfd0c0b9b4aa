//! Piece types

use crate::action::{Action, ActionMetadata};
use crate::context::{ContextInfo, ContextVersion};
use crate::property::Property;
use crate::trigger::{Trigger, TriggerMetadata};
use crate::types::{Locale, PieceCategory, Release};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Translation dictionaries keyed by locale, then by (truncated) source text
pub type Translations = BTreeMap<Locale, BTreeMap<String, String>>;

// ============================================================================
// Params
// ============================================================================

/// Author-supplied piece definition
#[derive(Debug, Clone, Default)]
pub struct PieceParams {
    pub display_name: String,
    pub logo_url: String,
    pub authors: Vec<String>,
    pub description: String,
    /// Must be one of the auth property kinds
    pub auth: Option<Property>,
    pub categories: Vec<PieceCategory>,
    /// Raised to the platform floor when lower or absent
    pub minimum_supported_release: Option<String>,
    pub maximum_supported_release: Option<String>,
    pub actions: Vec<Action>,
    pub triggers: Vec<Trigger>,
}

// ============================================================================
// Piece
// ============================================================================

/// A validated piece definition
#[derive(Debug, Clone)]
pub struct Piece {
    pub display_name: String,
    pub logo_url: String,
    pub authors: Vec<String>,
    pub description: String,
    pub auth: Option<Property>,
    pub categories: Vec<PieceCategory>,
    pub minimum_supported_release: Release,
    pub maximum_supported_release: Option<Release>,
    pub(crate) actions: BTreeMap<String, Action>,
    pub(crate) triggers: BTreeMap<String, Trigger>,
    pub(crate) context_info: ContextInfo,
}

impl Piece {
    pub fn actions(&self) -> &BTreeMap<String, Action> {
        &self.actions
    }

    pub fn triggers(&self) -> &BTreeMap<String, Trigger> {
        &self.triggers
    }

    pub fn get_action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    pub fn get_trigger(&self, name: &str) -> Option<&Trigger> {
        self.triggers.get(name)
    }

    /// Context shape this piece expects its callbacks to receive
    pub fn context_version(&self) -> ContextVersion {
        self.context_info.version
    }

    /// Serializable metadata for this piece, as served by the platform API
    pub fn metadata(&self, name: impl Into<String>, version: impl Into<String>) -> PieceMetadata {
        PieceMetadata {
            name: name.into(),
            display_name: self.display_name.clone(),
            logo_url: self.logo_url.clone(),
            description: self.description.clone(),
            authors: self.authors.clone(),
            version: version.into(),
            auth: self.auth.clone(),
            categories: self.categories.clone(),
            minimum_supported_release: self.minimum_supported_release,
            maximum_supported_release: self.maximum_supported_release,
            actions: self
                .actions
                .iter()
                .map(|(name, action)| (name.clone(), action.metadata()))
                .collect(),
            triggers: self
                .triggers
                .iter()
                .map(|(name, trigger)| (name.clone(), trigger.metadata()))
                .collect(),
            context_info: Some(self.context_info),
            i18n: None,
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Serializable piece metadata
///
/// Pieces published before context versioning carry no `contextInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceMetadata {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Property>,
    #[serde(default)]
    pub categories: Vec<PieceCategory>,
    pub minimum_supported_release: Release,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_supported_release: Option<Release>,
    #[serde(default)]
    pub actions: BTreeMap<String, ActionMetadata>,
    #[serde(default)]
    pub triggers: BTreeMap<String, TriggerMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_info: Option<ContextInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<Translations>,
}

impl PieceMetadata {
    /// Attach translation dictionaries
    #[must_use]
    pub fn with_i18n(mut self, i18n: Translations) -> Self {
        self.i18n = Some(i18n);
        self
    }

    /// Dictionary for `locale`, if one was attached
    pub fn translations(&self, locale: Locale) -> Option<&BTreeMap<String, String>> {
        self.i18n.as_ref().and_then(|i18n| i18n.get(&locale))
    }
}
