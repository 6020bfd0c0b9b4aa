//! Property types
//!
//! A property is one configurable input of an action, trigger, or auth
//! definition. The serialized form is what the platform API serves: a `type`
//! tag plus camelCase fields. Runtime-only parts (option resolvers) are
//! skipped on serialization.

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Properties keyed by name
pub type PropertyMap = BTreeMap<String, Property>;

// ============================================================================
// Property Kind
// ============================================================================

/// Kind tag of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    ShortText,
    LongText,
    Checkbox,
    Number,
    DateTime,
    Json,
    File,
    #[serde(rename = "MARKDOWN")]
    Markdown,
    StaticDropdown,
    StaticMultiSelectDropdown,
    Dropdown,
    MultiSelectDropdown,
    Object,
    Array,
    Custom,
    SecretText,
    BasicAuth,
    CustomAuth,
    #[serde(rename = "OAUTH2")]
    OAuth2,
}

// ============================================================================
// Property
// ============================================================================

/// A configurable input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Property {
    ShortText(BasicProperty),
    LongText(BasicProperty),
    Checkbox(BasicProperty),
    Number(BasicProperty),
    DateTime(BasicProperty),
    Json(BasicProperty),
    File(BasicProperty),
    #[serde(rename = "MARKDOWN")]
    Markdown(MarkdownProperty),
    StaticDropdown(StaticDropdownProperty),
    StaticMultiSelectDropdown(StaticDropdownProperty),
    Dropdown(DropdownProperty),
    MultiSelectDropdown(DropdownProperty),
    Object(BasicProperty),
    Array(ArrayProperty),
    Custom(CustomProperty),
    SecretText(BasicProperty),
    BasicAuth(BasicAuthProperty),
    CustomAuth(CustomAuthProperty),
    #[serde(rename = "OAUTH2")]
    OAuth2(OAuth2Property),
}

/// Fields shared by every property kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBase {
    /// Label shown to users
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<JsonValue>,
}

/// A property with no kind-specific fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
}

/// Read-only markdown shown in the builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
    pub value: String,
}

// ============================================================================
// Dropdowns
// ============================================================================

/// One selectable option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: JsonValue,
}

impl DropdownOption {
    /// Create an option
    pub fn new(label: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Options of a dropdown at a point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropdownState {
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Vec<DropdownOption>,
}

impl DropdownState {
    /// Enabled dropdown with the given options
    pub fn with_options(options: Vec<DropdownOption>) -> Self {
        Self {
            disabled: false,
            placeholder: None,
            options,
        }
    }

    /// Disabled dropdown showing a placeholder
    pub fn disabled(placeholder: impl Into<String>) -> Self {
        Self {
            disabled: true,
            placeholder: Some(placeholder.into()),
            options: Vec::new(),
        }
    }
}

/// Dropdown whose options are fixed at declaration time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticDropdownProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
    pub options: DropdownState,
}

/// Async function computing dropdown options from refresher values
///
/// Receives only the values named by the dropdown's refreshers (plus `auth`).
#[derive(Clone)]
pub struct OptionsResolver(
    Arc<dyn Fn(JsonObject) -> BoxFuture<'static, Result<DropdownState>> + Send + Sync>,
);

impl OptionsResolver {
    /// Wrap a resolver function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(JsonObject) -> BoxFuture<'static, Result<DropdownState>> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Resolve options for the given refresher values
    pub fn resolve(&self, refreshed: JsonObject) -> BoxFuture<'static, Result<DropdownState>> {
        (self.0)(refreshed)
    }
}

impl fmt::Debug for OptionsResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OptionsResolver(..)")
    }
}

impl PartialEq for OptionsResolver {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Dropdown whose options depend on sibling property values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
    /// Sibling property names whose values feed the resolver
    #[serde(default)]
    pub refreshers: Vec<String>,
    #[serde(default)]
    pub refresh_on_search: bool,
    #[serde(skip)]
    pub options: Option<OptionsResolver>,
}

impl DropdownProperty {
    /// Pick the refresher values (and `auth`) out of the full props value
    pub fn refreshed_values(&self, props_value: &JsonObject) -> JsonObject {
        let mut refreshed = JsonObject::new();
        for name in self.refreshers.iter().map(String::as_str).chain(["auth"]) {
            if let Some(value) = props_value.get(name) {
                refreshed.insert(name.to_string(), value.clone());
            }
        }
        refreshed
    }
}

// ============================================================================
// Composite Properties
// ============================================================================

/// List of values, optionally of nested properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
}

/// Property rendered by custom builder code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
    pub code: String,
}

// ============================================================================
// Auth Properties
// ============================================================================

/// Label of one basic-auth field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthFieldLabel {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Username/password credential
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicAuthProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
    pub username: AuthFieldLabel,
    pub password: AuthFieldLabel,
}

/// Credential made of arbitrary nested properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomAuthProperty {
    #[serde(flatten)]
    pub base: PropertyBase,
    #[serde(default)]
    pub props: PropertyMap,
}

/// OAuth2 credential (the exchange itself happens elsewhere)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2Property {
    #[serde(flatten)]
    pub base: PropertyBase,
    pub auth_url: String,
    pub token_url: String,
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default)]
    pub pkce: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PropertyMap>,
}
