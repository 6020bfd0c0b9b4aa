//! Property constructors and accessors
//!
//! Authors declare properties through the named constructors on [`Property`]
//! and refine them with the chained `required` / `with_*` methods.

use super::types::{
    ArrayProperty, AuthFieldLabel, BasicAuthProperty, BasicProperty, CustomAuthProperty,
    CustomProperty, DropdownOption, DropdownProperty, DropdownState, MarkdownProperty,
    OAuth2Property, OptionsResolver, Property, PropertyBase, PropertyMap, PropertyType,
    StaticDropdownProperty,
};
use crate::types::{JsonValue, OptionStringExt};

fn base(display_name: impl Into<String>) -> PropertyBase {
    PropertyBase {
        display_name: display_name.into(),
        ..Default::default()
    }
}

fn basic(display_name: impl Into<String>) -> BasicProperty {
    BasicProperty {
        base: base(display_name),
    }
}

impl Property {
    // ========================================================================
    // Value properties
    // ========================================================================

    pub fn short_text(display_name: impl Into<String>) -> Self {
        Property::ShortText(basic(display_name))
    }

    pub fn long_text(display_name: impl Into<String>) -> Self {
        Property::LongText(basic(display_name))
    }

    pub fn checkbox(display_name: impl Into<String>) -> Self {
        Property::Checkbox(basic(display_name))
    }

    pub fn number(display_name: impl Into<String>) -> Self {
        Property::Number(basic(display_name))
    }

    pub fn date_time(display_name: impl Into<String>) -> Self {
        Property::DateTime(basic(display_name))
    }

    pub fn json(display_name: impl Into<String>) -> Self {
        Property::Json(basic(display_name))
    }

    pub fn file(display_name: impl Into<String>) -> Self {
        Property::File(basic(display_name))
    }

    pub fn object(display_name: impl Into<String>) -> Self {
        Property::Object(basic(display_name))
    }

    /// Read-only markdown block
    pub fn markdown(value: impl Into<String>) -> Self {
        Property::Markdown(MarkdownProperty {
            base: base("Markdown"),
            value: value.into(),
        })
    }

    /// List of values; `properties` describes each item when items are records
    pub fn array(display_name: impl Into<String>, properties: Option<PropertyMap>) -> Self {
        Property::Array(ArrayProperty {
            base: base(display_name),
            properties,
        })
    }

    pub fn custom(display_name: impl Into<String>, code: impl Into<String>) -> Self {
        Property::Custom(CustomProperty {
            base: base(display_name),
            code: code.into(),
        })
    }

    // ========================================================================
    // Dropdowns
    // ========================================================================

    pub fn static_dropdown(display_name: impl Into<String>, options: Vec<DropdownOption>) -> Self {
        Property::StaticDropdown(StaticDropdownProperty {
            base: base(display_name),
            options: DropdownState::with_options(options),
        })
    }

    pub fn static_multi_select_dropdown(
        display_name: impl Into<String>,
        options: Vec<DropdownOption>,
    ) -> Self {
        Property::StaticMultiSelectDropdown(StaticDropdownProperty {
            base: base(display_name),
            options: DropdownState::with_options(options),
        })
    }

    /// Dynamic dropdown recomputed whenever one of `refreshers` changes
    pub fn dropdown<I, S>(
        display_name: impl Into<String>,
        refreshers: I,
        options: OptionsResolver,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Property::Dropdown(DropdownProperty {
            base: base(display_name),
            refreshers: refreshers.into_iter().map(Into::into).collect(),
            refresh_on_search: false,
            options: Some(options),
        })
    }

    pub fn multi_select_dropdown<I, S>(
        display_name: impl Into<String>,
        refreshers: I,
        options: OptionsResolver,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Property::MultiSelectDropdown(DropdownProperty {
            base: base(display_name),
            refreshers: refreshers.into_iter().map(Into::into).collect(),
            refresh_on_search: false,
            options: Some(options),
        })
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub fn secret_text(display_name: impl Into<String>) -> Self {
        Property::SecretText(basic(display_name))
    }

    pub fn basic_auth(
        display_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Property::BasicAuth(BasicAuthProperty {
            base: base(display_name),
            username: AuthFieldLabel {
                display_name: username.into(),
                description: None,
            },
            password: AuthFieldLabel {
                display_name: password.into(),
                description: None,
            },
        })
    }

    pub fn custom_auth(display_name: impl Into<String>, props: PropertyMap) -> Self {
        Property::CustomAuth(CustomAuthProperty {
            base: base(display_name),
            props,
        })
    }

    pub fn oauth2<I, S>(
        display_name: impl Into<String>,
        auth_url: impl Into<String>,
        token_url: impl Into<String>,
        scope: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Property::OAuth2(OAuth2Property {
            base: base(display_name),
            auth_url: auth_url.into(),
            token_url: token_url.into(),
            scope: scope.into_iter().map(Into::into).collect(),
            pkce: false,
            props: None,
        })
    }

    // ========================================================================
    // Refinement
    // ========================================================================

    /// Mark the property as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.base_mut().required = true;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base_mut().description = description.into().none_if_empty();
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<JsonValue>) -> Self {
        self.base_mut().default_value = Some(value.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Kind tag of this property
    pub fn kind(&self) -> PropertyType {
        match self {
            Property::ShortText(_) => PropertyType::ShortText,
            Property::LongText(_) => PropertyType::LongText,
            Property::Checkbox(_) => PropertyType::Checkbox,
            Property::Number(_) => PropertyType::Number,
            Property::DateTime(_) => PropertyType::DateTime,
            Property::Json(_) => PropertyType::Json,
            Property::File(_) => PropertyType::File,
            Property::Markdown(_) => PropertyType::Markdown,
            Property::StaticDropdown(_) => PropertyType::StaticDropdown,
            Property::StaticMultiSelectDropdown(_) => PropertyType::StaticMultiSelectDropdown,
            Property::Dropdown(_) => PropertyType::Dropdown,
            Property::MultiSelectDropdown(_) => PropertyType::MultiSelectDropdown,
            Property::Object(_) => PropertyType::Object,
            Property::Array(_) => PropertyType::Array,
            Property::Custom(_) => PropertyType::Custom,
            Property::SecretText(_) => PropertyType::SecretText,
            Property::BasicAuth(_) => PropertyType::BasicAuth,
            Property::CustomAuth(_) => PropertyType::CustomAuth,
            Property::OAuth2(_) => PropertyType::OAuth2,
        }
    }

    /// Shared fields
    pub fn base(&self) -> &PropertyBase {
        match self {
            Property::ShortText(p)
            | Property::LongText(p)
            | Property::Checkbox(p)
            | Property::Number(p)
            | Property::DateTime(p)
            | Property::Json(p)
            | Property::File(p)
            | Property::Object(p)
            | Property::SecretText(p) => &p.base,
            Property::Markdown(p) => &p.base,
            Property::StaticDropdown(p) | Property::StaticMultiSelectDropdown(p) => &p.base,
            Property::Dropdown(p) | Property::MultiSelectDropdown(p) => &p.base,
            Property::Array(p) => &p.base,
            Property::Custom(p) => &p.base,
            Property::BasicAuth(p) => &p.base,
            Property::CustomAuth(p) => &p.base,
            Property::OAuth2(p) => &p.base,
        }
    }

    fn base_mut(&mut self) -> &mut PropertyBase {
        match self {
            Property::ShortText(p)
            | Property::LongText(p)
            | Property::Checkbox(p)
            | Property::Number(p)
            | Property::DateTime(p)
            | Property::Json(p)
            | Property::File(p)
            | Property::Object(p)
            | Property::SecretText(p) => &mut p.base,
            Property::Markdown(p) => &mut p.base,
            Property::StaticDropdown(p) | Property::StaticMultiSelectDropdown(p) => &mut p.base,
            Property::Dropdown(p) | Property::MultiSelectDropdown(p) => &mut p.base,
            Property::Array(p) => &mut p.base,
            Property::Custom(p) => &mut p.base,
            Property::BasicAuth(p) => &mut p.base,
            Property::CustomAuth(p) => &mut p.base,
            Property::OAuth2(p) => &mut p.base,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.base().display_name
    }

    pub fn is_required(&self) -> bool {
        self.base().required
    }

    /// Whether this property can serve as a piece's auth
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Property::SecretText(_)
                | Property::BasicAuth(_)
                | Property::CustomAuth(_)
                | Property::OAuth2(_)
        )
    }

    /// Sibling names this property depends on (empty for static kinds)
    pub fn refreshers(&self) -> &[String] {
        match self {
            Property::Dropdown(p) | Property::MultiSelectDropdown(p) => &p.refreshers,
            _ => &[],
        }
    }
}

/// Refreshers that name no sibling in `props`, as `(property, refresher)` pairs
///
/// `auth` is always resolvable and never reported.
pub fn dangling_refreshers(props: &PropertyMap) -> Vec<(String, String)> {
    props
        .iter()
        .flat_map(|(name, prop)| {
            prop.refreshers()
                .iter()
                .filter(|r| r.as_str() != "auth" && !props.contains_key(r.as_str()))
                .map(move |r| (name.clone(), r.clone()))
        })
        .collect()
}
