//! Property model
//!
//! The recursive type describing one configurable input of a piece.
//!
//! # Overview
//!
//! The property module provides:
//! - `Property` - Sum type with one case per property kind
//! - Named constructors (`Property::short_text`, `Property::dropdown`, ...)
//! - `OptionsResolver` - Runtime option computation for dynamic dropdowns
//! - `dangling_refreshers` - Consistency check over a property map

mod builders;
mod types;

pub use builders::dangling_refreshers;
pub use types::{
    ArrayProperty, AuthFieldLabel, BasicAuthProperty, BasicProperty, CustomAuthProperty,
    CustomProperty, DropdownOption, DropdownProperty, DropdownState, MarkdownProperty,
    OAuth2Property, OptionsResolver, Property, PropertyBase, PropertyMap, PropertyType,
    StaticDropdownProperty,
};
