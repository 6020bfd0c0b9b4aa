//! Tests for piece construction and metadata

use super::testing::{action, chat_piece, polling_trigger};
use super::*;
use crate::context::ContextVersion;
use crate::property::{Property, PropertyMap};
use crate::types::{Locale, Release};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeMap;
use test_case::test_case;

fn chat_params() -> PieceParams {
    PieceParams {
        display_name: "Chat".to_string(),
        actions: vec![action("send_message", "Send Message", PropertyMap::new())],
        triggers: vec![polling_trigger("new_message", "New Message")],
        ..Default::default()
    }
}

// ============================================================================
// Release Floor Tests
// ============================================================================

#[test_case(None, "0.73.0" ; "absent uses floor")]
#[test_case(Some("0.30.0"), "0.73.0" ; "lower is raised")]
#[test_case(Some("0.73.0"), "0.73.0" ; "equal is kept")]
#[test_case(Some("0.80.1"), "0.80.1" ; "higher is kept")]
#[test_case(Some("1.0.0"), "1.0.0" ; "major bump is kept")]
fn test_minimum_release_coercion(declared: Option<&str>, expected: &str) {
    let mut params = chat_params();
    params.minimum_supported_release = declared.map(str::to_string);

    let piece = create_piece(params).unwrap();
    assert_eq!(piece.minimum_supported_release.to_string(), expected);
}

#[test]
fn test_release_floor_compares_numerically() {
    let mut params = chat_params();
    params.minimum_supported_release = Some("0.9.0".to_string());

    let piece = create_piece_with_floor(params, Release::new(0, 10, 0)).unwrap();
    assert_eq!(piece.minimum_supported_release, Release::new(0, 10, 0));
}

#[test]
fn test_floor_constant_matches_string() {
    assert_eq!(
        MINIMUM_SUPPORTED_RELEASE_AFTER_LATEST_CONTEXT_VERSION
            .parse::<Release>()
            .unwrap(),
        MINIMUM_RELEASE_FLOOR
    );
}

#[test]
fn test_unparsable_release_is_error() {
    let mut params = chat_params();
    params.minimum_supported_release = Some("latest".to_string());
    let err = create_piece(params).unwrap_err();
    assert!(err.is_construction_error());

    let mut params = chat_params();
    params.maximum_supported_release = Some("1.2".to_string());
    assert!(create_piece(params).is_err());
}

#[test]
fn test_maximum_below_minimum_is_kept() {
    let mut params = chat_params();
    params.maximum_supported_release = Some("0.50.0".to_string());

    let piece = create_piece(params).unwrap();
    assert_eq!(piece.maximum_supported_release, Some(Release::new(0, 50, 0)));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_context_version_is_latest() {
    let piece = create_piece(chat_params()).unwrap();
    assert_eq!(piece.context_version(), ContextVersion::V1);
}

#[test]
fn test_non_auth_property_rejected_as_auth() {
    let mut params = chat_params();
    params.auth = Some(Property::short_text("Token"));

    let err = create_piece(params).unwrap_err();
    assert!(err.is_construction_error());
    assert!(err.to_string().contains("auth must be an auth property"));
}

#[test]
fn test_duplicate_action_rejected() {
    let mut params = chat_params();
    params
        .actions
        .push(action("send_message", "Send Again", PropertyMap::new()));

    let err = create_piece(params).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate action name: send_message");
}

#[test]
fn test_duplicate_trigger_rejected() {
    let mut params = chat_params();
    params
        .triggers
        .push(polling_trigger("new_message", "Another"));

    let err = create_piece(params).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate trigger name: new_message");
}

#[test]
fn test_empty_display_name_rejected() {
    let mut params = chat_params();
    params.display_name.clear();
    assert!(create_piece(params).is_err());
}

#[test]
fn test_lookup_by_name() {
    let piece = chat_piece();
    assert_eq!(piece.actions().len(), 2);
    assert!(piece.get_action("upload_file").is_some());
    assert!(piece.get_action("missing").is_none());
    assert_eq!(
        piece.get_trigger("new_message").map(|t| t.display_name()),
        Some("New Message")
    );
}

// ============================================================================
// Metadata Tests
// ============================================================================

#[test]
fn test_metadata_serialization() {
    let metadata = chat_piece().metadata("@pieces/chat", "0.4.2");
    let value = serde_json::to_value(&metadata).unwrap();

    assert_eq!(value["name"], "@pieces/chat");
    assert_eq!(value["version"], "0.4.2");
    assert_eq!(value["displayName"], "Chat");
    assert_eq!(value["minimumSupportedRelease"], "0.73.0");
    assert_eq!(value["contextInfo"], json!({ "version": "1" }));
    assert_eq!(value["categories"], json!(["COMMUNICATION"]));
    assert_eq!(value["auth"]["type"], "CUSTOM_AUTH");
    assert_eq!(value["actions"]["send_message"]["displayName"], "Send Message");
    assert_eq!(value["triggers"]["new_message"]["type"], "POLLING");
    assert!(value.get("maximumSupportedRelease").is_none());
    assert!(value.get("i18n").is_none());

    let parsed: PieceMetadata = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, metadata);
}

#[test]
fn test_metadata_i18n() {
    let mut german = BTreeMap::new();
    german.insert("Chat".to_string(), "Plaudern".to_string());
    let mut i18n = Translations::new();
    i18n.insert(Locale::German, german);

    let metadata = chat_piece().metadata("@pieces/chat", "0.4.2").with_i18n(i18n);
    assert_eq!(
        metadata
            .translations(Locale::German)
            .and_then(|d| d.get("Chat"))
            .map(String::as_str),
        Some("Plaudern")
    );
    assert!(metadata.translations(Locale::French).is_none());

    let value = serde_json::to_value(&metadata).unwrap();
    assert_eq!(value["i18n"]["de"]["Chat"], "Plaudern");
}

#[test]
fn test_metadata_without_context_info() {
    let metadata: PieceMetadata = serde_json::from_value(json!({
        "name": "@pieces/legacy",
        "displayName": "Legacy",
        "version": "0.1.0",
        "minimumSupportedRelease": "0.20.0"
    }))
    .unwrap();

    assert!(metadata.context_info.is_none());
    assert!(metadata.actions.is_empty());
}
