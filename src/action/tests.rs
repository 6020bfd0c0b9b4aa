//! Tests for action definitions

use super::*;
use crate::context::testing::sample_v1;
use crate::hooks::hook;
use crate::property::Property;
use serde_json::json;
use std::sync::Arc;

fn send_message() -> ActionParams {
    let mut props = PropertyMap::new();
    props.insert("channel".to_string(), Property::short_text("Channel").required());
    props.insert("text".to_string(), Property::long_text("Text"));

    ActionParams {
        name: "send_message".to_string(),
        display_name: "Send Message".to_string(),
        description: "Post a message to a channel".to_string(),
        props,
        run: hook(|ctx| async move {
            Ok(json!({ "sent_to": ctx.props_value().get("channel").cloned() }))
        }),
        test: None,
        require_auth: None,
        error_handling_options: None,
    }
}

#[test]
fn test_create_action_defaults() {
    let action = create_action(send_message()).unwrap();

    assert!(action.require_auth);
    assert_eq!(action.error_handling_options, ErrorHandlingOptions::default());
    assert!(!action.error_handling_options.retry_on_failure.default_value);
    assert!(!action.error_handling_options.continue_on_failure.hide);
    assert!(Arc::ptr_eq(&action.test, &action.run));
}

#[test]
fn test_create_action_keeps_explicit_values() {
    let mut params = send_message();
    params.require_auth = Some(false);
    params.error_handling_options = Some(ErrorHandlingOptions {
        retry_on_failure: ErrorHandlingToggle {
            default_value: true,
            hide: false,
        },
        continue_on_failure: ErrorHandlingToggle {
            default_value: false,
            hide: true,
        },
    });

    let action = create_action(params).unwrap();
    assert!(!action.require_auth);
    assert!(action.error_handling_options.retry_on_failure.default_value);
    assert!(action.error_handling_options.continue_on_failure.hide);
}

#[test]
fn test_create_action_rejects_empty_names() {
    let mut params = send_message();
    params.display_name = String::new();
    let err = create_action(params).unwrap_err();
    assert!(err.is_construction_error());

    let mut params = send_message();
    params.name = String::new();
    assert!(create_action(params).is_err());
}

#[tokio::test]
async fn test_run_receives_context() {
    let action = create_action(send_message()).unwrap();
    let output = (action.run)(sample_v1()).await.unwrap();
    assert_eq!(output, json!({ "sent_to": "#general" }));

    let tested = (action.test)(sample_v1()).await.unwrap();
    assert_eq!(tested, output);
}

#[test]
fn test_action_metadata_serialization() {
    let action = create_action(send_message()).unwrap();
    let value = serde_json::to_value(action.metadata()).unwrap();

    assert_eq!(value["name"], "send_message");
    assert_eq!(value["displayName"], "Send Message");
    assert_eq!(value["requireAuth"], true);
    assert_eq!(value["props"]["channel"]["type"], "SHORT_TEXT");
    assert_eq!(
        value["errorHandlingOptions"],
        json!({
            "retryOnFailure": { "defaultValue": false, "hide": false },
            "continueOnFailure": { "defaultValue": false, "hide": false }
        })
    );
}
