//! Piece fixtures shared by unit tests across modules

use super::{create_piece, Piece, PieceParams};
use crate::action::{create_action, Action, ActionParams};
use crate::hooks::{hook, noop};
use crate::property::{DropdownOption, Property, PropertyMap};
use crate::trigger::{create_trigger, Trigger, TriggerParams, TriggerStrategy};
use crate::types::PieceCategory;
use serde_json::json;

pub(crate) fn action(name: &str, display_name: &str, props: PropertyMap) -> Action {
    create_action(ActionParams {
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: format!("{display_name} in a channel"),
        props,
        run: hook(|ctx| async move { Ok(json!(ctx.props_value())) }),
        test: None,
        require_auth: None,
        error_handling_options: None,
    })
    .unwrap()
}

pub(crate) fn polling_trigger(name: &str, display_name: &str) -> Trigger {
    let mut params = TriggerParams::new(
        name,
        display_name,
        "Fires when a message is posted",
        TriggerStrategy::Polling,
        noop(),
        noop(),
        hook(|_ctx| async move { Ok(vec![json!({ "ts": "1" })]) }),
    );
    params.sample_data = json!({ "ts": "0", "text": "hello" });
    create_trigger(params).unwrap()
}

/// A chat piece with custom auth, two actions and one trigger
pub(crate) fn chat_piece() -> Piece {
    let mut auth_props = PropertyMap::new();
    auth_props.insert(
        "token".to_string(),
        Property::secret_text("Bot Token").with_description("Token from the app settings"),
    );
    auth_props.insert(
        "region".to_string(),
        Property::static_dropdown(
            "Region",
            vec![
                DropdownOption::new("Europe", "eu"),
                DropdownOption::new("United States", "us"),
            ],
        ),
    );

    let mut send_props = PropertyMap::new();
    send_props.insert(
        "channel".to_string(),
        Property::short_text("Channel").required(),
    );
    send_props.insert(
        "priority".to_string(),
        Property::static_dropdown(
            "Priority",
            vec![
                DropdownOption::new("High", "high"),
                DropdownOption::new("Low", "low"),
            ],
        ),
    );

    let mut attachment_fields = PropertyMap::new();
    attachment_fields.insert("title".to_string(), Property::short_text("Title"));
    let mut upload_props = PropertyMap::new();
    upload_props.insert(
        "attachments".to_string(),
        Property::array("Attachments", Some(attachment_fields)),
    );
    upload_props.insert("file".to_string(), Property::file("File"));

    create_piece(PieceParams {
        display_name: "Chat".to_string(),
        logo_url: "https://cdn.example.com/chat.png".to_string(),
        authors: vec!["team".to_string()],
        description: "Send and receive chat messages".to_string(),
        auth: Some(Property::custom_auth("Chat Connection", auth_props).required()),
        categories: vec![PieceCategory::Communication],
        minimum_supported_release: Some("0.30.0".to_string()),
        maximum_supported_release: None,
        actions: vec![
            action("send_message", "Send Message", send_props),
            action("upload_file", "Upload File", upload_props),
        ],
        triggers: vec![polling_trigger("new_message", "New Message")],
    })
    .unwrap()
}
