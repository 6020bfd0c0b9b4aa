//! Integration tests through the public API
//!
//! Tests the full flow: piece definition → metadata → loader → translation,
//! and engine-side invocation of callbacks through the context version shim.

use chrono::{TimeZone, Utc};
use pieces_framework::action::{create_action, ActionParams};
use pieces_framework::context::{
    make_context_backward_compatible, Context, ContextVersion, ExecutionType, InMemoryStore,
    PauseRequest, Project, RequestPayload, RunContext, RunControl, ServerContext, StopResponse,
    StoreScope,
};
use pieces_framework::hooks::{hook, noop};
use pieces_framework::i18n::Translator;
use pieces_framework::loader::{load_metadata_from_str, validate_metadata};
use pieces_framework::piece::{
    create_piece, Piece, PieceParams, Translations, MINIMUM_RELEASE_FLOOR,
};
use pieces_framework::property::{Property, PropertyMap};
use pieces_framework::trigger::{
    create_trigger, TriggerParams, TriggerStrategy, TriggerTestStrategy,
    WebhookHandshakeConfiguration, WebhookHandshakeStrategy, WebhookResponse,
};
use pieces_framework::types::{JsonValue, Locale};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Default)]
struct EngineRunControl {
    pauses: Mutex<Vec<PauseRequest>>,
    stops: Mutex<Vec<Option<StopResponse>>>,
}

impl RunControl for EngineRunControl {
    fn stop(&self, response: Option<StopResponse>) {
        self.stops.lock().unwrap().push(response);
    }

    fn pause(&self, request: PauseRequest) {
        self.pauses.lock().unwrap().push(request);
    }
}

fn engine_context(control: Arc<EngineRunControl>, store: Arc<InMemoryStore>) -> Context {
    Context {
        execution_type: ExecutionType::Begin,
        auth: Some(json!("xoxb-secret")),
        props_value: json!({ "channel": "#ops", "text": "deploy finished" })
            .as_object()
            .cloned()
            .unwrap(),
        store,
        project: Project {
            id: "proj_42".to_string(),
            external_id: None,
        },
        server: ServerContext {
            api_url: "http://engine:3000/api/".to_string(),
            public_url: "https://automation.example.com/".to_string(),
            token: "run-token".to_string(),
        },
        run: RunContext::new("run_42", control),
        webhook_url: Some("https://automation.example.com/webhooks/flow_1".to_string()),
        payload: Some(RequestPayload {
            body: json!({ "event": "message", "text": "hi" }),
            headers: [("x-hook-secret".to_string(), "s3cret".to_string())]
                .into_iter()
                .collect(),
            query_params: Default::default(),
        }),
    }
}

fn chat_piece() -> Piece {
    let mut props = PropertyMap::new();
    props.insert("channel".to_string(), Property::short_text("Channel").required());
    props.insert("text".to_string(), Property::long_text("Text").required());

    let send_message = create_action(ActionParams {
        name: "send_message".to_string(),
        display_name: "Send Message".to_string(),
        description: "Post a message to a channel".to_string(),
        props,
        run: hook(|ctx| async move {
            let count = ctx
                .store()
                .get("sent", StoreScope::Flow)
                .await?
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            ctx.store()
                .put("sent", json!(count + 1), StoreScope::Flow)
                .await?;

            Ok(json!({
                "channel": ctx.props_value().get("channel"),
                "sent": count + 1,
            }))
        }),
        test: None,
        require_auth: None,
        error_handling_options: None,
    })
    .unwrap();

    let wait_for_reply = create_action(ActionParams {
        name: "wait_for_reply".to_string(),
        display_name: "Wait for Reply".to_string(),
        description: "Pause until someone replies".to_string(),
        props: PropertyMap::new(),
        run: hook(|ctx| async move {
            ctx.run().pause(PauseRequest::Delay {
                resume_date_time: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            });
            Ok(JsonValue::Null)
        }),
        test: None,
        require_auth: Some(false),
        error_handling_options: None,
    })
    .unwrap();

    let mut new_message = TriggerParams::new(
        "new_message",
        "New Message",
        "Fires when a message is posted",
        TriggerStrategy::Webhook,
        noop(),
        noop(),
        hook(|ctx| async move {
            Ok(ctx
                .payload()
                .map(|p| vec![p.body.clone()])
                .unwrap_or_default())
        }),
    );
    new_message.sample_data = json!({ "event": "message", "text": "sample" });
    new_message.handshake_configuration = Some(WebhookHandshakeConfiguration::new(
        WebhookHandshakeStrategy::HeaderPresent,
        "x-hook-secret",
    ));
    new_message.on_handshake = Some(hook(|ctx| async move {
        let secret = ctx
            .payload()
            .and_then(|p| p.headers.get("x-hook-secret").cloned());
        Ok(WebhookResponse {
            status: 200,
            body: None,
            headers: secret.map(|s| [("x-hook-secret".to_string(), s)].into_iter().collect()),
        })
    }));

    create_piece(PieceParams {
        display_name: "Chat".to_string(),
        logo_url: "https://cdn.example.com/chat.png".to_string(),
        authors: vec!["integrations".to_string()],
        description: "Team chat".to_string(),
        auth: Some(Property::secret_text("Bot Token").required()),
        minimum_supported_release: Some("0.60.0".to_string()),
        actions: vec![send_message, wait_for_reply],
        triggers: vec![create_trigger(new_message).unwrap()],
        ..Default::default()
    })
    .unwrap()
}

// ============================================================================
// Metadata Flow Tests
// ============================================================================

#[test]
fn test_metadata_round_trip_through_loader() {
    let piece = chat_piece();
    let metadata = piece.metadata("@pieces/chat", "1.2.0");

    let document = serde_json::to_string_pretty(&metadata).unwrap();
    let loaded = load_metadata_from_str(&document).unwrap();
    validate_metadata(&loaded, MINIMUM_RELEASE_FLOOR).unwrap();

    assert_eq!(loaded.minimum_supported_release.to_string(), "0.73.0");
    assert_eq!(loaded.context_info.map(|c| c.version), Some(ContextVersion::V1));
    assert_eq!(
        loaded.triggers["new_message"].test_strategy,
        TriggerTestStrategy::Simulation
    );
    assert!(!loaded.actions["wait_for_reply"].require_auth);
}

#[test]
fn test_translate_loaded_metadata() {
    let mut i18n = Translations::new();
    i18n.insert(
        Locale::French,
        [
            ("Chat", "Discussion"),
            ("Send Message", "Envoyer un message"),
            ("Channel", "Canal"),
            ("New Message", "Nouveau message"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<BTreeMap<_, _>>(),
    );
    let metadata = chat_piece().metadata("@pieces/chat", "1.2.0").with_i18n(i18n);

    let translator = Translator::default();
    let french = translator.translate_piece(&metadata, Some(Locale::French));

    assert_eq!(french.display_name, "Discussion");
    assert_eq!(french.actions["send_message"].display_name, "Envoyer un message");
    assert_eq!(
        french.actions["send_message"].props["channel"].display_name(),
        "Canal"
    );
    assert_eq!(french.actions["send_message"].props["text"].display_name(), "Text");
    assert_eq!(french.triggers["new_message"].display_name, "Nouveau message");

    // Source metadata untouched
    assert_eq!(metadata.display_name, "Chat");
}

// ============================================================================
// Engine Invocation Tests
// ============================================================================

#[tokio::test]
async fn test_engine_runs_action_with_shaped_context() {
    let piece = chat_piece();
    let control = Arc::new(EngineRunControl::default());
    let store = Arc::new(InMemoryStore::new());

    let action = piece.get_action("send_message").unwrap();
    for expected in 1..=2 {
        let ctx = make_context_backward_compatible(
            engine_context(control.clone(), store.clone()),
            Some(piece.context_version()),
        );
        assert!(ctx.server_url().is_none());

        let output = (action.run)(ctx).await.unwrap();
        assert_eq!(output, json!({ "channel": "#ops", "sent": expected }));
    }

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_engine_pause_reaches_run_control() {
    let piece = chat_piece();
    let control = Arc::new(EngineRunControl::default());
    let store = Arc::new(InMemoryStore::new());

    let action = piece.get_action("wait_for_reply").unwrap();
    let ctx = make_context_backward_compatible(
        engine_context(control.clone(), store),
        Some(ContextVersion::V1),
    );
    (action.run)(ctx).await.unwrap();

    let pauses = control.pauses.lock().unwrap();
    assert_eq!(pauses.len(), 1);
    assert!(matches!(pauses[0], PauseRequest::Delay { .. }));
    assert!(control.stops.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_legacy_piece_sees_server_url() {
    let control = Arc::new(EngineRunControl::default());
    let store = Arc::new(InMemoryStore::new());

    let legacy_hook = hook(|ctx| async move {
        Ok(json!({
            "serverUrl": ctx.server_url(),
            "publicUrl": ctx.server().public_url,
            "version": ctx.context_version().map(|v| v.to_string()),
        }))
    });

    let ctx = make_context_backward_compatible(engine_context(control, store), None);
    let output = legacy_hook(ctx).await.unwrap();

    assert_eq!(
        output,
        json!({
            "serverUrl": "https://automation.example.com/",
            "publicUrl": "https://automation.example.com/",
            "version": null,
        })
    );
}

#[tokio::test]
async fn test_webhook_trigger_callbacks() {
    let piece = chat_piece();
    let trigger = piece.get_trigger("new_message").unwrap();
    let control = Arc::new(EngineRunControl::default());
    let store = Arc::new(InMemoryStore::new());

    let shaped = || {
        make_context_backward_compatible(
            engine_context(control.clone(), store.clone()),
            Some(ContextVersion::V1),
        )
    };

    let handshake = (trigger.on_handshake())(shaped()).await.unwrap();
    assert_eq!(handshake.status, 200);
    assert_eq!(
        handshake.headers.and_then(|h| h.get("x-hook-secret").cloned()),
        Some("s3cret".to_string())
    );

    let events = (trigger.run())(shaped()).await.unwrap();
    assert_eq!(events, vec![json!({ "event": "message", "text": "hi" })]);

    let test_events = (trigger.test())(shaped()).await.unwrap();
    assert_eq!(test_events, vec![json!({ "event": "message", "text": "sample" })]);

    (trigger.on_enable())(shaped()).await.unwrap();
    (trigger.on_renew())(shaped()).await.unwrap();
}
