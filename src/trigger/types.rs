//! Trigger types
//!
//! Strategy tags, webhook settings, and the assembled [`Trigger`] record.

use crate::error::{Error, Result};
use crate::hooks::HookFn;
use crate::property::PropertyMap;
use crate::types::{JsonValue, StringMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Strategy Tags
// ============================================================================

/// How a trigger learns about new events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerStrategy {
    /// The engine calls `run` on a schedule
    Polling,
    /// The external service calls a per-flow webhook URL
    Webhook,
    /// The external service calls one app-wide webhook, routed by the platform
    AppWebhook,
}

impl TriggerStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerStrategy::Polling => "POLLING",
            TriggerStrategy::Webhook => "WEBHOOK",
            TriggerStrategy::AppWebhook => "APP_WEBHOOK",
        }
    }
}

impl FromStr for TriggerStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "POLLING" => Ok(TriggerStrategy::Polling),
            "WEBHOOK" => Ok(TriggerStrategy::Webhook),
            "APP_WEBHOOK" => Ok(TriggerStrategy::AppWebhook),
            _ => Err(Error::unknown_strategy(s)),
        }
    }
}

impl fmt::Display for TriggerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the builder UI produces test data for a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerTestStrategy {
    /// Wait for a real event to arrive
    Simulation,
    /// Call the trigger's `test` callback
    TestFunction,
}

// ============================================================================
// Webhook Settings
// ============================================================================

/// Where the handshake marker is found on an incoming request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookHandshakeStrategy {
    #[default]
    None,
    HeaderPresent,
    QueryPresent,
    BodyParamPresent,
}

/// Handshake detection settings for webhook triggers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookHandshakeConfiguration {
    pub strategy: WebhookHandshakeStrategy,

    /// Header, query or body parameter to look for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
}

impl WebhookHandshakeConfiguration {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(strategy: WebhookHandshakeStrategy, param_name: impl Into<String>) -> Self {
        Self {
            strategy,
            param_name: Some(param_name.into()),
        }
    }
}

/// When a webhook subscription must be renewed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookRenewConfiguration {
    #[default]
    None,
    Cron {
        #[serde(rename = "cronExpression")]
        cron_expression: String,
    },
}

/// Response sent back to the caller of a webhook during a handshake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<StringMap>,
}

impl WebhookResponse {
    /// Bare 200 with no body
    pub fn ok() -> Self {
        Self {
            status: 200,
            body: None,
            headers: None,
        }
    }
}

// ============================================================================
// Callbacks
// ============================================================================

/// Lifecycle callback (`onEnable`, `onDisable`, `onStart`, `onRenew`)
pub type TriggerHookFn = HookFn<()>;

/// Callback producing trigger events (`run`, `test`)
pub type TriggerRunFn = HookFn<Vec<JsonValue>>;

/// Callback answering a webhook handshake
pub type HandshakeFn = HookFn<WebhookResponse>;

// ============================================================================
// Params
// ============================================================================

/// Author-supplied trigger definition
pub struct TriggerParams {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub props: PropertyMap,
    pub strategy: TriggerStrategy,
    pub on_enable: TriggerHookFn,
    pub on_disable: TriggerHookFn,
    pub run: TriggerRunFn,
    /// Example event shown in the builder; `Null` when the author has none
    pub sample_data: JsonValue,
    pub test: Option<TriggerRunFn>,
    pub on_start: Option<TriggerHookFn>,
    pub require_auth: Option<bool>,

    // Webhook-only settings, ignored by other strategies
    pub handshake_configuration: Option<WebhookHandshakeConfiguration>,
    pub on_handshake: Option<HandshakeFn>,
    pub renew_configuration: Option<WebhookRenewConfiguration>,
    pub on_renew: Option<TriggerHookFn>,
}

impl TriggerParams {
    /// Params with the required fields set and every optional one left empty
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        strategy: TriggerStrategy,
        on_enable: TriggerHookFn,
        on_disable: TriggerHookFn,
        run: TriggerRunFn,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: description.into(),
            props: PropertyMap::new(),
            strategy,
            on_enable,
            on_disable,
            run,
            sample_data: JsonValue::Null,
            test: None,
            on_start: None,
            require_auth: None,
            handshake_configuration: None,
            on_handshake: None,
            renew_configuration: None,
            on_renew: None,
        }
    }

    /// Whether any webhook-only setting was supplied
    pub(crate) fn has_webhook_settings(&self) -> bool {
        self.handshake_configuration.is_some()
            || self.on_handshake.is_some()
            || self.renew_configuration.is_some()
            || self.on_renew.is_some()
    }
}

// ============================================================================
// Trigger
// ============================================================================

/// A fully-defaulted trigger
///
/// Fields are read through accessors; `test_strategy` in particular is
/// derived during construction and cannot be set.
#[derive(Clone)]
pub struct Trigger {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) description: String,
    pub(crate) props: PropertyMap,
    pub(crate) strategy: TriggerStrategy,
    pub(crate) sample_data: JsonValue,
    pub(crate) test_strategy: TriggerTestStrategy,
    pub(crate) require_auth: bool,
    pub(crate) handshake_configuration: WebhookHandshakeConfiguration,
    pub(crate) renew_configuration: WebhookRenewConfiguration,
    pub(crate) on_enable: TriggerHookFn,
    pub(crate) on_disable: TriggerHookFn,
    pub(crate) on_start: TriggerHookFn,
    pub(crate) on_handshake: HandshakeFn,
    pub(crate) on_renew: TriggerHookFn,
    pub(crate) run: TriggerRunFn,
    pub(crate) test: TriggerRunFn,
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("name", &self.name)
            .field("strategy", &self.strategy)
            .field("test_strategy", &self.test_strategy)
            .field("require_auth", &self.require_auth)
            .field("handshake_configuration", &self.handshake_configuration)
            .field("renew_configuration", &self.renew_configuration)
            .finish_non_exhaustive()
    }
}

impl Trigger {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn props(&self) -> &PropertyMap {
        &self.props
    }

    pub fn strategy(&self) -> TriggerStrategy {
        self.strategy
    }

    pub fn sample_data(&self) -> &JsonValue {
        &self.sample_data
    }

    pub fn test_strategy(&self) -> TriggerTestStrategy {
        self.test_strategy
    }

    pub fn require_auth(&self) -> bool {
        self.require_auth
    }

    pub fn handshake_configuration(&self) -> &WebhookHandshakeConfiguration {
        &self.handshake_configuration
    }

    pub fn renew_configuration(&self) -> &WebhookRenewConfiguration {
        &self.renew_configuration
    }

    pub fn on_enable(&self) -> &TriggerHookFn {
        &self.on_enable
    }

    pub fn on_disable(&self) -> &TriggerHookFn {
        &self.on_disable
    }

    pub fn on_start(&self) -> &TriggerHookFn {
        &self.on_start
    }

    pub fn on_handshake(&self) -> &HandshakeFn {
        &self.on_handshake
    }

    pub fn on_renew(&self) -> &TriggerHookFn {
        &self.on_renew
    }

    pub fn run(&self) -> &TriggerRunFn {
        &self.run
    }

    pub fn test(&self) -> &TriggerRunFn {
        &self.test
    }

    /// Serializable view of this trigger
    pub fn metadata(&self) -> TriggerMetadata {
        TriggerMetadata {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            props: self.props.clone(),
            strategy: self.strategy,
            sample_data: self.sample_data.clone(),
            test_strategy: self.test_strategy,
            require_auth: self.require_auth,
            handshake_configuration: self.handshake_configuration.clone(),
            renew_configuration: self.renew_configuration.clone(),
        }
    }
}

/// Serializable view of a trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerMetadata {
    pub name: String,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub props: PropertyMap,
    #[serde(rename = "type")]
    pub strategy: TriggerStrategy,
    #[serde(default)]
    pub sample_data: JsonValue,
    pub test_strategy: TriggerTestStrategy,
    #[serde(default = "default_require_auth")]
    pub require_auth: bool,
    #[serde(default)]
    pub handshake_configuration: WebhookHandshakeConfiguration,
    #[serde(default)]
    pub renew_configuration: WebhookRenewConfiguration,
}

fn default_require_auth() -> bool {
    true
}
