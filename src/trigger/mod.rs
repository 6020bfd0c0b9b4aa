//! Trigger definitions
//!
//! A trigger starts a flow. Its runtime behaviour depends on the declared
//! strategy:
//!
//! - `WEBHOOK` - per-flow webhook with optional handshake and renewal
//! - `POLLING` - the engine calls `run` on a schedule
//! - `APP_WEBHOOK` - one app-wide webhook routed by the platform
//!
//! [`create_trigger`] applies the defaults for each strategy.

mod strategies;
mod types;

pub use strategies::create_trigger;
pub use types::{
    HandshakeFn, Trigger, TriggerHookFn, TriggerMetadata, TriggerParams, TriggerRunFn,
    TriggerStrategy, TriggerTestStrategy, WebhookHandshakeConfiguration, WebhookHandshakeStrategy,
    WebhookRenewConfiguration, WebhookResponse,
};
