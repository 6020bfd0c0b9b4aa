//! Trigger strategy defaulting
//!
//! [`create_trigger`] validates the author's params and hands them to the
//! defaulting function for the declared strategy. Each strategy decides on
//! its own which webhook settings it honours and how the builder tests it.

use super::types::{
    HandshakeFn, Trigger, TriggerHookFn, TriggerParams, TriggerStrategy, TriggerTestStrategy,
    WebhookHandshakeConfiguration, WebhookRenewConfiguration, WebhookResponse,
};
use crate::error::{Error, Result};
use crate::hooks::{noop, resolved};
use crate::property::dangling_refreshers;
use tracing::{debug, warn};

/// Webhook settings after defaulting
struct WebhookSettings {
    handshake_configuration: WebhookHandshakeConfiguration,
    on_handshake: HandshakeFn,
    renew_configuration: WebhookRenewConfiguration,
    on_renew: TriggerHookFn,
}

impl WebhookSettings {
    /// No handshake, no renewal
    fn none() -> Self {
        Self {
            handshake_configuration: WebhookHandshakeConfiguration::none(),
            on_handshake: resolved(WebhookResponse::ok()),
            renew_configuration: WebhookRenewConfiguration::None,
            on_renew: noop(),
        }
    }
}

/// Build a trigger, applying the defaults of its strategy
///
/// The returned record only stores callbacks; none of them is invoked here.
pub fn create_trigger(params: TriggerParams) -> Result<Trigger> {
    validate(&params)?;

    for (prop, refresher) in dangling_refreshers(&params.props) {
        warn!(
            "Trigger '{}': property '{}' refreshes on unknown property '{}'",
            params.name, prop, refresher
        );
    }

    let trigger = match params.strategy {
        TriggerStrategy::Webhook => webhook_defaults(params),
        TriggerStrategy::Polling => polling_defaults(params),
        TriggerStrategy::AppWebhook => app_webhook_defaults(params),
    };

    debug!(
        "Created {} trigger '{}' (test strategy {:?})",
        trigger.strategy, trigger.name, trigger.test_strategy
    );

    Ok(trigger)
}

fn validate(params: &TriggerParams) -> Result<()> {
    if params.name.is_empty() {
        return Err(Error::invalid_definition("trigger", "", "name cannot be empty"));
    }
    if params.display_name.is_empty() {
        return Err(Error::invalid_definition(
            "trigger",
            &params.name,
            "display name cannot be empty",
        ));
    }
    if params.description.is_empty() {
        return Err(Error::invalid_definition(
            "trigger",
            &params.name,
            "description cannot be empty",
        ));
    }
    Ok(())
}

// ============================================================================
// Per-strategy defaults
// ============================================================================

fn webhook_defaults(mut params: TriggerParams) -> Trigger {
    let test_strategy = if params.test.is_some() {
        TriggerTestStrategy::TestFunction
    } else {
        TriggerTestStrategy::Simulation
    };

    let settings = WebhookSettings {
        handshake_configuration: params
            .handshake_configuration
            .take()
            .unwrap_or_else(WebhookHandshakeConfiguration::none),
        on_handshake: params
            .on_handshake
            .take()
            .unwrap_or_else(|| resolved(WebhookResponse::ok())),
        renew_configuration: params.renew_configuration.take().unwrap_or_default(),
        on_renew: params.on_renew.take().unwrap_or_else(noop),
    };

    assemble(params, test_strategy, settings)
}

fn polling_defaults(params: TriggerParams) -> Trigger {
    ignore_webhook_settings(&params);
    assemble(params, TriggerTestStrategy::TestFunction, WebhookSettings::none())
}

fn app_webhook_defaults(params: TriggerParams) -> Trigger {
    ignore_webhook_settings(&params);

    let test_strategy = if params.sample_data.is_null() && params.test.is_none() {
        TriggerTestStrategy::Simulation
    } else {
        TriggerTestStrategy::TestFunction
    };

    assemble(params, test_strategy, WebhookSettings::none())
}

fn ignore_webhook_settings(params: &TriggerParams) {
    if params.has_webhook_settings() {
        debug!(
            "Trigger '{}': ignoring handshake/renew settings for {} strategy",
            params.name, params.strategy
        );
    }
}

/// Fill in the strategy-independent defaults
fn assemble(
    params: TriggerParams,
    test_strategy: TriggerTestStrategy,
    settings: WebhookSettings,
) -> Trigger {
    let test = params
        .test
        .unwrap_or_else(|| resolved(vec![params.sample_data.clone()]));

    Trigger {
        name: params.name,
        display_name: params.display_name,
        description: params.description,
        props: params.props,
        strategy: params.strategy,
        sample_data: params.sample_data,
        test_strategy,
        require_auth: params.require_auth.unwrap_or(true),
        handshake_configuration: settings.handshake_configuration,
        renew_configuration: settings.renew_configuration,
        on_enable: params.on_enable,
        on_disable: params.on_disable,
        on_start: params.on_start.unwrap_or_else(noop),
        on_handshake: settings.on_handshake,
        on_renew: settings.on_renew,
        run: params.run,
        test,
    }
}
