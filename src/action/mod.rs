//! Action definitions
//!
//! An action is a step a flow can run. Authors describe it with
//! [`ActionParams`]; [`create_action`] fills in the defaults.

use crate::error::{Error, Result};
use crate::hooks::HookFn;
use crate::property::{dangling_refreshers, PropertyMap};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

// ============================================================================
// Error Handling Options
// ============================================================================

/// One error-handling toggle shown on the step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHandlingToggle {
    #[serde(default)]
    pub default_value: bool,
    #[serde(default)]
    pub hide: bool,
}

/// Retry / continue toggles; the two are independent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHandlingOptions {
    #[serde(default)]
    pub retry_on_failure: ErrorHandlingToggle,
    #[serde(default)]
    pub continue_on_failure: ErrorHandlingToggle,
}

// ============================================================================
// Action
// ============================================================================

/// Callback run by an action
pub type ActionRunFn = HookFn<JsonValue>;

/// Author-supplied action definition
pub struct ActionParams {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub props: PropertyMap,
    pub run: ActionRunFn,
    /// Used when testing the step; defaults to `run`
    pub test: Option<ActionRunFn>,
    /// Defaults to `true`
    pub require_auth: Option<bool>,
    pub error_handling_options: Option<ErrorHandlingOptions>,
}

/// A fully-defaulted action
#[derive(Clone)]
pub struct Action {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub props: PropertyMap,
    pub run: ActionRunFn,
    pub test: ActionRunFn,
    pub require_auth: bool,
    pub error_handling_options: ErrorHandlingOptions,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("require_auth", &self.require_auth)
            .field("props", &self.props.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Serializable view of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMetadata {
    pub name: String,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub props: PropertyMap,
    #[serde(default = "default_require_auth")]
    pub require_auth: bool,
    #[serde(default)]
    pub error_handling_options: ErrorHandlingOptions,
}

fn default_require_auth() -> bool {
    true
}

impl Action {
    /// Serializable view of this action
    pub fn metadata(&self) -> ActionMetadata {
        ActionMetadata {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            props: self.props.clone(),
            require_auth: self.require_auth,
            error_handling_options: self.error_handling_options,
        }
    }
}

/// Build an action, applying defaults
pub fn create_action(params: ActionParams) -> Result<Action> {
    if params.name.is_empty() {
        return Err(Error::invalid_definition("action", "", "name cannot be empty"));
    }
    if params.display_name.is_empty() {
        return Err(Error::invalid_definition(
            "action",
            &params.name,
            "display name cannot be empty",
        ));
    }

    for (prop, refresher) in dangling_refreshers(&params.props) {
        warn!(
            "Action '{}': property '{}' refreshes on unknown property '{}'",
            params.name, prop, refresher
        );
    }

    let test = params.test.unwrap_or_else(|| params.run.clone());

    Ok(Action {
        name: params.name,
        display_name: params.display_name,
        description: params.description,
        props: params.props,
        run: params.run,
        test,
        require_auth: params.require_auth.unwrap_or(true),
        error_handling_options: params.error_handling_options.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests;
