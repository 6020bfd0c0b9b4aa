//! Execution context types
//!
//! The context is built by the execution engine immediately before a piece
//! callback runs and is dropped when the callback returns.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, StringMap};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ============================================================================
// Context Version
// ============================================================================

/// Shape of execution context a piece was authored against
///
/// Pieces built before context versioning carry no version at all, which is
/// represented as `Option::<ContextVersion>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextVersion {
    #[serde(rename = "1")]
    V1,
}

/// The context version produced by the current engine
pub const LATEST_CONTEXT_VERSION: ContextVersion = ContextVersion::V1;

impl FromStr for ContextVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" | "V1" | "v1" => Ok(ContextVersion::V1),
            _ => Err(Error::UnknownContextVersion {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContextVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextVersion::V1 => f.write_str("1"),
        }
    }
}

/// Context information a piece declares at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextInfo {
    pub version: ContextVersion,
}

// ============================================================================
// Execution Type
// ============================================================================

/// Whether the callback starts a run or resumes a paused one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "executionType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionType {
    /// First invocation of the step
    Begin,
    /// Invocation after a pause was released
    Resume {
        /// Request that released the pause
        #[serde(rename = "resumePayload")]
        resume_payload: RequestPayload,
    },
}

/// An HTTP request as seen by a piece (trigger payload or resume payload)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    /// Parsed body
    #[serde(default)]
    pub body: JsonValue,
    /// Request headers
    #[serde(default)]
    pub headers: StringMap,
    /// Query string parameters
    #[serde(default)]
    pub query_params: StringMap,
}

// ============================================================================
// Project / Server
// ============================================================================

/// Project the flow belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Platform server endpoints visible to a piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerContext {
    /// Internal API URL
    pub api_url: String,
    /// Publicly reachable URL of the platform
    pub public_url: String,
    /// Engine token scoped to this run
    pub token: String,
}

// ============================================================================
// Store
// ============================================================================

/// Visibility of a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreScope {
    /// Shared by every flow in the project
    Project,
    /// Private to the current flow
    #[default]
    Flow,
}

/// Key/value storage capability handed to pieces
#[async_trait]
pub trait Store: Send + Sync + fmt::Debug {
    /// Store a value, returning it
    async fn put(&self, key: &str, value: JsonValue, scope: StoreScope) -> Result<JsonValue>;

    /// Fetch a value
    async fn get(&self, key: &str, scope: StoreScope) -> Result<Option<JsonValue>>;

    /// Remove a value
    async fn delete(&self, key: &str, scope: StoreScope) -> Result<()>;
}

// ============================================================================
// Run Control
// ============================================================================

/// Response returned to the caller when a run stops early
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopResponse {
    #[serde(default = "default_status")]
    pub status: u16,
    #[serde(default)]
    pub body: JsonValue,
    #[serde(default)]
    pub headers: StringMap,
}

impl Default for StopResponse {
    fn default() -> Self {
        Self {
            status: default_status(),
            body: JsonValue::Null,
            headers: StringMap::new(),
        }
    }
}

fn default_status() -> u16 {
    200
}

/// How a paused run is released
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PauseRequest {
    /// Resume at a point in time
    Delay {
        #[serde(rename = "resumeDateTime")]
        resume_date_time: DateTime<Utc>,
    },
    /// Resume when a webhook request arrives
    Webhook {
        #[serde(rename = "requestId")]
        request_id: String,
        #[serde(default)]
        response: Option<StopResponse>,
    },
}

/// Run-control capability supplied by the execution engine
pub trait RunControl: Send + Sync + fmt::Debug {
    /// Stop the run, optionally answering the caller
    fn stop(&self, response: Option<StopResponse>);

    /// Pause the run
    fn pause(&self, request: PauseRequest);
}

/// The current run
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Run identifier
    pub id: String,
    control: Arc<dyn RunControl>,
}

impl RunContext {
    /// Create a run context backed by the engine's run control
    pub fn new(id: impl Into<String>, control: Arc<dyn RunControl>) -> Self {
        Self {
            id: id.into(),
            control,
        }
    }

    /// Stop the run
    pub fn stop(&self, response: Option<StopResponse>) {
        self.control.stop(response);
    }

    /// Pause the run
    pub fn pause(&self, request: PauseRequest) {
        self.control.pause(request);
    }

    /// Whether two run contexts share the same engine control
    pub fn same_control(&self, other: &RunContext) -> bool {
        Arc::ptr_eq(&self.control, &other.control)
    }
}

// ============================================================================
// Context
// ============================================================================

/// Execution context in its current (V1) shape
#[derive(Debug, Clone)]
pub struct Context {
    /// Begin or resume
    pub execution_type: ExecutionType,
    /// Resolved auth value (opaque to the framework)
    pub auth: Option<JsonValue>,
    /// Resolved property values keyed by property name
    pub props_value: JsonObject,
    /// Key/value store
    pub store: Arc<dyn Store>,
    /// Owning project
    pub project: Project,
    /// Platform endpoints
    pub server: ServerContext,
    /// Run control
    pub run: RunContext,
    /// Webhook URL of the trigger being invoked
    pub webhook_url: Option<String>,
    /// Incoming trigger payload
    pub payload: Option<RequestPayload>,
}

impl Context {
    /// Whether this invocation resumes a paused run
    pub fn is_resume(&self) -> bool {
        matches!(self.execution_type, ExecutionType::Resume { .. })
    }
}
