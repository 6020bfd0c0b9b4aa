//! Context backward compatibility
//!
//! Pieces declare the context shape they were built against. Before context
//! versioning existed, the server's public URL was exposed directly as
//! `serverUrl`; it now lives under `server.publicUrl`. Each arm below maps the
//! shape the runtime produces today straight to the shape its version expects,
//! so adding a version never touches the other arms.

use super::types::{
    Context, ContextVersion, ExecutionType, Project, RequestPayload, RunContext, ServerContext,
    Store,
};
use crate::types::{JsonObject, JsonValue};
use std::sync::Arc;

// ============================================================================
// Legacy Context
// ============================================================================

/// Context shape expected by pieces that predate context versioning
#[derive(Debug, Clone)]
pub struct LegacyContext {
    pub execution_type: ExecutionType,
    pub auth: Option<JsonValue>,
    pub props_value: JsonObject,
    pub store: Arc<dyn Store>,
    pub project: Project,
    pub server: ServerContext,
    pub run: RunContext,
    pub webhook_url: Option<String>,
    pub payload: Option<RequestPayload>,
    /// Public URL of the platform (same value as `server.public_url`)
    pub server_url: String,
}

impl From<Context> for LegacyContext {
    fn from(context: Context) -> Self {
        let Context {
            execution_type,
            auth,
            props_value,
            store,
            project,
            server,
            run,
            webhook_url,
            payload,
        } = context;

        let server_url = server.public_url.clone();

        Self {
            execution_type,
            auth,
            props_value,
            store,
            project,
            server,
            run,
            webhook_url,
            payload,
            server_url,
        }
    }
}

// ============================================================================
// Versioned Context
// ============================================================================

/// The context a piece callback actually receives
#[derive(Debug, Clone)]
pub enum VersionedContext {
    /// Piece declared no context version
    Legacy(LegacyContext),
    /// Piece declared [`ContextVersion::V1`]
    V1(Context),
}

impl VersionedContext {
    /// The version this context was shaped for
    pub fn context_version(&self) -> Option<ContextVersion> {
        match self {
            VersionedContext::Legacy(_) => None,
            VersionedContext::V1(_) => Some(ContextVersion::V1),
        }
    }

    pub fn execution_type(&self) -> &ExecutionType {
        match self {
            VersionedContext::Legacy(ctx) => &ctx.execution_type,
            VersionedContext::V1(ctx) => &ctx.execution_type,
        }
    }

    pub fn auth(&self) -> Option<&JsonValue> {
        match self {
            VersionedContext::Legacy(ctx) => ctx.auth.as_ref(),
            VersionedContext::V1(ctx) => ctx.auth.as_ref(),
        }
    }

    pub fn props_value(&self) -> &JsonObject {
        match self {
            VersionedContext::Legacy(ctx) => &ctx.props_value,
            VersionedContext::V1(ctx) => &ctx.props_value,
        }
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        match self {
            VersionedContext::Legacy(ctx) => &ctx.store,
            VersionedContext::V1(ctx) => &ctx.store,
        }
    }

    pub fn project(&self) -> &Project {
        match self {
            VersionedContext::Legacy(ctx) => &ctx.project,
            VersionedContext::V1(ctx) => &ctx.project,
        }
    }

    pub fn server(&self) -> &ServerContext {
        match self {
            VersionedContext::Legacy(ctx) => &ctx.server,
            VersionedContext::V1(ctx) => &ctx.server,
        }
    }

    pub fn run(&self) -> &RunContext {
        match self {
            VersionedContext::Legacy(ctx) => &ctx.run,
            VersionedContext::V1(ctx) => &ctx.run,
        }
    }

    pub fn webhook_url(&self) -> Option<&str> {
        match self {
            VersionedContext::Legacy(ctx) => ctx.webhook_url.as_deref(),
            VersionedContext::V1(ctx) => ctx.webhook_url.as_deref(),
        }
    }

    pub fn payload(&self) -> Option<&RequestPayload> {
        match self {
            VersionedContext::Legacy(ctx) => ctx.payload.as_ref(),
            VersionedContext::V1(ctx) => ctx.payload.as_ref(),
        }
    }

    /// Legacy `serverUrl`; only present on legacy contexts
    pub fn server_url(&self) -> Option<&str> {
        match self {
            VersionedContext::Legacy(ctx) => Some(&ctx.server_url),
            VersionedContext::V1(_) => None,
        }
    }
}

/// Reshape a freshly built context for the version a piece declares
///
/// Takes the context by value: the caller's context is consumed, never
/// mutated, and the V1 arm hands it back untouched.
pub fn make_context_backward_compatible(
    context: Context,
    context_version: Option<ContextVersion>,
) -> VersionedContext {
    match context_version {
        None => VersionedContext::Legacy(LegacyContext::from(context)),
        Some(ContextVersion::V1) => VersionedContext::V1(context),
    }
}
