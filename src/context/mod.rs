//! Execution context module
//!
//! Types describing what a piece callback receives, and the shim that
//! reshapes the current context for pieces built against older shapes.
//!
//! # Overview
//!
//! The context module provides:
//! - `Context` - Current (V1) execution context
//! - `make_context_backward_compatible` - Version shim producing a `VersionedContext`
//! - `Store` / `RunControl` - Capabilities supplied by the execution engine
//! - `InMemoryStore` - Reference store implementation

mod compat;
mod store;
mod types;

pub use compat::{make_context_backward_compatible, LegacyContext, VersionedContext};
pub use store::InMemoryStore;
pub use types::{
    Context, ContextInfo, ContextVersion, ExecutionType, PauseRequest, Project, RequestPayload,
    RunContext, RunControl, ServerContext, StopResponse, Store, StoreScope,
    LATEST_CONTEXT_VERSION,
};

#[cfg(test)]
pub(crate) mod testing;
