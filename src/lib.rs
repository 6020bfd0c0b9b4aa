// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Pieces Framework
//!
//! An SDK for authoring *pieces*: plugins that add actions and triggers to a
//! workflow-automation platform. Authors declare a piece once at load time;
//! the platform's execution engine later invokes the callbacks it registers.
//!
//! ## Features
//!
//! - **Property Model**: Typed inputs, from short text to OAuth2, with dynamic dropdowns
//! - **Trigger Strategies**: Webhook, polling and app-webhook defaults applied per strategy
//! - **Context Versioning**: Reshapes the execution context for pieces built before versioning
//! - **Translation**: Overlays locale dictionaries onto piece metadata
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pieces_framework::action::{create_action, ActionParams};
//! use pieces_framework::hooks::hook;
//! use pieces_framework::piece::{create_piece, PieceParams};
//! use pieces_framework::property::{Property, PropertyMap};
//!
//! let mut props = PropertyMap::new();
//! props.insert("channel".into(), Property::short_text("Channel").required());
//!
//! let send = create_action(ActionParams {
//!     name: "send_message".into(),
//!     display_name: "Send Message".into(),
//!     description: "Post a message".into(),
//!     props,
//!     run: hook(|ctx| async move { Ok(serde_json::json!(ctx.props_value())) }),
//!     test: None,
//!     require_auth: None,
//!     error_handling_options: None,
//! })?;
//!
//! let piece = create_piece(PieceParams {
//!     display_name: "Chat".into(),
//!     actions: vec![send],
//!     ..Default::default()
//! })?;
//! let metadata = piece.metadata("@pieces/chat", "0.1.0");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Piece                                  │
//! │   auth?        actions{name → Action}     triggers{name → Trigger}
//! └─────────────────────────────────────────────────────────────────┘
//!          │                  │                        │
//! ┌────────┴──────┬───────────┴────────┬───────────────┴───────────┐
//! │   Property    │      Hooks         │   Trigger strategies      │
//! ├───────────────┼────────────────────┼───────────────────────────┤
//! │ Basic kinds   │ HookFn<T>          │ WEBHOOK                   │
//! │ Dropdowns     │ VersionedContext   │ POLLING                   │
//! │ Auth kinds    │ (context shim)     │ APP_WEBHOOK               │
//! └───────────────┴────────────────────┴───────────────────────────┘
//!          │
//!   PieceMetadata ──▶ i18n::Translator ──▶ translated PieceMetadata
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the framework
pub mod error;

/// Common types and type aliases
pub mod types;

/// Async callback plumbing
pub mod hooks;

/// Property model
pub mod property;

/// Action definitions
pub mod action;

/// Trigger definitions and strategy defaulting
pub mod trigger;

/// Execution context and version shim
pub mod context;

/// Piece definitions and metadata
pub mod piece;

/// Metadata translation
pub mod i18n;

/// Framework configuration
pub mod config;

/// Piece metadata loader
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used items
pub use action::{create_action, Action, ActionParams};
pub use context::{make_context_backward_compatible, Context, ContextVersion, VersionedContext};
pub use i18n::{translate_piece, Translator};
pub use piece::{create_piece, Piece, PieceMetadata, PieceParams};
pub use property::{Property, PropertyMap};
pub use trigger::{create_trigger, Trigger, TriggerParams, TriggerStrategy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
