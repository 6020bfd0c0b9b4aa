//! Callback plumbing
//!
//! Every callback a piece author registers (`run`, `test`, `onEnable`,
//! `onHandshake`, ...) is stored as a [`HookFn`]: a shareable async function
//! from the (possibly reshaped) execution context to a result. The framework
//! only stores these; the execution engine decides when to await them.

use crate::context::VersionedContext;
use crate::error::Result;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::Arc;

/// A boxed async callback receiving the execution context
pub type HookFn<T> = Arc<dyn Fn(VersionedContext) -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Wrap an async closure as a [`HookFn`]
///
/// ```rust,ignore
/// let run = hook(|ctx| async move {
///     let channel = ctx.props_value().get("channel").cloned();
///     Ok(serde_json::json!({ "channel": channel }))
/// });
/// ```
pub fn hook<T, F, Fut>(f: F) -> HookFn<T>
where
    F: Fn(VersionedContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Arc::new(move |ctx| f(ctx).boxed())
}

/// A callback that ignores its context and resolves to a clone of `value`
pub fn resolved<T>(value: T) -> HookFn<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(move |_ctx| {
        let value = value.clone();
        async move { Ok(value) }.boxed()
    })
}

/// A callback that does nothing
pub fn noop() -> HookFn<()> {
    resolved(())
}
