//! In-memory store
//!
//! Reference implementation of the [`Store`] capability. Values live for as
//! long as the store does; clones share the same entries.

use super::types::{Store, StoreScope};
use crate::error::Result;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store backed by a shared in-memory map
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<(StoreScope, String), JsonValue>>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values across all scopes
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no values
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn put(&self, key: &str, value: JsonValue, scope: StoreScope) -> Result<JsonValue> {
        let mut entries = self.entries.write().await;
        entries.insert((scope, key.to_string()), value.clone());
        Ok(value)
    }

    async fn get(&self, key: &str, scope: StoreScope) -> Result<Option<JsonValue>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(scope, key.to_string())).cloned())
    }

    async fn delete(&self, key: &str, scope: StoreScope) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(&(scope, key.to_string()));
        Ok(())
    }
}
