//! Storage for temporarily shared code snippets.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use codeforge_core::share::Snippet;
use tokio::sync::RwLock;
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("expired: {0}")]
    Expired(String),

    #[error("store error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnippet {
    pub snippet: Snippet,
    pub expires_at: DateTime<Utc>,
}

impl StoredSnippet {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// A keyed store of snippets that expire.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Write (create or overwrite) a snippet.
    async fn put(&self, key: &str, snippet: StoredSnippet) -> Result<(), StoreError>;

    /// Read a snippet. `NotFound` if absent, `Expired` if its time has passed.
    async fn get(&self, key: &str) -> Result<StoredSnippet, StoreError>;

    /// Delete a live snippet. `NotFound` if absent or already expired.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Drop every expired snippet, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, StoreError>;
}

/// Process-local snippet store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredSnippet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnippetStore for MemoryStore {
    async fn put(&self, key: &str, snippet: StoredSnippet) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), snippet);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<StoredSnippet, StoreError> {
        let now = Utc::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Err(StoreError::NotFound(key.to_string())),
                Some(s) if !s.is_expired(now) => return Ok(s.clone()),
                Some(_) => {}
            }
        }
        // Expired: evict so the next lookup reports it as gone.
        self.entries.write().await.remove(key);
        Err(StoreError::Expired(key.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        match entries.remove(key) {
            Some(s) if !s.is_expired(now) => Ok(()),
            _ => Err(StoreError::NotFound(key.to_string())),
        }
    }

    async fn purge_expired(&self) -> Result<usize, StoreError> {
        let now = Utc::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, s| !s.is_expired(now));
        Ok(before - entries.len())
    }
}

/// Background task that periodically evicts expired snippets.
pub async fn run_sweeper(store: Arc<dyn SnippetStore>, interval_secs: u64) {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    loop {
        ticker.tick().await;
        match store.purge_expired().await {
            Ok(0) => {}
            Ok(n) => debug!("share sweeper: evicted {n} expired snippets"),
            Err(e) => error!("share sweeper error: {e}"),
        }
    }
}
