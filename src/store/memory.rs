//! In-memory document store for tests and local development.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use super::{DocumentStore, WriteMode};

/// HashMap-backed store mirroring the Postgres merge semantics.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<String, Value>>,
    writes: AtomicU64,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes performed so far.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Raw stored document, bypassing defaults. Handy for assertions.
    pub async fn raw_document(&self, path: &str) -> Option<Value> {
        self.documents.lock().await.get(path).cloned()
    }

    /// Mirror of the `jsonb || jsonb` operator for object documents.
    fn top_level_merge(existing: &mut Value, incoming: &Value) {
        let (Some(existing_map), Some(incoming_map)) =
            (existing.as_object_mut(), incoming.as_object())
        else {
            *existing = incoming.clone();
            return;
        };
        for (key, value) in incoming_map {
            existing_map.insert(key.clone(), value.clone());
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_document(&self, path: &str) -> Result<Option<Value>> {
        Ok(self.documents.lock().await.get(path).cloned())
    }

    async fn set_document(&self, path: &str, data: &Value, mode: WriteMode) -> Result<()> {
        let mut documents = self.documents.lock().await;
        self.writes.fetch_add(1, Ordering::Relaxed);
        match mode {
            WriteMode::Replace => {
                documents.insert(path.to_string(), data.clone());
            }
            WriteMode::Merge => match documents.get_mut(path) {
                Some(existing) => Self::top_level_merge(existing, data),
                None => {
                    documents.insert(path.to_string(), data.clone());
                }
            },
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
