//! Document store: one JSON document per fixed path.
//!
//! The store is the only persistence seam in the service. Handlers never see
//! SQL; they call [`DocumentStore`] through an `Arc<dyn DocumentStore>` so the
//! backend can be swapped (Postgres in production, in-memory for tests and
//! local development).
//!
//! Writes are shallow: [`WriteMode::Merge`] overwrites only the top-level
//! fields supplied, replacing nested arrays and objects wholesale. There are
//! no cross-document operations.

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// How a write combines with an existing document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Top-level merge: supplied fields overwrite, the rest stay.
    Merge,
    /// Replace the whole document.
    Replace,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document by path. `Ok(None)` means the document does not exist;
    /// `Err` means the backend could not answer, which callers must not
    /// confuse with absence.
    async fn get_document(&self, path: &str) -> Result<Option<Value>>;

    /// Upsert a document. A merge against a missing document behaves like an
    /// insert, so "not initialized" never fails a write.
    async fn set_document(&self, path: &str, data: &Value, mode: WriteMode) -> Result<()>;

    /// Cheap backend connectivity probe for health reporting.
    async fn ping(&self) -> Result<()>;
}
