//! Content accessors over the document store.
//!
//! Reads never fail: a missing document yields its defaults (and seeds them
//! back, once), and a backend error yields the defaults with a log line.
//! Writes are top-level merges and do propagate errors, which handlers map
//! to a generic failure for the editing UI.

use anyhow::Result;
use serde_json::Value;
use tracing::{error, warn};

use super::merge::{mark_recent_projects, merge_with_defaults};
use super::sections::Section;
use crate::store::{DocumentStore, WriteMode};

/// Recompute derived fields on the outgoing document.
fn apply_derived_fields(section: Section, doc: &mut Value) {
    if section == Section::Projects {
        mark_recent_projects(doc);
    }
}

/// Read one section, merging stored fields over its defaults.
pub async fn read_section(store: &dyn DocumentStore, section: Section) -> Value {
    let defaults = section.defaults();
    let path = section.document_path();
    match store.get_document(&path).await {
        Ok(Some(stored)) => {
            let mut merged = merge_with_defaults(&defaults, &stored);
            apply_derived_fields(section, &mut merged);
            merged
        }
        Ok(None) => {
            // Lazy creation: the first read materializes the defaults so the
            // admin panel always edits a real document. The seed write is
            // best-effort; the next read retries it.
            let mut seeded = defaults;
            apply_derived_fields(section, &mut seeded);
            if let Err(err) = store
                .set_document(&path, &seeded, WriteMode::Merge)
                .await
            {
                warn!("Failed to seed defaults for {path}: {err}");
            }
            seeded
        }
        Err(err) => {
            error!("Failed to read {path}: {err}");
            let mut fallback = defaults;
            apply_derived_fields(section, &mut fallback);
            fallback
        }
    }
}

/// Save a partial document for one section and return the merged view.
///
/// # Errors
/// Returns the backend error when the write fails.
pub async fn save_section(
    store: &dyn DocumentStore,
    section: Section,
    patch: Value,
) -> Result<Value> {
    let mut patch = patch;
    apply_derived_fields(section, &mut patch);
    store
        .set_document(&section.document_path(), &patch, WriteMode::Merge)
        .await?;
    Ok(read_section(store, section).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryDocumentStore;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use serde_json::json;

    /// Store whose reads and writes both fail.
    struct UnavailableStore;

    #[async_trait]
    impl DocumentStore for UnavailableStore {
        async fn get_document(&self, _path: &str) -> Result<Option<Value>> {
            Err(anyhow!("backend offline"))
        }

        async fn set_document(&self, _path: &str, _data: &Value, _mode: WriteMode) -> Result<()> {
            Err(anyhow!("backend offline"))
        }

        async fn ping(&self) -> Result<()> {
            Err(anyhow!("backend offline"))
        }
    }

    /// Store that answers reads but rejects writes.
    struct ReadOnlyStore;

    #[async_trait]
    impl DocumentStore for ReadOnlyStore {
        async fn get_document(&self, _path: &str) -> Result<Option<Value>> {
            Ok(None)
        }

        async fn set_document(&self, _data_path: &str, _data: &Value, _mode: WriteMode) -> Result<()> {
            Err(anyhow!("read-only"))
        }

        async fn ping(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn first_read_seeds_defaults_exactly_once() -> Result<()> {
        let store = MemoryDocumentStore::new();

        let first = read_section(&store, Section::Hero).await;
        assert_eq!(first, Section::Hero.defaults());
        assert_eq!(store.writes(), 1);
        assert_eq!(
            store.raw_document(&Section::Hero.document_path()).await,
            Some(Section::Hero.defaults())
        );

        let second = read_section(&store, Section::Hero).await;
        assert_eq!(second, first);
        assert_eq!(store.writes(), 1, "second read must not write again");
        Ok(())
    }

    #[tokio::test]
    async fn partial_save_keeps_defaults_for_untouched_fields() -> Result<()> {
        let store = MemoryDocumentStore::new();

        let saved = save_section(&store, Section::Hero, json!({"title": "Ada Lovelace"})).await?;
        assert_eq!(saved["title"], "Ada Lovelace");
        assert_eq!(saved["subtitle"], Section::Hero.defaults()["subtitle"]);

        let read = read_section(&store, Section::Hero).await;
        assert_eq!(read["title"], "Ada Lovelace");
        assert_eq!(read["cta_label"], Section::Hero.defaults()["cta_label"]);
        Ok(())
    }

    #[tokio::test]
    async fn read_error_falls_back_to_defaults() {
        let store = UnavailableStore;
        let doc = read_section(&store, Section::Contact).await;
        assert_eq!(doc, Section::Contact.defaults());
    }

    #[tokio::test]
    async fn failed_seed_write_still_returns_defaults() {
        let store = ReadOnlyStore;
        let doc = read_section(&store, Section::About).await;
        assert_eq!(doc, Section::About.defaults());
    }

    #[tokio::test]
    async fn save_propagates_backend_errors() {
        let store = UnavailableStore;
        let result = save_section(&store, Section::Footer, json!({"text": "hi"})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn recency_is_recomputed_on_write_and_read() -> Result<()> {
        let store = MemoryDocumentStore::new();
        let patch = json!({"projects": [
            {"name": "newest", "recent": false},
            {"name": "second"},
            {"name": "older", "recent": true},
        ]});

        let saved = save_section(&store, Section::Projects, patch).await?;
        let projects = saved["projects"].as_array().expect("projects array");
        assert_eq!(projects[0]["recent"], true);
        assert_eq!(projects[1]["recent"], true);
        assert_eq!(projects[2]["recent"], false);

        // The stored document carries the recomputed flags too.
        let raw = store
            .raw_document(&Section::Projects.document_path())
            .await
            .expect("stored document");
        assert_eq!(raw["projects"][2]["recent"], false);
        Ok(())
    }
}
