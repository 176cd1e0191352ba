//! Per-page view counters stored as one more document.

use anyhow::Result;
use serde_json::{json, Value};

use crate::store::{DocumentStore, WriteMode};

pub const VIEWS_DOCUMENT_PATH: &str = "metrics/views";

/// Increment the counter for one page and return the new count.
///
/// Counters are best-effort: lost increments under concurrent writes are
/// acceptable, so this is a plain read-modify-write without locking.
///
/// # Errors
/// Returns the backend error; callers log it and answer without a count.
pub async fn increment_view(store: &dyn DocumentStore, page: &str) -> Result<u64> {
    let current = store
        .get_document(VIEWS_DOCUMENT_PATH)
        .await?
        .as_ref()
        .and_then(|doc| doc.get(page))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let next = current.saturating_add(1);
    store
        .set_document(VIEWS_DOCUMENT_PATH, &json!({ page: next }), WriteMode::Merge)
        .await?;
    Ok(next)
}
