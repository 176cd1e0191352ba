//! Postgres-backed document store.
//!
//! Documents live in a single `documents` table keyed by path. Merge writes
//! lean on the `jsonb || jsonb` operator, which is exactly the top-level
//! merge the content model wants: supplied fields overwrite, nested values
//! are replaced wholesale.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Connection, PgPool, Row};
use tracing::Instrument;

use super::{DocumentStore, WriteMode};

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get_document(&self, path: &str) -> Result<Option<Value>> {
        let query = "SELECT doc FROM documents WHERE path = $1";
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(path)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .context("failed to fetch document")?;

        Ok(row.map(|row| row.get("doc")))
    }

    async fn set_document(&self, path: &str, data: &Value, mode: WriteMode) -> Result<()> {
        let query = match mode {
            WriteMode::Merge => {
                r"
                INSERT INTO documents (path, doc)
                VALUES ($1, $2)
                ON CONFLICT (path)
                DO UPDATE SET doc = documents.doc || EXCLUDED.doc, updated_at = now()
                "
            }
            WriteMode::Replace => {
                r"
                INSERT INTO documents (path, doc)
                VALUES ($1, $2)
                ON CONFLICT (path)
                DO UPDATE SET doc = EXCLUDED.doc, updated_at = now()
                "
            }
        };
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        sqlx::query(query)
            .bind(path)
            .bind(data)
            .execute(&self.pool)
            .instrument(span)
            .await
            .context("failed to upsert document")?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let span = tracing::info_span!("db.ping", db.system = "postgresql", db.operation = "PING");
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("failed to acquire database connection")?;
        conn.ping()
            .instrument(span)
            .await
            .context("failed to ping database")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/db/schema.sql"));

    // Normalize SQL to avoid brittle formatting checks in schema tests.
    fn canonicalize_sql(sql: &str) -> String {
        sql.chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| ch.to_ascii_lowercase())
            .collect()
    }

    #[test]
    fn schema_defines_documents_table() {
        let canonical = canonicalize_sql(SCHEMA_SQL);
        assert!(canonical.contains("createtableifnotexistsdocuments"));
        assert!(canonical.contains("pathtextprimarykey"));
        assert!(canonical.contains("docjsonbnotnull"));
        assert!(canonical.contains("updated_attimestamptznotnulldefaultnow()"));
    }
}
