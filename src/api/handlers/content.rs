//! Content section endpoints.
//!
//! Reads are public and never fail: a missing document is seeded with the
//! section defaults, and a backend error falls back to the same defaults.
//! Writes require an admin session and merge at the top level only.

use axum::{
    Json,
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::error;

use super::admin::{AdminState, session::authenticate_admin};
use crate::content::{Section, service};
use crate::store::DocumentStore;

#[utoipa::path(
    get,
    path = "/v1/content/{section}",
    params(("section" = String, Path, description = "Content section slug")),
    responses(
        (status = 200, description = "Section content with defaults applied.", body = serde_json::Value),
        (status = 404, description = "Unknown content section."),
    ),
    tag = "content"
)]
/// Returns a content section merged over its defaults.
/// Unknown slugs return `404`; storage problems degrade to the defaults so
/// the public site always renders.
pub async fn get_section(
    Path(section): Path<String>,
    store: Extension<Arc<dyn DocumentStore>>,
) -> impl IntoResponse {
    let Some(section) = Section::from_slug(&section) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let content = service::read_section(store.as_ref(), section).await;
    (StatusCode::OK, Json(content)).into_response()
}

#[utoipa::path(
    put,
    path = "/v1/content/{section}",
    request_body = serde_json::Value,
    params(("section" = String, Path, description = "Content section slug")),
    responses(
        (status = 200, description = "Updated section content.", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object.", body = String),
        (status = 401, description = "Missing or invalid session cookie."),
        (status = 404, description = "Unknown content section."),
    ),
    tag = "content"
)]
/// Saves a partial update to a content section and returns the merged result.
/// Top-level fields in the body replace the stored ones wholesale; untouched
/// fields keep their stored or default values.
pub async fn put_section(
    Path(section): Path<String>,
    headers: HeaderMap,
    store: Extension<Arc<dyn DocumentStore>>,
    admin_state: Extension<Arc<AdminState>>,
    Json(patch): Json<serde_json::Value>,
) -> impl IntoResponse {
    if authenticate_admin(&headers, &admin_state).await.is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let Some(section) = Section::from_slug(&section) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if !patch.is_object() {
        return (StatusCode::BAD_REQUEST, "Content body must be a JSON object.").into_response();
    }

    match service::save_section(store.as_ref(), section, patch).await {
        Ok(content) => (StatusCode::OK, Json(content)).into_response(),
        Err(err) => {
            error!("Failed to save content section: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
