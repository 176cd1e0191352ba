//! Page view counter endpoint.

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

use crate::content::views::increment_view;
use crate::store::DocumentStore;

/// Page identifiers are short kebab-case slugs.
fn valid_page(page: &str) -> bool {
    Regex::new(r"^[a-z0-9][a-z0-9-]{0,63}$").is_ok_and(|re| re.is_match(page))
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ViewCountResponse {
    pub count: u64,
}

#[utoipa::path(
    post,
    path = "/v1/views/{page}",
    params(("page" = String, Path, description = "Page identifier")),
    responses(
        (status = 200, description = "View recorded.", body = ViewCountResponse),
        (status = 202, description = "View accepted but not recorded."),
        (status = 400, description = "Invalid page identifier."),
    ),
    tag = "content"
)]
/// Increments the view counter for a public page.
/// Counting is best-effort: a storage failure is logged and the request is
/// still accepted so the public site never surfaces an error.
pub async fn increment(
    Path(page): Path<String>,
    store: Extension<Arc<dyn DocumentStore>>,
) -> impl IntoResponse {
    if !valid_page(&page) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match increment_view(store.as_ref(), &page).await {
        Ok(count) => (StatusCode::OK, Json(ViewCountResponse { count })).into_response(),
        Err(err) => {
            warn!("Failed to record view for {page}: {err}");
            StatusCode::ACCEPTED.into_response()
        }
    }
}
