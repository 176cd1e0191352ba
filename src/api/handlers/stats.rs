//! Third-party game statistics proxy.

use anyhow::{Context, Result};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

/// Upstream client and configuration for the games endpoint.
pub struct StatsState {
    url: Option<String>,
    token: Option<SecretString>,
    client: Client,
}

impl StatsState {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: Option<String>, token: Option<SecretString>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()
            .context("failed to build stats client")?;
        Ok(Self { url, token, client })
    }
}

#[derive(ToSchema, Serialize, Debug, PartialEq, Eq)]
pub struct GamesSummary {
    pub games_played: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
    pub rating: Option<u64>,
}

/// Shape the upstream profile JSON into the summary the site renders.
///
/// Missing fields shape to zero so a partial upstream change never breaks
/// the endpoint.
fn shape_summary(upstream: &Value) -> GamesSummary {
    let count = |key: &str| {
        upstream
            .get("count")
            .and_then(|counts| counts.get(key))
            .and_then(Value::as_u64)
            .unwrap_or(0)
    };
    let rating = upstream
        .get("perfs")
        .and_then(Value::as_object)
        .and_then(|perfs| {
            perfs
                .values()
                .filter_map(|perf| perf.get("rating").and_then(Value::as_u64))
                .max()
        });
    GamesSummary {
        games_played: count("all"),
        wins: count("win"),
        losses: count("loss"),
        draws: count("draw"),
        rating,
    }
}

#[utoipa::path(
    get,
    path = "/v1/stats/games",
    responses(
        (status = 200, description = "Game statistics summary.", body = GamesSummary),
        (status = 502, description = "Upstream statistics API failed."),
        (status = 503, description = "No statistics API configured."),
    ),
    tag = "content"
)]
/// Proxies the third-party game statistics API, shaping its profile response.
/// No caching and no retries; upstream failures map to `502`.
pub async fn games(stats: Extension<Arc<StatsState>>) -> impl IntoResponse {
    let Some(url) = stats.url.as_deref() else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };

    let mut request = stats.client.get(url);
    if let Some(token) = &stats.token {
        request = request.bearer_auth(token.expose_secret());
    }

    let upstream = match request.send().await {
        Ok(response) if response.status().is_success() => response.json::<Value>().await,
        Ok(response) => {
            error!("Stats API returned {}", response.status());
            return StatusCode::BAD_GATEWAY.into_response();
        }
        Err(err) => {
            error!("Failed to reach stats API: {err}");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    match upstream {
        Ok(profile) => (StatusCode::OK, Json(shape_summary(&profile))).into_response(),
        Err(err) => {
            error!("Invalid stats API response: {err}");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_shapes_counts_and_best_rating() {
        let upstream = json!({
            "count": {"all": 420, "win": 200, "loss": 180, "draw": 40},
            "perfs": {
                "blitz": {"rating": 1510, "games": 300},
                "rapid": {"rating": 1625, "games": 120}
            }
        });

        assert_eq!(
            shape_summary(&upstream),
            GamesSummary {
                games_played: 420,
                wins: 200,
                losses: 180,
                draws: 40,
                rating: Some(1625),
            }
        );
    }

    #[test]
    fn missing_upstream_fields_shape_to_zero() {
        let upstream = json!({"count": {"all": 7}});

        assert_eq!(
            shape_summary(&upstream),
            GamesSummary {
                games_played: 7,
                wins: 0,
                losses: 0,
                draws: 0,
                rating: None,
            }
        );
    }

    #[test]
    fn non_object_upstream_shapes_to_an_empty_summary() {
        let summary = shape_summary(&json!("profile temporarily closed"));

        assert_eq!(summary.games_played, 0);
        assert_eq!(summary.rating, None);
    }
}
