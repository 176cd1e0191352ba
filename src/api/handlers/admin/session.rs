//! Session endpoints backed by the identity platform.

use axum::{
    Json,
    extract::Extension,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{AUTHORIZATION, InvalidHeaderValue, SET_COOKIE},
    },
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::error;

use super::{
    state::{AdminConfig, AdminState},
    types::{LoginRequest, SessionResponse},
};
use crate::identity::VerifiedUser;

const SESSION_COOKIE_NAME: &str = "vitrino_session";

#[utoipa::path(
    post,
    path = "/v1/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = SessionResponse),
        (status = 401, description = "Identity rejected")
    ),
    tag = "admin"
)]
pub async fn login(
    admin_state: Extension<Arc<AdminState>>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    let user = match admin_state
        .verifier()
        .verify_id_token(&request.id_token)
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => return StatusCode::UNAUTHORIZED.into_response(),
        Err(err) => {
            error!("Failed to verify identity token: {err}");
            return StatusCode::UNAUTHORIZED.into_response();
        }
    };

    if !admin_state.config().is_email_allowed(&user.email) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let ttl_seconds = admin_state.config().session_ttl_seconds();
    let session = match admin_state
        .verifier()
        .create_session_cookie(&request.id_token, ttl_seconds)
        .await
    {
        Ok(Some(session)) => session,
        Ok(None) => return StatusCode::UNAUTHORIZED.into_response(),
        Err(err) => {
            error!("Failed to create platform session: {err}");
            return StatusCode::UNAUTHORIZED.into_response();
        }
    };

    let mut response_headers = HeaderMap::new();
    match session_cookie(admin_state.config(), &session) {
        Ok(cookie) => {
            response_headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    (
        StatusCode::OK,
        response_headers,
        Json(SessionResponse { email: user.email }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/v1/admin/session",
    responses(
        (status = 200, description = "Session is active", body = SessionResponse),
        (status = 204, description = "No active session")
    ),
    tag = "admin"
)]
pub async fn session(
    headers: HeaderMap,
    admin_state: Extension<Arc<AdminState>>,
) -> impl IntoResponse {
    match authenticate_admin(&headers, &admin_state).await {
        Some(user) => (StatusCode::OK, Json(SessionResponse { email: user.email })).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/v1/admin/logout",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tag = "admin"
)]
pub async fn logout(admin_state: Extension<Arc<AdminState>>) -> impl IntoResponse {
    // Always clear the cookie; the platform session expires on its own.
    let mut response_headers = HeaderMap::new();
    if let Ok(cookie) = clear_session_cookie(admin_state.config()) {
        response_headers.insert(SET_COOKIE, cookie);
    }
    (StatusCode::NO_CONTENT, response_headers).into_response()
}

/// Resolve the session cookie into a verified admin, if any.
///
/// Rejected sessions, disallowed emails, and platform failures all collapse
/// to `None`; only platform failures are logged.
pub(crate) async fn authenticate_admin(
    headers: &HeaderMap,
    admin_state: &AdminState,
) -> Option<VerifiedUser> {
    let token = extract_session_token(headers)?;
    let user = match admin_state.verifier().verify_session_cookie(&token).await {
        Ok(Some(user)) => user,
        Ok(None) => return None,
        Err(err) => {
            error!("Failed to verify platform session: {err}");
            return None;
        }
    };
    if admin_state.config().is_email_allowed(&user.email) {
        Some(user)
    } else {
        None
    }
}

/// Build a secure `HttpOnly` cookie carrying the platform session.
pub(super) fn session_cookie(
    config: &AdminConfig,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl_seconds = config.session_ttl_seconds();
    // Only mark cookies secure when the frontend is served over HTTPS.
    let secure = config.session_cookie_secure();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub(super) fn clear_session_cookie(
    config: &AdminConfig,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = config.session_cookie_secure();
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub(super) fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_bearer_token(headers) {
        return Some(token);
    }
    let header = headers.get(axum::http::header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
