//! Secret-path gate for the admin panel.
//!
//! Flow Overview:
//! 1) Every panel request carries the path secret as its first segment; a
//!    mismatch is answered exactly like a route that does not exist.
//! 2) The gate then routes on cookie PRESENCE only: login and dashboard
//!    redirect to each other so a visitor always lands on the page that
//!    matches their state.
//! 3) The dashboard itself verifies the cookie with the identity platform;
//!    a stale cookie is cleared before redirecting so the visitor cannot
//!    bounce between the two pages.

use axum::{
    Json, Router,
    extract::{Extension, Path, Request, State},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use std::sync::Arc;

use super::{
    session::{authenticate_admin, clear_session_cookie, extract_session_token},
    state::AdminState,
    types::{VerifyPathRequest, VerifyPathResponse},
};

#[utoipa::path(
    post,
    path = "/v1/admin/verify-path",
    request_body = VerifyPathRequest,
    responses(
        (status = 200, description = "Verdict on the candidate path", body = VerifyPathResponse)
    ),
    tag = "admin"
)]
pub async fn verify_path(
    admin_state: Extension<Arc<AdminState>>,
    Json(request): Json<VerifyPathRequest>,
) -> impl IntoResponse {
    let valid = admin_state.config().path_secret_matches(&request.candidate);
    Json(VerifyPathResponse { valid })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RouteClass {
    Login,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateAction {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Cookie presence and page class decide the outcome; the cookie is not
/// verified here.
const fn gate_action(has_session: bool, class: RouteClass) -> GateAction {
    match (has_session, class) {
        (false, RouteClass::Login) | (true, RouteClass::Dashboard) => GateAction::Allow,
        (false, RouteClass::Dashboard) => GateAction::RedirectToLogin,
        (true, RouteClass::Login) => GateAction::RedirectToDashboard,
    }
}

fn split_panel_path(path: &str) -> Option<(&str, &str)> {
    let mut segments = path.trim_start_matches('/').splitn(2, '/');
    let secret = segments.next()?;
    let page = segments.next()?;
    if secret.is_empty() || page.is_empty() {
        return None;
    }
    Some((secret, page))
}

async fn panel_gate(
    State(admin_state): State<Arc<AdminState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    let Some((secret, page)) = split_panel_path(path) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    // A wrong secret is indistinguishable from a missing route.
    if !admin_state.config().path_secret_matches(secret) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let class = match page {
        "login" => RouteClass::Login,
        "dashboard" => RouteClass::Dashboard,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let has_session = extract_session_token(request.headers()).is_some();
    match gate_action(has_session, class) {
        GateAction::Allow => next.run(request).await,
        GateAction::RedirectToLogin => {
            Redirect::temporary(&format!("/{secret}/login")).into_response()
        }
        GateAction::RedirectToDashboard => {
            Redirect::temporary(&format!("/{secret}/dashboard")).into_response()
        }
    }
}

async fn login_page(Path(secret): Path<String>) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="robots" content="noindex">
    <title>Sign in</title>
    <style>
        body {{
            font-family: -apple-system, sans-serif;
            text-align: center;
            padding: 40px;
            background: #f5f5f5;
        }}

        .card {{
            max-width: 400px;
            margin: 100px auto;
            background: white;
            padding: 40px;
            border-radius: 12px;
        }}

        h1 {{ font-size: 28px; margin: 0; }}
        p {{ color: #666; margin-top: 20px; }}
    </style>
</head>
<body>
    <div class="card" id="admin-login" data-secret="{secret}">
        <h1>Sign in</h1>
        <p>Use your portfolio admin account to continue.</p>
    </div>
</body>
</html>
"#,
        secret = secret,
    );

    Html(html)
}

async fn dashboard(
    headers: HeaderMap,
    Path(secret): Path<String>,
    admin_state: Extension<Arc<AdminState>>,
) -> Response {
    let Some(user) = authenticate_admin(&headers, &admin_state).await else {
        // Clear the stale cookie so the login page does not bounce back here.
        let mut response_headers = HeaderMap::new();
        if let Ok(cookie) = clear_session_cookie(admin_state.config()) {
            response_headers.insert(SET_COOKIE, cookie);
        }
        return (
            response_headers,
            Redirect::temporary(&format!("/{secret}/login")),
        )
            .into_response();
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="robots" content="noindex">
    <title>Dashboard</title>
    <style>
        body {{
            font-family: -apple-system, sans-serif;
            text-align: center;
            padding: 40px;
            background: #f5f5f5;
        }}

        .card {{
            max-width: 640px;
            margin: 100px auto;
            background: white;
            padding: 40px;
            border-radius: 12px;
        }}

        h1 {{ font-size: 28px; margin: 0; }}
        p {{ color: #666; margin-top: 20px; }}
    </style>
</head>
<body>
    <div class="card" id="admin-dashboard" data-email="{email}">
        <h1>Portfolio dashboard</h1>
        <p>Signed in as {email}</p>
    </div>
</body>
</html>
"#,
        email = user.email,
    );

    Html(html).into_response()
}

/// Panel routes, gated by the path secret.
pub fn panel_router(admin_state: Arc<AdminState>) -> Router {
    Router::new()
        .route("/:secret/login", get(login_page))
        .route("/:secret/dashboard", get(dashboard))
        .layer(middleware::from_fn_with_state(
            admin_state.clone(),
            panel_gate,
        ))
        .layer(Extension(admin_state))
}

#[cfg(test)]
mod tests {
    use super::{GateAction, RouteClass, gate_action, split_panel_path};

    #[test]
    fn gate_routes_on_cookie_presence_only() {
        assert_eq!(
            gate_action(false, RouteClass::Login),
            GateAction::Allow
        );
        assert_eq!(
            gate_action(false, RouteClass::Dashboard),
            GateAction::RedirectToLogin
        );
        assert_eq!(
            gate_action(true, RouteClass::Login),
            GateAction::RedirectToDashboard
        );
        assert_eq!(
            gate_action(true, RouteClass::Dashboard),
            GateAction::Allow
        );
    }

    #[test]
    fn panel_paths_split_into_secret_and_page() {
        assert_eq!(
            split_panel_path("/orchid-vault-9/login"),
            Some(("orchid-vault-9", "login"))
        );
        assert_eq!(
            split_panel_path("/orchid-vault-9/dashboard"),
            Some(("orchid-vault-9", "dashboard"))
        );
        assert_eq!(
            split_panel_path("/orchid-vault-9/login/extra"),
            Some(("orchid-vault-9", "login/extra"))
        );
    }

    #[test]
    fn malformed_panel_paths_are_rejected() {
        assert_eq!(split_panel_path("/"), None);
        assert_eq!(split_panel_path("/only-secret"), None);
        assert_eq!(split_panel_path("//login"), None);
    }
}
