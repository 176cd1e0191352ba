use crate::{
    api,
    api::handlers::{admin::AdminConfig, stats::StatsState},
    identity::{HttpIdentityVerifier, IdentityVerifier},
};
use anyhow::Result;
use secrecy::SecretString;
use std::sync::Arc;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub admin_path_secret: String,
    pub admin_emails: String,
    pub session_ttl_seconds: i64,
    pub frontend_base_url: String,
    pub identity_url: String,
    pub identity_api_key: String,
    pub stats_url: Option<String>,
    pub stats_token: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if an HTTP client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let admin_config = AdminConfig::new(
        SecretString::from(args.admin_path_secret),
        args.frontend_base_url,
    )
    .with_allowed_emails(&args.admin_emails)
    .with_session_ttl_seconds(args.session_ttl_seconds);

    let verifier: Arc<dyn IdentityVerifier> = Arc::new(HttpIdentityVerifier::new(
        &args.identity_url,
        SecretString::from(args.identity_api_key),
    )?);

    let stats = Arc::new(StatsState::new(
        args.stats_url,
        args.stats_token.map(SecretString::from),
    )?);

    api::new(args.port, args.dsn, admin_config, verifier, stats).await
}
