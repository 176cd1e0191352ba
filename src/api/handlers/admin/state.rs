//! Admin state and configuration.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::identity::IdentityVerifier;

const DEFAULT_SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone)]
pub struct AdminConfig {
    path_secret: SecretString,
    allowed_emails: Vec<String>,
    session_ttl_seconds: i64,
    frontend_base_url: String,
}

impl AdminConfig {
    #[must_use]
    pub fn new(path_secret: SecretString, frontend_base_url: String) -> Self {
        Self {
            path_secret,
            allowed_emails: Vec::new(),
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            frontend_base_url,
        }
    }

    /// Replaces the allow-list with emails parsed from a comma-separated string.
    #[must_use]
    pub fn with_allowed_emails(mut self, emails: &str) -> Self {
        self.allowed_emails = emails
            .split(',')
            .map(|email| email.trim().to_ascii_lowercase())
            .filter(|email| !email.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    /// Exact string equality, no normalization of either side.
    #[must_use]
    pub fn path_secret_matches(&self, candidate: &str) -> bool {
        self.path_secret.expose_secret() == candidate
    }

    #[must_use]
    pub fn is_email_allowed(&self, email: &str) -> bool {
        let normalized = email.trim().to_ascii_lowercase();
        self.allowed_emails.iter().any(|allowed| *allowed == normalized)
    }

    pub(crate) fn frontend_base_url(&self) -> &str {
        &self.frontend_base_url
    }

    pub(super) fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    pub(super) fn session_cookie_secure(&self) -> bool {
        self.frontend_base_url.starts_with("https://")
    }
}

pub struct AdminState {
    config: AdminConfig,
    verifier: Arc<dyn IdentityVerifier>,
}

impl AdminState {
    pub fn new(config: AdminConfig, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self { config, verifier }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub(super) fn verifier(&self) -> &dyn IdentityVerifier {
        self.verifier.as_ref()
    }
}
