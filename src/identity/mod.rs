//! Identity platform integration.
//!
//! Admin authentication is delegated wholesale to an external identity
//! platform: vitrino never stores credentials or session state. The platform
//! verifies ID tokens, mints opaque session cookie values, and verifies
//! them; vitrino only matches the verified email against its allow-list.

mod http;

pub use http::HttpIdentityVerifier;

use anyhow::Result;
use async_trait::async_trait;

/// Identity confirmed by the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedUser {
    pub email: String,
}

/// Verification calls delegated to the identity platform.
///
/// `Ok(None)` means the platform rejected the credential; `Err` means the
/// platform could not answer. Handlers collapse both to "unauthenticated",
/// logging only the latter.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a fresh ID token from the login flow.
    async fn verify_id_token(&self, id_token: &str) -> Result<Option<VerifiedUser>>;

    /// Exchange a verified ID token for an opaque session cookie value.
    async fn create_session_cookie(
        &self,
        id_token: &str,
        ttl_seconds: i64,
    ) -> Result<Option<String>>;

    /// Verify a session cookie value presented by the browser.
    async fn verify_session_cookie(&self, session: &str) -> Result<Option<VerifiedUser>>;
}
