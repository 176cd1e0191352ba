//! HTTPS client for the identity platform.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use super::{IdentityVerifier, VerifiedUser};

#[derive(Deserialize)]
struct EmailResponse {
    email: String,
}

#[derive(Deserialize)]
struct SessionCreatedResponse {
    session: String,
}

/// Talks to the identity platform REST API with a service API key.
pub struct HttpIdentityVerifier {
    base_url: String,
    api_key: SecretString,
    client: Client,
}

impl HttpIdentityVerifier {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: SecretString) -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()
            .context("failed to build identity platform client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// POST a JSON body and split the outcome into accepted/rejected/failed.
    ///
    /// Client-error statuses mean the platform examined and rejected the
    /// credential; anything else non-200 is a platform failure.
    async fn post_json(&self, endpoint: &str, body: serde_json::Value) -> Result<Option<reqwest::Response>> {
        let url = format!("{}{endpoint}", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("identity platform request to {endpoint} failed"))?;

        let status = response.status();
        if status.is_success() {
            Ok(Some(response))
        } else if status.is_client_error() {
            Ok(None)
        } else {
            Err(anyhow!("identity platform returned {status} for {endpoint}"))
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify_id_token(&self, id_token: &str) -> Result<Option<VerifiedUser>> {
        let Some(response) = self
            .post_json("/v1/tokens:verify", json!({ "token": id_token }))
            .await?
        else {
            return Ok(None);
        };
        let body: EmailResponse = response
            .json()
            .await
            .context("invalid token verification response")?;
        if body.email.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(VerifiedUser { email: body.email }))
    }

    async fn create_session_cookie(
        &self,
        id_token: &str,
        ttl_seconds: i64,
    ) -> Result<Option<String>> {
        let Some(response) = self
            .post_json(
                "/v1/sessions:create",
                json!({ "token": id_token, "ttl_seconds": ttl_seconds }),
            )
            .await?
        else {
            return Ok(None);
        };
        let body: SessionCreatedResponse = response
            .json()
            .await
            .context("invalid session creation response")?;
        if body.session.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(body.session))
    }

    async fn verify_session_cookie(&self, session: &str) -> Result<Option<VerifiedUser>> {
        let Some(response) = self
            .post_json("/v1/sessions:verify", json!({ "session": session }))
            .await?
        else {
            return Ok(None);
        };
        let body: EmailResponse = response
            .json()
            .await
            .context("invalid session verification response")?;
        if body.email.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(VerifiedUser { email: body.email }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn verifier(uri: &str) -> HttpIdentityVerifier {
        HttpIdentityVerifier::new(uri, SecretString::from("service-key")).expect("client")
    }

    #[tokio::test]
    async fn verify_id_token_returns_the_email() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/tokens:verify"))
            .and(header("x-api-key", "service-key"))
            .and(body_json(json!({"token": "id-token"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"email": "ada@example.com"})),
            )
            .mount(&server)
            .await;

        let user = verifier(&server.uri()).verify_id_token("id-token").await?;
        assert_eq!(
            user,
            Some(VerifiedUser {
                email: "ada@example.com".to_string()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn rejected_tokens_map_to_none() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/tokens:verify"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let user = verifier(&server.uri()).verify_id_token("bad").await?;
        assert_eq!(user, None);
        Ok(())
    }

    #[tokio::test]
    async fn platform_failures_are_errors() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sessions:verify"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = verifier(&server.uri()).verify_session_cookie("cookie").await;
        assert!(result.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn create_session_cookie_sends_the_ttl() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sessions:create"))
            .and(body_json(json!({"token": "id-token", "ttl_seconds": 604800})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"session": "opaque-session"})),
            )
            .mount(&server)
            .await;

        let session = verifier(&server.uri())
            .create_session_cookie("id-token", 604_800)
            .await?;
        assert_eq!(session, Some("opaque-session".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn blank_emails_are_treated_as_rejected() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/sessions:verify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "  "})))
            .mount(&server)
            .await;

        let user = verifier(&server.uri()).verify_session_cookie("cookie").await?;
        assert_eq!(user, None);
        Ok(())
    }
}
