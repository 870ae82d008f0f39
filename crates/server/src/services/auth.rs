//! Client for the external login endpoint.
//!
//! The upstream contract is the one the mobile client used directly:
//! `POST` with JSON body `{email, password}`, JSON response
//! `{success: boolean, message?: string}`. Non-2xx or malformed responses
//! are treated as network failure. No retries, no custom timeout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Errors from the external login endpoint.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request could not be sent or the body could not be parsed.
    #[error("auth request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("auth endpoint returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// Endpoint answered `success: false`.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the external login service.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl AuthClient {
    /// Create a new client for `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            inner: Arc::new(AuthClientInner {
                client: reqwest::Client::new(),
                endpoint,
            }),
        }
    }

    /// Authenticate `email`/`password` against the upstream endpoint.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Rejected`] when the endpoint answers `success: false`
    /// - [`AuthError::UpstreamStatus`] on a non-2xx response
    /// - [`AuthError::Transport`] on connection or decode failure
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .inner
            .client
            .post(self.inner.endpoint.clone())
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::UpstreamStatus(status));
        }

        let body: LoginResponse = response.json().await?;
        if body.success {
            debug!("upstream login accepted");
            Ok(())
        } else {
            Err(AuthError::Rejected(
                body.message.unwrap_or_else(|| "Login failed".to_string()),
            ))
        }
    }
}
