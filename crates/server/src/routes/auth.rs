//! Authentication route handlers.
//!
//! Login is proxied to the external endpoint the mobile client used to
//! call directly. Empty fields are rejected locally without touching the
//! network; an upstream rejection surfaces as 401 with the upstream
//! message, and transport failure as 502 with a generic message.

use axum::{Json, extract::State};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::session_keys;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    /// Redacted in `Debug` output.
    pub password: SecretString,
}

/// Response body for successful auth actions.
#[derive(Debug, Serialize)]
pub struct AuthOk {
    pub success: bool,
}

/// Handle a login attempt.
#[instrument(skip(state, session, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthOk>> {
    let email = request.email.trim();
    let password = request.password.expose_secret();
    if email.is_empty() || password.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter both email and password.".to_string(),
        ));
    }

    state.auth().login(email, password).await?;
    session
        .insert(session_keys::AUTHENTICATED, true)
        .await?;

    tracing::info!("login succeeded");
    Ok(Json(AuthOk { success: true }))
}

/// Handle logout: drop the whole session, cart included.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<AuthOk>> {
    session.flush().await?;
    Ok(Json(AuthOk { success: true }))
}
