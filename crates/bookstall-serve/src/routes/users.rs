//! Registration and login endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::session::issue_token;
use crate::state::AppState;

/// Request body for register and login.
///
/// Fields default to empty so a missing field reads as a presence failure
/// (400) rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response body carrying only a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /register`
///
/// Creates a new user. 400 if a field is missing, 409 if the username is
/// already taken.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.users.register(&body.username, &body.password)?;

    tracing::info!(username = %body.username, "user registered");
    Ok(Json(MessageResponse {
        message: "User successfully registered".to_string(),
    }))
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// `POST /login`
///
/// Checks credentials and mints a session token. 400 if a field is
/// missing, 404 if the user does not exist, 401 on a wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    state.store.users.authenticate(&body.username, &body.password)?;

    let token = issue_token(
        &body.username,
        &state.config.jwt_secret,
        state.config.token_ttl_secs,
    )?;

    tracing::info!(username = %body.username, "user logged in");
    Ok(Json(LoginResponse {
        message: "User successfully logged in".to_string(),
        token,
    }))
}
