//! Session tokens and the authentication middleware.
//!
//! Login mints an HS256 JWT bound to the username with a fixed validity
//! window; authenticated routes run behind [`require_auth`], which resolves
//! the bearer token back to a username and injects it as a request
//! extension. The store never sees tokens, only usernames.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated username, injected into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Username the token was minted for.
    sub: String,
    /// Issued-at (Unix seconds).
    iat: i64,
    /// Expiry (Unix seconds).
    exp: i64,
}

/// Mint a session token for `username`, valid for `ttl_secs`.
pub fn issue_token(
    username: &str,
    secret: &str,
    ttl_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp: now + ttl_secs as i64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Resolve a token back to the username it was minted for.
///
/// Returns `None` if the signature does not verify or the token has
/// expired. Expiry is checked without leeway, so the validity window is
/// exactly what `issue_token` granted.
pub fn verify_token(token: &str, secret: &str) -> Option<String> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Some(data.claims.sub),
        Err(err) => {
            tracing::debug!(error = %err, "token rejected");
            None
        }
    }
}

/// Middleware that requires a valid session token for all requests.
///
/// The token must be provided in the `Authorization` header as:
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the resolved [`AuthUser`] is inserted into the request's
/// extensions for handlers to pick up.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            tracing::debug!("missing or malformed authorization header");
            return Err(ApiError::Unauthorized("not logged in".to_string()));
        }
    };

    let username = verify_token(token, &state.config.jwt_secret)
        .ok_or_else(|| ApiError::Unauthorized("invalid or expired token".to_string()))?;

    request.extensions_mut().insert(AuthUser(username));
    Ok(next.run(request).await)
}
