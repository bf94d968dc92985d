//! Application state and configuration.

use std::sync::Arc;

use bookstall_core::Bookstall;

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Secret used to sign session tokens.
    pub jwt_secret: String,

    /// Session token validity window in seconds.
    pub token_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `BOOKSTALL_JWT_SECRET`: Secret for signing session tokens
    ///
    /// Optional environment variables:
    /// - `BOOKSTALL_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `BOOKSTALL_TOKEN_TTL_SECS`: Token validity in seconds (default: 3600)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BOOKSTALL_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let jwt_secret = std::env::var("BOOKSTALL_JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("BOOKSTALL_JWT_SECRET environment variable is required"))?;
        if jwt_secret.trim().is_empty() {
            anyhow::bail!("BOOKSTALL_JWT_SECRET must not be empty");
        }

        let token_ttl_secs = match std::env::var("BOOKSTALL_TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("BOOKSTALL_TOKEN_TTL_SECS must be a positive integer"))?,
            Err(_) => 3600,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            token_ttl_secs,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl_secs,
        })
    }
}

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory bookstore: catalog, users, reviews.
    pub store: Arc<Bookstall>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state around an explicitly constructed store.
    ///
    /// The store is injected rather than built here so tests can hand in
    /// isolated instances with whatever catalog they need.
    pub fn new(config: Config, store: Bookstall) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
