//! Bookstall Serve - HTTP API for the in-memory bookstore
//!
//! This crate provides a REST API over the `bookstall-core` state store:
//! public catalog reads, user registration and login, and authenticated
//! per-user review management.
//!
//! # Authentication
//!
//! Review mutations require a Bearer session token obtained from
//! `POST /login`. Tokens are HS256 JWTs signed with a secret from the
//! environment and valid for a fixed window (one hour by default).
//!
//! # Architecture
//!
//! - **AppState**: Shared application state (the store, configuration)
//! - **Session**: Token mint/verify plus the auth middleware
//! - **Routes**: Endpoint handlers grouped by domain

mod error;
mod routes;
mod session;
mod state;

pub use self::error::ApiError;
pub use self::routes::router;
pub use self::session::{issue_token, require_auth, verify_token, AuthUser};
pub use self::state::{AppState, Config};
