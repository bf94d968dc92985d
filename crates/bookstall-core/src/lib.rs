//! In-memory bookstore state for the bookstall service.
//!
//! This crate holds everything with an invariant to preserve:
//! - the book [`Catalog`] and its per-user review maps (one review per user
//!   per book, overwrite on re-submission, delete removes outright),
//! - the [`UserRegistry`] with unique, case-sensitive usernames,
//! - the [`StoreError`] taxonomy shared by both.
//!
//! Everything here is synchronous and transport-agnostic. The HTTP layer
//! lives in `bookstall-serve` and resolves credentials to usernames before
//! calling in; the store itself only ever sees usernames.

mod catalog;
mod error;
mod seed;
mod users;

pub use catalog::{Book, BookView, Catalog};
pub use error::{Result, StoreError};
pub use seed::default_catalog;
pub use users::UserRegistry;

/// The whole bookstore state: one catalog, one user registry.
///
/// Owned by the service instance (no globals); tests build isolated
/// instances with whatever catalog they need.
#[derive(Debug, Default)]
pub struct Bookstall {
    /// The book catalog, including each book's review map.
    pub catalog: Catalog,
    /// Registered users.
    pub users: UserRegistry,
}

impl Bookstall {
    /// Create a store around the given catalog, with no registered users.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            users: UserRegistry::new(),
        }
    }

    /// Create a store seeded with the default catalog.
    pub fn with_seed() -> Self {
        Self::new(seed::default_catalog())
    }
}
