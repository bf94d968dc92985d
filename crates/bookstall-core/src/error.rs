//! Error types for the bookstall state store.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when operating on the store.
///
/// Every failure is a rejected operation reported to the caller; none are
/// transient and none are fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was absent or empty.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The requested book is not in the catalog.
    #[error("book '{0}' not found")]
    BookNotFound(String),

    /// The book exists but carries no review by that user.
    #[error("no review by '{username}' on book '{isbn}'")]
    ReviewNotFound {
        /// Catalog key of the book.
        isbn: String,
        /// User whose review was requested.
        username: String,
    },

    /// A catalog query matched no books.
    #[error("no books found for {field} '{query}'")]
    NoBooksFound {
        /// Which field was queried ("author" or "title").
        field: &'static str,
        /// The query string as supplied by the caller.
        query: String,
    },

    /// Login attempted for a username that was never registered.
    #[error("user '{0}' does not exist")]
    UserNotFound(String),

    /// Registration attempted with a username that is already taken.
    #[error("username '{0}' already exists")]
    UsernameTaken(String),

    /// The username exists but the password does not match.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// No authenticated identity is bound to the request.
    #[error("not authenticated")]
    Unauthenticated,
}
