//! The book catalog and its per-user review sub-maps.
//!
//! The set of catalog keys and each book's author/title are fixed at
//! construction; the only mutable state is the per-book review map, guarded
//! by a per-book lock so mutations on different books never contend.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use serde::Serialize;

use crate::error::{Result, StoreError};

/// A catalog entry. Author and title are immutable; reviews are keyed by the
/// username that wrote them, one review per user per book.
#[derive(Debug)]
pub struct Book {
    author: String,
    title: String,
    reviews: RwLock<BTreeMap<String, String>>,
}

impl Book {
    /// Create a book with no reviews.
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            reviews: RwLock::new(BTreeMap::new()),
        }
    }

    /// The book's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The book's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Snapshot this book's current state for serialization.
    fn view(&self) -> BookView {
        BookView {
            author: self.author.clone(),
            title: self.title.clone(),
            reviews: self.reviews.read().clone(),
        }
    }
}

/// Serializable snapshot of a book, as returned to callers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookView {
    pub author: String,
    pub title: String,
    pub reviews: BTreeMap<String, String>,
}

/// The read-mostly collection of book records, keyed by ISBN-like strings.
#[derive(Debug, Default)]
pub struct Catalog {
    books: HashMap<String, Book>,
}

impl Catalog {
    /// Build a catalog from `(isbn, author, title)` triples.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let books = entries
            .into_iter()
            .map(|(isbn, author, title)| (isbn.into(), Book::new(author, title)))
            .collect();
        Self { books }
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Full snapshot of the catalog, keyed by ISBN.
    pub fn all(&self) -> BTreeMap<String, BookView> {
        self.books
            .iter()
            .map(|(isbn, book)| (isbn.clone(), book.view()))
            .collect()
    }

    /// Look up a single book by its catalog key.
    pub fn by_isbn(&self, isbn: &str) -> Result<BookView> {
        self.books
            .get(isbn)
            .map(Book::view)
            .ok_or_else(|| StoreError::BookNotFound(isbn.to_string()))
    }

    /// All books whose author matches `query`, case-insensitively.
    ///
    /// An empty result is reported as `NoBooksFound` rather than an empty
    /// map, matching the lookup-miss behavior of `by_isbn`.
    pub fn by_author(&self, query: &str) -> Result<BTreeMap<String, BookView>> {
        self.filtered("author", query, Book::author)
    }

    /// All books whose title matches `query`, case-insensitively.
    pub fn by_title(&self, query: &str) -> Result<BTreeMap<String, BookView>> {
        self.filtered("title", query, Book::title)
    }

    fn filtered(
        &self,
        field: &'static str,
        query: &str,
        key: impl Fn(&Book) -> &str,
    ) -> Result<BTreeMap<String, BookView>> {
        let needle = query.to_lowercase();
        let matches: BTreeMap<String, BookView> = self
            .books
            .iter()
            .filter(|(_, book)| key(book).to_lowercase() == needle)
            .map(|(isbn, book)| (isbn.clone(), book.view()))
            .collect();

        if matches.is_empty() {
            return Err(StoreError::NoBooksFound {
                field,
                query: query.to_string(),
            });
        }
        Ok(matches)
    }

    /// The review map for a book; empty if nobody has reviewed it yet.
    pub fn reviews(&self, isbn: &str) -> Result<BTreeMap<String, String>> {
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.to_string()))?;
        Ok(book.reviews.read().clone())
    }

    /// Insert or overwrite `username`'s review on a book.
    ///
    /// Idempotent: a repeat submission with the same text leaves the map
    /// unchanged; a different text replaces the previous one (last writer
    /// wins). Returns the updated review map for the book.
    ///
    /// Check order: authentication, then payload presence, then book
    /// existence.
    pub fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        text: &str,
    ) -> Result<BTreeMap<String, String>> {
        if username.is_empty() {
            return Err(StoreError::Unauthenticated);
        }
        if text.is_empty() {
            return Err(StoreError::MissingField("review"));
        }
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.to_string()))?;

        let mut reviews = book.reviews.write();
        reviews.insert(username.to_string(), text.to_string());
        Ok(reviews.clone())
    }

    /// Remove `username`'s review from a book.
    ///
    /// The entry is removed outright, never tombstoned. Returns the updated
    /// review map for the book.
    pub fn delete_review(&self, isbn: &str, username: &str) -> Result<BTreeMap<String, String>> {
        if username.is_empty() {
            return Err(StoreError::Unauthenticated);
        }
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| StoreError::BookNotFound(isbn.to_string()))?;

        let mut reviews = book.reviews.write();
        if reviews.remove(username).is_none() {
            return Err(StoreError::ReviewNotFound {
                isbn: isbn.to_string(),
                username: username.to_string(),
            });
        }
        Ok(reviews.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new([
            ("isbn-1", "Asimov", "Foundation"),
            ("isbn-2", "Asimov", "I, Robot"),
            ("isbn-3", "Herbert", "Dune"),
        ])
    }

    #[test]
    fn test_all_returns_every_book() {
        let catalog = sample();
        let all = catalog.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all["isbn-3"].title, "Dune");
    }

    #[test]
    fn test_by_isbn_found_and_missing() {
        let catalog = sample();
        let book = catalog.by_isbn("isbn-1").unwrap();
        assert_eq!(book.author, "Asimov");
        assert!(book.reviews.is_empty());

        let err = catalog.by_isbn("isbn-404").unwrap_err();
        assert_eq!(err, StoreError::BookNotFound("isbn-404".to_string()));
    }

    #[test]
    fn test_by_author_case_insensitive_exact() {
        let catalog = sample();
        // Scenario: query "ASIMOV" matches stored author "Asimov".
        let hits = catalog.by_author("ASIMOV").unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.contains_key("isbn-1"));
        assert!(hits.contains_key("isbn-2"));

        // Exact match, not substring.
        let err = catalog.by_author("Asi").unwrap_err();
        assert!(matches!(err, StoreError::NoBooksFound { field: "author", .. }));
    }

    #[test]
    fn test_by_title_case_insensitive() {
        let catalog = sample();
        let hits = catalog.by_title("dune").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits["isbn-3"].author, "Herbert");

        let err = catalog.by_title("Dune II").unwrap_err();
        assert!(matches!(err, StoreError::NoBooksFound { field: "title", .. }));
    }

    #[test]
    fn test_reviews_empty_for_unreviewed_book() {
        let catalog = sample();
        assert!(catalog.reviews("isbn-1").unwrap().is_empty());
        assert!(catalog.reviews("nope").is_err());
    }

    #[test]
    fn test_upsert_then_read_round_trip() {
        let catalog = sample();
        let reviews = catalog.upsert_review("isbn-1", "carol", "great").unwrap();
        assert_eq!(reviews.get("carol").map(String::as_str), Some("great"));
        assert_eq!(
            catalog.reviews("isbn-1").unwrap().get("carol").map(String::as_str),
            Some("great")
        );

        let after_delete = catalog.delete_review("isbn-1", "carol").unwrap();
        assert!(!after_delete.contains_key("carol"));
        assert!(!catalog.reviews("isbn-1").unwrap().contains_key("carol"));
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let catalog = sample();
        let first = catalog.upsert_review("isbn-1", "carol", "nice").unwrap();
        let second = catalog.upsert_review("isbn-1", "carol", "nice").unwrap();
        assert_eq!(first, second);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_upsert_overwrites_same_user() {
        let catalog = sample();
        catalog.upsert_review("isbn-1", "carol", "good").unwrap();
        let reviews = catalog.upsert_review("isbn-1", "carol", "actually great").unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(
            reviews.get("carol").map(String::as_str),
            Some("actually great")
        );
    }

    #[test]
    fn test_upsert_unknown_book() {
        let catalog = sample();
        // Scenario: upsert on an ISBN absent from the catalog.
        let err = catalog.upsert_review("isbn-404", "carol", "nice").unwrap_err();
        assert_eq!(err, StoreError::BookNotFound("isbn-404".to_string()));
    }

    #[test]
    fn test_upsert_check_order() {
        let catalog = sample();
        // Unauthenticated wins over missing payload and unknown book.
        assert_eq!(
            catalog.upsert_review("isbn-404", "", "").unwrap_err(),
            StoreError::Unauthenticated
        );
        // Missing payload wins over unknown book.
        assert_eq!(
            catalog.upsert_review("isbn-404", "carol", "").unwrap_err(),
            StoreError::MissingField("review")
        );
    }

    #[test]
    fn test_delete_ownership_isolation() {
        let catalog = sample();
        // Scenario: carol reviews isbn-1, dave (who never reviewed it) tries
        // to delete; carol's review must survive.
        catalog.upsert_review("isbn-1", "carol", "nice").unwrap();
        let err = catalog.delete_review("isbn-1", "dave").unwrap_err();
        assert_eq!(
            err,
            StoreError::ReviewNotFound {
                isbn: "isbn-1".to_string(),
                username: "dave".to_string(),
            }
        );
        assert_eq!(
            catalog.reviews("isbn-1").unwrap().get("carol").map(String::as_str),
            Some("nice")
        );
    }

    #[test]
    fn test_mutations_do_not_cross_books_or_users() {
        let catalog = sample();
        catalog.upsert_review("isbn-1", "alice", "one").unwrap();
        catalog.upsert_review("isbn-1", "bob", "two").unwrap();
        catalog.upsert_review("isbn-2", "alice", "three").unwrap();

        catalog.delete_review("isbn-1", "alice").unwrap();

        let book1 = catalog.reviews("isbn-1").unwrap();
        assert_eq!(book1.get("bob").map(String::as_str), Some("two"));
        assert!(!book1.contains_key("alice"));

        let book2 = catalog.reviews("isbn-2").unwrap();
        assert_eq!(book2.get("alice").map(String::as_str), Some("three"));
    }

    #[test]
    fn test_delete_unauthenticated_before_book_lookup() {
        let catalog = sample();
        assert_eq!(
            catalog.delete_review("isbn-404", "").unwrap_err(),
            StoreError::Unauthenticated
        );
    }

    #[test]
    fn test_book_view_serializes_with_reviews() {
        let catalog = sample();
        catalog.upsert_review("isbn-3", "erin", "spicy").unwrap();
        let json = serde_json::to_value(catalog.by_isbn("isbn-3").unwrap()).unwrap();
        assert_eq!(json["author"], "Herbert");
        assert_eq!(json["reviews"]["erin"], "spicy");
    }
}
