//! Public catalog read endpoints.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use bookstall_core::BookView;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /books`
///
/// Returns the full catalog keyed by ISBN.
pub async fn all_books(State(state): State<AppState>) -> Json<BTreeMap<String, BookView>> {
    Json(state.store.catalog.all())
}

/// `GET /books/isbn/{isbn}`
///
/// Returns a single-entry map for the requested book, 404 if unknown.
pub async fn by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<BTreeMap<String, BookView>>, ApiError> {
    let book = state.store.catalog.by_isbn(&isbn)?;
    Ok(Json(BTreeMap::from([(isbn, book)])))
}

/// `GET /books/author/{author}`
///
/// Case-insensitive exact match on author; 404 if nothing matches.
pub async fn by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<Json<BTreeMap<String, BookView>>, ApiError> {
    Ok(Json(state.store.catalog.by_author(&author)?))
}

/// `GET /books/title/{title}`
///
/// Case-insensitive exact match on title; 404 if nothing matches.
pub async fn by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<BTreeMap<String, BookView>>, ApiError> {
    Ok(Json(state.store.catalog.by_title(&title)?))
}

/// `GET /books/{isbn}/reviews`
///
/// Returns the book's review map, which may be empty; 404 if the book
/// itself is unknown.
pub async fn book_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    Ok(Json(state.store.catalog.reviews(&isbn)?))
}
