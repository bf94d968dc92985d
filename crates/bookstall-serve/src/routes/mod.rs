//! API route definitions.

mod books;
mod health;
mod reviews;
mod users;

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;

use crate::session::require_auth;
use crate::state::AppState;

/// Build the complete API router.
///
/// # Route Structure
///
/// ## Public (no auth)
/// - `GET /health` - Health check
/// - `POST /register` - Create a user
/// - `POST /login` - Check credentials, mint a session token
/// - `GET /books` - Full catalog
/// - `GET /books/isbn/{isbn}` - Single book by catalog key
/// - `GET /books/author/{author}` - Books by author (case-insensitive exact)
/// - `GET /books/title/{title}` - Books by title (case-insensitive exact)
/// - `GET /books/{isbn}/reviews` - A book's review map
///
/// ## Protected (session token required)
/// - `PUT /auth/review/{isbn}?review=<text>` - Add or replace own review
/// - `DELETE /auth/review/{isbn}` - Delete own review
pub fn router(state: AppState) -> Router {
    // Public routes (no authentication)
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/books", get(books::all_books))
        .route("/books/isbn/{isbn}", get(books::by_isbn))
        .route("/books/author/{author}", get(books::by_author))
        .route("/books/title/{title}", get(books::by_title))
        .route("/books/{isbn}/reviews", get(books::book_reviews));

    // Protected review mutations
    let authed = Router::new()
        .route(
            "/review/{isbn}",
            put(reviews::upsert_review).delete(reviews::delete_review),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .nest("/auth", authed)
        .with_state(state)
}
