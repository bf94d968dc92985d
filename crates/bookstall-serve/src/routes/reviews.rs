//! Authenticated review mutation endpoints.
//!
//! Both handlers take the acting username from the [`AuthUser`] extension
//! installed by the auth middleware; the review text arrives as a query
//! parameter, matching the reference API shape.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::session::AuthUser;
use crate::state::AppState;

/// Query parameters for the review upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewQuery {
    /// The review text. Absent or empty is a 400.
    pub review: Option<String>,
}

/// Response body for review mutations: a message plus the book's updated
/// review map.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsResponse {
    pub message: String,
    pub reviews: BTreeMap<String, String>,
}

/// `PUT /auth/review/{isbn}?review=<text>`
///
/// Inserts or overwrites the caller's review on the book. One review per
/// user per book; a re-submission replaces the previous text.
pub async fn upsert_review(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Query(params): Query<ReviewQuery>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let text = params.review.unwrap_or_default();
    let reviews = state.store.catalog.upsert_review(&isbn, &user.0, &text)?;

    tracing::info!(isbn = %isbn, username = %user.0, "review upserted");
    Ok(Json(ReviewsResponse {
        message: "Review added/updated successfully".to_string(),
        reviews,
    }))
}

/// `DELETE /auth/review/{isbn}`
///
/// Removes the caller's own review from the book. 404 if the book is
/// unknown or the caller never reviewed it; other users' reviews are
/// untouched.
pub async fn delete_review(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let reviews = state.store.catalog.delete_review(&isbn, &user.0)?;

    tracing::info!(isbn = %isbn, username = %user.0, "review deleted");
    Ok(Json(ReviewsResponse {
        message: "Review deleted successfully".to_string(),
        reviews,
    }))
}
