use axum::{http::StatusCode, response::Html};

use crate::templates::not_found_page;

/// Fallback for every unmatched route.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(not_found_page().into_string()))
}
