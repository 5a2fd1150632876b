//! Custom Axum extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// Numeric record id from the `:id` path segment. Anything that does not
/// parse as an id is treated as a missing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Missing record id".to_string()))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| AppError::NotFound(format!("No record with id {}", raw)))
    }
}
