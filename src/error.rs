use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::templates::{invalid_submission_page, not_found_page, server_error_page};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let markup = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                server_error_page()
            }
            Self::Serialization(ref e) => {
                tracing::error!("Serialization error: {}", e);
                server_error_page()
            }
            Self::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                not_found_page()
            }
            Self::Validation(ref problems) => {
                tracing::warn!("Validation failed: {:?}", problems);
                invalid_submission_page(problems)
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                server_error_page()
            }
        };

        (status, Html(markup.into_string())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(error: AppError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn not_found_renders_404_page() {
        let (status, body) = body_of(AppError::NotFound("Venue 9 not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404"));
    }

    #[tokio::test]
    async fn validation_lists_problems() {
        let (status, body) = body_of(AppError::Validation(vec![
            "Name is required".to_string(),
        ]))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Name is required"));
    }

    #[tokio::test]
    async fn database_details_stay_out_of_the_page() {
        let error = AppError::Database(sea_orm::DbErr::Custom("pool exhausted".into()));
        let (status, body) = body_of(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("500"));
        assert!(!body.contains("pool exhausted"));
    }
}
