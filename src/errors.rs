// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Application error taxonomy. Validation failures become 400s, missing
/// resources 404s, catalog connectivity problems 502s, and everything
/// that goes wrong inside a store operation a generic 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Catalog request failed: {0}")]
    Catalog(#[from] reqwest::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "responding with error");
        match self {
            AppError::Validation(m) => HttpResponse::BadRequest().json(json!({ "error": m })),
            AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "error": m })),
            AppError::Config(m) => HttpResponse::InternalServerError()
                .json(json!({ "error": "Configuration issue", "detail": m })),
            // The sqlx error itself is logged above; clients only see a
            // generic body.
            AppError::Sqlx(_) => HttpResponse::InternalServerError()
                .json(json!({ "error": "Internal server error" })),
            AppError::Catalog(_) => HttpResponse::BadGateway()
                .json(json!({ "error": "Failed to load products from catalog" })),
        }
    }
}
