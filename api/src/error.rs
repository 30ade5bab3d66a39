//! Unified error types for the Pet Store API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Validation and persistence errors from the core
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - validation and persistence
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("one or more required fields (name, age, species) are missing; received: {supplied}")]
    MissingFields { supplied: String },

    #[error("one or more fields have the wrong type; received: {received}")]
    WrongFieldType { received: String },

    #[error("unknown species: {0}")]
    InvalidSpecies(String),

    #[error("invalid species for storage: {species}; storable species are: {allowed}")]
    SpeciesNotStorable { species: String, allowed: String },

    #[error("database error: {0}")]
    Database(String),

    #[error("no pets have been stored")]
    EmptyStore,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(
                e @ (DomainError::MissingFields { .. }
                | DomainError::WrongFieldType { .. }
                | DomainError::InvalidSpecies(_)
                | DomainError::SpeciesNotStorable { .. }),
            ) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(e @ DomainError::EmptyStore) => {
                tracing::error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(e.to_string()),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
