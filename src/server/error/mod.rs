//! Error types for the Heimdall server application.
//!
//! Domain-specific error types (authorization, configuration) implement
//! `IntoResponse` for Axum HTTP responses; everything else is logged and
//! collapsed into a generic 500 so a data-layer failure during set expansion
//! fails the request closed instead of degrading into an empty grant.

pub mod access;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{access::AccessError, config::ConfigError},
};

/// Main error type for the Heimdall server application.
///
/// Aggregates domain-specific error types and external library errors into a
/// single unified error type, with `#[from]` conversions for the `?` operator
/// and an `IntoResponse` implementation mapping each category to an HTTP
/// response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authorization error (missing user context, malformed request, denial).
    #[error(transparent)]
    AccessError(#[from] AccessError),
    /// Internal error indicating a bug in Heimdall's code.
    #[error("Internal error with Heimdall's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Access cache error (Valkey/Redis connection or command execution).
    #[error(transparent)]
    CacheError(#[from] fred::prelude::Error),
    /// Serialization error for cached affiliation sets.
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AccessError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
