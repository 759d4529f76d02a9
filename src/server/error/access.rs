use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("No authenticated user in request context")]
    Unauthenticated,
    #[error("Malformed affiliation request: {0}")]
    MalformedRequest(String),
    #[error("User ID {0:?} is not authorized for the requested entities")]
    Forbidden(i32),
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MalformedRequest(ref reason) => {
                tracing::debug!(reason = %reason, "{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: format!("Malformed request: {}", reason),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You are not authorized to access the requested entities"
                            .to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
