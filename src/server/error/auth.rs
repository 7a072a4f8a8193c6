use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned for every rejected token, whatever the cause.
pub const INVALID_TOKEN: &str = "Invalid Token";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature, expiry or format validation.
    #[error("Bearer token failed validation: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token subject is not a user id.
    #[error("Bearer token has a malformed subject '{0}'")]
    MalformedSubject(String),

    /// Token is valid but its user no longer exists.
    #[error("Bearer token belongs to deleted user {0}")]
    RevokedToken(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 401 Unauthorized with the same fixed message so clients cannot
/// tell why a token was rejected. The cause is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                message: INVALID_TOKEN.to_string(),
            }),
        )
            .into_response()
    }
}
