// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{ValidationError, ValidationResult};
use crate::services::{password::PasswordError, tokens::TokenError};
use crate::users::store::StoreError;

pub const USER_EXISTS_MESSAGE: &str = "User already exists";
pub const SERVER_ERROR_BODY: &str = "Server error";

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// One or more body fields failed validation
    Validation(Vec<ValidationError>),
    /// An account with the submitted email is already registered
    UserExists,
    /// The request could not be decoded
    BadRequest(String),
    InternalServer(String),
    DatabaseError(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.msg.as_str()).collect();
                write!(f, "Validation Error: {}", messages.join(", "))
            }
            ApiError::UserExists => write!(f, "Conflict: {}", USER_EXISTS_MESSAGE),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
        }
    }
}

/// JSON body for every 4xx response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ValidationError>,
}

impl ErrorResponse {
    fn single(msg: &str) -> Self {
        Self {
            errors: vec![ValidationError::message(msg)],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { errors })).into_response()
            }
            ApiError::UserExists => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::single(USER_EXISTS_MESSAGE)),
            )
                .into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::single(&msg))).into_response()
            }
            // Details stay in the log; callers only ever see the fixed body.
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Unexpected error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
            }
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
            }
        }
    }
}

impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            ApiError::Validation(result.errors)
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // Lost the lookup-then-insert race to a concurrent registration
            StoreError::DuplicateEmail => ApiError::UserExists,
            StoreError::Database(e) => ApiError::DatabaseError(e),
            other => ApiError::InternalServer(other.to_string()),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::InternalServer(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::InternalServer(err.to_string())
    }
}
