//! Registration handler

use axum::extract::{rejection::JsonRejection, Extension, Json};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::models::{NewUser, RegisterUserRequest, TokenResponse};
use super::validators::RegisterUserValidator;
use crate::common::{safe_email_log, ApiError, AppState, Validator};
use crate::services::{avatar::avatar_url, password::hash_password, tokens::sign_token};

/// POST /api/users
/// Registers a new user and returns a session token
///
/// # Request Body
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@x.com",
///   "password": "secret1"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "token": "<jwt token>"
/// }
/// ```
///
/// Validation failures and duplicate emails answer 400 with an `errors` array;
/// anything unexpected answers 500 `Server error`.
pub async fn register_user(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected undecodable registration body");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let validation = RegisterUserValidator.validate(&payload);
    if !validation.is_valid {
        debug!(
            error_count = validation.errors.len(),
            "Registration request failed validation"
        );
        return Err(validation.into());
    }

    let RegisterUserRequest {
        name,
        email,
        password,
    } = payload;

    // Advisory check; the store's unique constraint settles concurrent requests
    if state.users.find_by_email(&email).await?.is_some() {
        info!(
            email = %safe_email_log(&email),
            "Registration rejected: user already exists"
        );
        return Err(ApiError::UserExists);
    }

    let avatar = avatar_url(&email);

    let mut user = NewUser {
        name,
        email,
        avatar,
        password,
    };
    user.password = hash_password(user.password).await?;

    let user = state.users.save(user).await?;

    let token = sign_token(&user.id, &state.config.jwt_secret)?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        "New user registered"
    );

    Ok(Json(TokenResponse { token }))
}
