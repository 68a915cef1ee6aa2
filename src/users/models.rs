//! User registration data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::null_as_empty;

/// POST /api/users request body
///
/// Missing and `null` fields decode as empty strings and are reported by the validator.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct RegisterUserRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

/// Successful registration response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// A user record that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub avatar: String,
    /// Plaintext until the handler replaces it with the bcrypt hash
    pub password: String,
}

/// User database model
#[derive(FromRow, Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password: String,
    pub date: String,
}
