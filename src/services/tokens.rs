// src/services/tokens.rs
//! Session token signing (HS256 JWT)

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime in seconds (100 hours)
pub const TOKEN_TTL_SECONDS: i64 = 360_000;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenUser {
    pub id: String,
}

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub user: TokenUser,
    pub iat: usize,
    pub exp: usize,
}

/// Signs a session token for `user_id`, valid for [`TOKEN_TTL_SECONDS`]
pub fn sign_token(user_id: &str, secret: &str) -> Result<String, TokenError> {
    let issued_at = Utc::now().timestamp();
    let claims = Claims {
        user: TokenUser {
            id: user_id.to_string(),
        },
        iat: issued_at as usize,
        exp: (issued_at + TOKEN_TTL_SECONDS) as usize,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Verifies signature and expiry, returning the embedded claims
#[allow(dead_code)]
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(decoded.claims)
}
