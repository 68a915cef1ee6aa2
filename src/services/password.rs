// src/services/password.rs
//! Salted password hashing (bcrypt)

use thiserror::Error;

/// bcrypt work factor
pub const BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hashes a password with a freshly generated salt
///
/// bcrypt is deliberately slow, so the work runs on the blocking pool.
pub async fn hash_password(plaintext: String) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, BCRYPT_COST)).await??;
    Ok(hashed)
}

/// Checks a password against a stored hash
#[allow(dead_code)]
pub async fn verify_password(plaintext: String, hashed: String) -> Result<bool, PasswordError> {
    let matches =
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hashed)).await??;
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_is_not_plaintext() {
        let hashed = hash_password("secret1".to_string()).await.expect("hash");

        assert_ne!(hashed, "secret1");
        assert!(hashed.starts_with("$2b$10$"), "unexpected hash format: {}", hashed);
    }

    #[tokio::test]
    async fn test_same_password_gets_different_salts() {
        let first = hash_password("secret1".to_string()).await.expect("first hash");
        let second = hash_password("secret1".to_string()).await.expect("second hash");

        assert_ne!(first, second);
        assert!(verify_password("secret1".to_string(), first).await.expect("verify first"));
        assert!(verify_password("secret1".to_string(), second).await.expect("verify second"));
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_verify() {
        let hashed = hash_password("secret1".to_string()).await.expect("hash");
        assert!(!verify_password("secret2".to_string(), hashed).await.expect("verify"));
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let result = verify_password("secret1".to_string(), "not-a-hash".to_string()).await;
        assert!(matches!(result, Err(PasswordError::Bcrypt(_))));
    }
}
