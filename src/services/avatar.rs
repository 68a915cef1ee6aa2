// src/services/avatar.rs
//! Gravatar URL derivation

use md5::{Digest, Md5};

const GRAVATAR_BASE: &str = "//www.gravatar.com/avatar";

/// Image size in pixels
const AVATAR_SIZE: u32 = 200;
/// Highest content rating allowed
const AVATAR_RATING: &str = "pg";
/// Fallback image when the address has no Gravatar ("mystery man")
const AVATAR_DEFAULT: &str = "mm";

/// Derives the avatar URL for an email address
///
/// Pure function of its input: Gravatar hashes the trimmed, lower-cased
/// address, so case and surrounding whitespace do not change the result.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    format!(
        "{}/{:x}?s={}&r={}&d={}",
        GRAVATAR_BASE, digest, AVATAR_SIZE, AVATAR_RATING, AVATAR_DEFAULT
    )
}
