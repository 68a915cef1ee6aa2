// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! User records are keyed by prefixed, human-readable IDs.
//! Format: U_XXXXXX (e.g., U_K7NP3X)
//!
//! The alphabet excludes I, L, O, U so IDs survive being read aloud or retyped.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of random characters after the prefix
const ID_LENGTH: usize = 6;

const USER_PREFIX: &str = "U";

fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CROCKFORD_ALPHABET.len());
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a User ID (U_XXXXXX)
///
/// Collisions are possible (32^6 space); the store's primary key rejects them.
pub fn generate_user_id() -> String {
    format!("{}_{}", USER_PREFIX, generate_crockford_string(ID_LENGTH))
}
