// Helper functions for safe logging and deserialization

use serde::{Deserialize, Deserializer};

/// Masks email addresses for safe logging
/// Keeps the first character of the local part and the whole domain
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Replaces the value of every `password` key in a JSON document with `"***"`
pub fn redact_passwords(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if key.eq_ignore_ascii_case("password") {
                    *entry = serde_json::Value::String("***".to_string());
                } else {
                    redact_passwords(entry);
                }
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(redact_passwords),
        _ => {}
    }
}

/// Deserializes an optional string, treating `null` as empty
///
/// Pair with `#[serde(default)]` so absent and `null` fields both reach
/// validation as `""` instead of failing the decode.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
