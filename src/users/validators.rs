// src/users/validators.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::RegisterUserRequest;
use crate::common::{ValidationResult, Validator};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Please include a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Please enter a password of 6 or more characters";

pub const MIN_PASSWORD_LENGTH: usize = 6;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

// local@label.label...tld; local part and labels may carry non-ASCII
// characters, and the top-level domain is alphabetic or punycode (xn--)
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let local_char = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]";
    let label_edge = r"[A-Za-z0-9\x{A1}-\x{D7FF}\x{E000}-\x{FFFF}]";
    let label_inner = r"[A-Za-z0-9\-\x{A1}-\x{D7FF}\x{E000}-\x{FFFF}]";
    let tld = r"(?:[A-Za-z\x{A1}-\x{A8}\x{AA}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,63}|(?i:xn)--[A-Za-z0-9\-]{1,59})";
    let pattern = format!(
        r"^{local}+(?:\.{local}+)*@(?:{edge}(?:{inner}{{0,61}}{edge})?\.)+{tld}$",
        local = local_char,
        edge = label_edge,
        inner = label_inner,
        tld = tld,
    );
    Regex::new(&pattern).expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match email.split_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LENGTH => EMAIL_RE.is_match(email),
        _ => false,
    }
}

// ============================================================================
// Registration Validator
// ============================================================================

pub struct RegisterUserValidator;

impl Validator<RegisterUserRequest> for RegisterUserValidator {
    fn validate(&self, data: &RegisterUserRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.is_empty() {
            result.add_error("name", Some(data.name.as_str()), NAME_REQUIRED);
        }

        if !is_valid_email(&data.email) {
            result.add_error("email", Some(data.email.as_str()), EMAIL_INVALID);
        }

        // Never echo the password back
        if data.password.chars().count() < MIN_PASSWORD_LENGTH {
            result.add_error("password", None, PASSWORD_TOO_SHORT);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let result = RegisterUserValidator.validate(&request("Ann", "ann@x.com", "secret1"));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let result = RegisterUserValidator.validate(&request("   ", "ann@x.com", "secret1"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_missing_name() {
        let result = RegisterUserValidator.validate(&request("", "ann@x.com", "secret1"));
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].param.as_deref(), Some("name"));
        assert_eq!(result.errors[0].msg, NAME_REQUIRED);
    }

    #[test]
    fn test_malformed_emails() {
        for email in [
            "",
            "ann",
            "ann@",
            "@x.com",
            "ann@x",
            "ann@@x.com",
            "ann x@x.com",
            "ann@x..com",
            ".ann@x.com",
            "ann@-x.com",
            "ann@x.c0m",
            "ann@x.xn-",
        ] {
            let result = RegisterUserValidator.validate(&request("Ann", email, "secret1"));
            assert!(!result.is_valid, "{:?} should be rejected", email);
            assert_eq!(result.errors[0].msg, EMAIL_INVALID);
            assert_eq!(result.errors[0].value.as_deref(), Some(email));
        }
    }

    #[test]
    fn test_well_formed_emails() {
        for email in [
            "ann@x.com",
            "first.last+tag@mail.example.co.uk",
            "a_b-c@sub-domain.io",
            "jösé@x.com",
            "ann@bücher.de",
            "ann@example.xn--p1ai",
            "ann@пример.рф",
        ] {
            assert!(is_valid_email(email), "{:?} should be accepted", email);
        }
    }

    #[test]
    fn test_overlong_local_part_rejected() {
        let email = format!("{}@x.com", "a".repeat(65));
        assert!(!is_valid_email(&email));
    }

    #[test]
    fn test_short_password_is_not_echoed() {
        let result = RegisterUserValidator.validate(&request("Ann", "ann@x.com", "12345"));
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].param.as_deref(), Some("password"));
        assert_eq!(result.errors[0].msg, PASSWORD_TOO_SHORT);
        assert!(result.errors[0].value.is_none());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // six characters, more than six bytes
        let result = RegisterUserValidator.validate(&request("Ann", "ann@x.com", "pässwö"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_all_failures_reported_in_field_order() {
        let result = RegisterUserValidator.validate(&RegisterUserRequest::default());
        let params: Vec<_> = result
            .errors
            .iter()
            .map(|e| e.param.clone().unwrap_or_default())
            .collect();
        assert_eq!(params, vec!["name", "email", "password"]);
    }
}
