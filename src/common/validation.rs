// Common validation types and traits

use serde::Serialize;

/// Where a validated value was read from
pub const LOCATION_BODY: &str = "body";

/// A single entry of the `errors` array returned to clients
///
/// Field-level failures carry `param`, `location` and usually the offending
/// `value`; request-level failures only carry `msg`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
}

impl ValidationError {
    pub fn message(msg: &str) -> Self {
        Self {
            value: None,
            msg: msg.to_string(),
            param: None,
            location: None,
        }
    }
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Records a failed body field; `value` is `None` for secrets
    pub fn add_error(&mut self, field: &str, value: Option<&str>, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            value: value.map(str::to_string),
            msg: message.to_string(),
            param: Some(field.to_string()),
            location: Some(LOCATION_BODY),
        });
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
