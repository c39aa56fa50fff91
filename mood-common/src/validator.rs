//! Request payload validation
//!
//! The payload is the decoded request body as a JSON value. Anything that
//! does not carry a non-empty string under `"text"` is rejected; the text
//! itself is passed through untouched (no trimming, no normalization).

use serde_json::Value;

use crate::error::ValidationError;

/// Extract the text to analyze from a decoded request body
///
/// `Value::Null` stands in for an absent or undecodable body.
pub fn validate(payload: &Value) -> Result<String, ValidationError> {
    match payload.get("text") {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        _ => Err(ValidationError::MissingText),
    }
}
