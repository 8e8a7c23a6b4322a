//! Input-shape validation performed before a payload reaches the engine.

use serde_json::Value;

/// Validate a submitted payload.
///
/// Returns the list of validation errors; an empty list means the payload is
/// acceptable. JSON extraction has already guaranteed a finite, serializable
/// value, so the only rejected shape is a null top-level payload.
pub fn validate_payload(payload: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    if payload.is_null() {
        errors.push("Payload cannot be null".to_string());
    }
    errors
}
