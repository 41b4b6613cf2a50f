//! Lenient numeric parsing for settings fields.
//!
//! Settings documents come from an external collaborator and may hold
//! numbers, numeric strings, or garbage. The policy is uniform: a field that
//! does not parse as a finite number is treated as absent, never as an
//! error.

use serde_json::Value as JsonValue;

/// Parse a settings field as a finite `f64`.
///
/// Accepts JSON numbers and numeric strings; everything else (including NaN
/// and infinities) is `None`.
#[must_use]
pub fn parse_finite(value: Option<&JsonValue>) -> Option<f64> {
    match value? {
        JsonValue::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Parse a settings field as a finite non-negative `f64`, or `fallback`.
#[must_use]
pub fn parse_finite_non_negative(value: Option<&JsonValue>, fallback: f64) -> f64 {
    parse_finite(value).filter(|v| *v >= 0.0).unwrap_or(fallback)
}
