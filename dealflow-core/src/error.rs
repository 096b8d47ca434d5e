//! Engine error taxonomy.
//!
//! Two failure classes, both caller-input problems:
//! - `InvalidInput` — a numeric input violates its contract (non-positive ARV,
//!   negative rehab/rate/principal). Never coerced or defaulted.
//! - `UnknownCategory` — a lead-scoring categorical outside the known set,
//!   raised when parsing from strings.
//!
//! "No buyers matched" and "grade D / negative MAO" are ordinary outcomes,
//! not errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("{field} must be {constraint}, got {value}")]
    InvalidInput {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },

    #[error("unknown {field} category: '{value}'")]
    UnknownCategory { field: &'static str, value: String },
}

/// Validate that `value > 0`.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidInput {
            field,
            constraint: "> 0",
            value,
        })
    }
}

/// Validate that `value >= 0`.
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidInput {
            field,
            constraint: ">= 0",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(require_positive("arv", 0.0).is_err());
        assert!(require_positive("arv", -1.0).is_err());
        assert!(require_positive("arv", f64::NAN).is_err());
        assert_eq!(require_positive("arv", 267_000.0), Ok(267_000.0));
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(require_non_negative("rehab", 0.0), Ok(0.0));
        assert!(require_non_negative("rehab", -0.01).is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = require_positive("arv", -5.0).unwrap_err();
        assert_eq!(err.to_string(), "arv must be > 0, got -5");
    }
}
