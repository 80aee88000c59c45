//! # Error Types
//!
//! Structured error types for beam_core. Every failure the engine can report
//! is a local, recoverable validation or evaluation problem: the caller gets
//! enough context back to tell the user what to fix.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_span(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::ZeroOrNegativeLength { length });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(12.0).is_ok());
//! assert_eq!(
//!     validate_span(0.0).unwrap_err().error_code(),
//!     "ZERO_OR_NEGATIVE_LENGTH"
//! );
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam construction, load insertion and evaluation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// A point-load position or UDL bound lies outside `[0, length]`
    #[error("Load out of range: {field} = {value} is outside the span [0, {length}]")]
    OutOfRangeLoad {
        field: String,
        value: f64,
        length: f64,
    },

    /// A UDL whose start is not strictly before its end
    #[error("Invalid UDL: start ({start}) must be less than end ({end})")]
    InvalidUdl { start: f64, end: f64 },

    /// Beam constructed with a non-positive length
    #[error("Beam length must be positive, got {length}")]
    ZeroOrNegativeLength { length: f64 },

    /// Evaluation requested outside the span
    #[error("Position {x} is outside the span [0, {length}]")]
    PositionOutOfRange { x: f64, length: f64 },

    /// Evaluation requested before support reactions were solved
    #[error("Support reactions have not been computed")]
    UninitializedReactions,

    /// Fewer than two sample points requested
    #[error("Sample count must be at least 2, got {requested}")]
    InvalidSampleCount { requested: usize },

    /// NaN or infinite input value
    #[error("Non-finite value for '{field}'")]
    NonFiniteValue { field: String },
}

impl BeamError {
    /// Create an OutOfRangeLoad error
    pub fn out_of_range(field: impl Into<String>, value: f64, length: f64) -> Self {
        BeamError::OutOfRangeLoad {
            field: field.into(),
            value,
            length,
        }
    }

    /// Create a NonFiniteValue error
    pub fn non_finite(field: impl Into<String>) -> Self {
        BeamError::NonFiniteValue {
            field: field.into(),
        }
    }

    /// True for errors raised while building a beam or adding loads,
    /// false for errors raised while evaluating or sampling.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BeamError::OutOfRangeLoad { .. }
                | BeamError::InvalidUdl { .. }
                | BeamError::ZeroOrNegativeLength { .. }
                | BeamError::NonFiniteValue { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::OutOfRangeLoad { .. } => "OUT_OF_RANGE_LOAD",
            BeamError::InvalidUdl { .. } => "INVALID_UDL",
            BeamError::ZeroOrNegativeLength { .. } => "ZERO_OR_NEGATIVE_LENGTH",
            BeamError::PositionOutOfRange { .. } => "POSITION_OUT_OF_RANGE",
            BeamError::UninitializedReactions => "UNINITIALIZED_REACTIONS",
            BeamError::InvalidSampleCount { .. } => "INVALID_SAMPLE_COUNT",
            BeamError::NonFiniteValue { .. } => "NON_FINITE_VALUE",
        }
    }
}

/// Require `value` to be finite, naming `field` in the error otherwise.
pub(crate) fn ensure_finite(field: &str, value: f64) -> BeamResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BeamError::non_finite(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BeamError::InvalidUdl {
            start: 8.0,
            end: 3.0,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidUdl\""));

        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BeamError::out_of_range("position", 20.0, 10.0).error_code(),
            "OUT_OF_RANGE_LOAD"
        );
        assert_eq!(
            BeamError::InvalidSampleCount { requested: 1 }.error_code(),
            "INVALID_SAMPLE_COUNT"
        );
        assert_eq!(
            BeamError::UninitializedReactions.error_code(),
            "UNINITIALIZED_REACTIONS"
        );
    }

    #[test]
    fn test_validation_classification() {
        assert!(BeamError::ZeroOrNegativeLength { length: -1.0 }.is_validation());
        assert!(BeamError::non_finite("magnitude").is_validation());
        assert!(!BeamError::PositionOutOfRange { x: 11.0, length: 10.0 }.is_validation());
        assert!(!BeamError::InvalidSampleCount { requested: 0 }.is_validation());
    }

    #[test]
    fn test_error_messages() {
        let error = BeamError::out_of_range("end", 16.0, 15.0);
        assert_eq!(
            error.to_string(),
            "Load out of range: end = 16 is outside the span [0, 15]"
        );
        assert!(ensure_finite("intensity", f64::NAN).is_err());
        assert_eq!(ensure_finite("intensity", -2.0), Ok(-2.0));
    }
}
