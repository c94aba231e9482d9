//! # Error Types
//!
//! Structured error types for laje_core. Validation failures carry the field,
//! the offending value, and a reason, so calling workflows can surface them
//! directly as user-correctable form errors.
//!
//! ## Example
//!
//! ```rust
//! use laje_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_span(span_m: f64) -> EstimateResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(EstimateError::invalid_dimension(
//!             "span_length_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for laje_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation and budget operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by form layers and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// A geometric input is non-positive or otherwise out of range
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// The spacing divisor ("IE") is not one of the sanctioned catalog values
    #[error("Invalid spacing divisor: {value} (sanctioned values are 0.4 and 0.5)")]
    InvalidSpacingDivisor { value: f64 },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Product not found in the catalog
    #[error("Product not found: {product_name}")]
    ProductNotFound { product_name: String },

    /// A derived computation could not be carried out
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EstimateError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        EstimateError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ProductNotFound error
    pub fn product_not_found(product_name: impl Into<String>) -> Self {
        EstimateError::ProductNotFound {
            product_name: product_name.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        EstimateError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EstimateError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidDimension { .. } => "INVALID_DIMENSION",
            EstimateError::InvalidSpacingDivisor { .. } => "INVALID_SPACING_DIVISOR",
            EstimateError::MissingField { .. } => "MISSING_FIELD",
            EstimateError::ProductNotFound { .. } => "PRODUCT_NOT_FOUND",
            EstimateError::CalculationFailed { .. } => "CALCULATION_FAILED",
            EstimateError::FileError { .. } => "FILE_ERROR",
            EstimateError::FileLocked { .. } => "FILE_LOCKED",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EstimateError::VersionMismatch { .. } => "VERSION_MISMATCH",
            EstimateError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            EstimateError::invalid_dimension("span_length_m", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EstimateError::missing_field("test").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            EstimateError::product_not_found("vigota").error_code(),
            "PRODUCT_NOT_FOUND"
        );
        assert_eq!(
            EstimateError::InvalidSpacingDivisor { value: 0.3 }.error_code(),
            "INVALID_SPACING_DIVISOR"
        );
    }

    #[test]
    fn test_spacing_divisor_message() {
        let error = EstimateError::InvalidSpacingDivisor { value: 0.3 };
        let msg = error.to_string();
        assert!(msg.contains("0.3"));
        assert!(msg.contains("0.4"));
        assert!(msg.contains("0.5"));
    }
}
