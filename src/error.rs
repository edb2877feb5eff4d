//! Error taxonomy for dispatch operations.
//!
//! Every fallible operation in this crate returns one of four error shapes.
//! All of them are recoverable at the call site — the presentation layer
//! surfaces them as a notification and carries on. No operation partially
//! applies its effect: on error the caller's state is untouched.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// An error from a dispatch operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A required field is missing or empty (site, driver, items, name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A load's total quantity would exceed the per-load capacity ceiling.
    #[error("capacity exceeded: {total_gal} gal against a {ceiling_gal} gal ceiling")]
    Capacity { total_gal: u64, ceiling_gal: u64 },

    /// A numeric input is out of domain: zero or negative where a positive
    /// value is required, or a non-finite coordinate or speed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced entity does not exist in the store.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DispatchError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = DispatchError::validation("site is required");
        assert_eq!(e.to_string(), "validation failed: site is required");

        let e = DispatchError::Capacity {
            total_gal: 8_801,
            ceiling_gal: 8_800,
        };
        assert_eq!(
            e.to_string(),
            "capacity exceeded: 8801 gal against a 8800 gal ceiling"
        );

        let e = DispatchError::invalid_input("speed must be positive");
        assert_eq!(e.to_string(), "invalid input: speed must be positive");

        let e = DispatchError::not_found("driver 'D9'");
        assert_eq!(e.to_string(), "not found: driver 'D9'");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            DispatchError::validation("x"),
            DispatchError::Validation("x".into())
        );
        assert_ne!(
            DispatchError::validation("x"),
            DispatchError::invalid_input("x")
        );
    }
}
