//! Error types for the vector3d crate
//!
//! Only buffer export can fail. Every numeric operation is infallible and
//! propagates IEEE-754 special values instead of reporting errors.

use thiserror::Error;

/// Main error type for vector3d functionality
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Vector3dError {
    /// An argument was absent or cannot hold the requested data
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the argument was rejected
        reason: String,
    },

    /// An index or offset falls outside the target buffer
    #[error("Offset {offset} is outside buffer of length {len}")]
    OutOfRange {
        /// The offset that was requested
        offset: isize,
        /// Length of the target buffer
        len: usize,
    },
}

/// Extension of the Result type for vector3d operations
pub type Result<T> = std::result::Result<T, Vector3dError>;

/// Helper to build a [`Vector3dError::InvalidArgument`]
pub fn invalid_arg(name: &'static str, reason: impl Into<String>) -> Vector3dError {
    Vector3dError::InvalidArgument {
        name,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = invalid_arg("target", "buffer is absent");
        assert_eq!(
            err.to_string(),
            "Invalid argument `target`: buffer is absent"
        );

        let err = Vector3dError::OutOfRange { offset: -1, len: 3 };
        assert_eq!(err.to_string(), "Offset -1 is outside buffer of length 3");
    }
}
