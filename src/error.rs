//! Error types for cglm-mat3 conversions.
//!
//! Kernel operations are total and never fail. The only fallible surface is
//! building a [`Vec3`](crate::Vec3) or [`Mat3`](crate::Mat3) from a
//! caller-provided slice of the wrong length.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when converting into matrix/vector values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Slice length does not match the number of scalars the target holds.
    #[error("Data length mismatch: expected {expected} scalars, got {actual}")]
    DataLengthMismatch {
        /// Number of scalars the target type holds.
        expected: usize,
        /// Length of the slice that was provided.
        actual: usize,
    },
}
