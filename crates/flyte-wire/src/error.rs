//! Codec error types.

use thiserror::Error;

/// Result type for wire decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur when decoding wire values into domain values.
///
/// Encoding is total and has no error type; decoding fails only where
/// the wire admits values the domain cannot represent.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Wire timestamp lies outside the representable instant range.
    #[error("invalid datetime on the wire: {0}")]
    Timestamp(#[from] jiff::Error),

    /// Wire duration carries an out-of-range nanosecond field.
    #[error("duration nanoseconds out of range: {nanos}")]
    DurationNanos {
        /// The offending nanosecond value.
        nanos: i32,
    },
}
