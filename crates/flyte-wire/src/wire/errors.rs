//! Wire error document messages.

use serde::{Deserialize, Serialize};

/// Whether a failure may be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The failure may succeed on retry.
    Recoverable,
    /// The failure is permanent.
    NonRecoverable,
}

/// The inner error record of an error document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable failure text.
    pub message: String,
    /// Recoverability of the failure.
    pub kind: ErrorKind,
}

/// The wire representation of an execution failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDocument {
    /// The wrapped error record.
    pub error: ContainerError,
}
