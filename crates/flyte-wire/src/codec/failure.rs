//! Execution failure → wire error document conversion.

use std::error::Error;

use super::Codec;
use crate::wire;

/// Prefix for system-originated error codes.
pub const SYSTEM_ERROR_PREFIX: &str = "SYSTEM:";

/// Classification used when none can be recovered from the failure.
pub const UNKNOWN_CLASSIFICATION: &str = "Unknown";

/// Message substituted when the failure renders to nothing.
const DEFAULT_FAILURE_MESSAGE: &str = "unknown error";

impl Codec {
    /// Converts an execution failure into a wire error document.
    ///
    /// Total: always produces a well-formed document, whatever the
    /// failure looks like. An opaque `dyn Error` carries no
    /// classification, so the code is always `SYSTEM:Unknown`; the
    /// kind is conservatively `NON_RECOVERABLE` since nothing signals
    /// recoverability.
    pub fn serialize_failure(&self, failure: &dyn Error) -> wire::ErrorDocument {
        self.serialize_classified_failure(UNKNOWN_CLASSIFICATION, failure)
    }

    /// Converts an execution failure with a known short classification
    /// (e.g. the failure's type name) into a wire error document.
    pub fn serialize_classified_failure(
        &self,
        classification: &str,
        failure: &dyn Error,
    ) -> wire::ErrorDocument {
        let message = failure.to_string();
        let message = if message.is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        let classification = if classification.is_empty() {
            UNKNOWN_CLASSIFICATION
        } else {
            classification
        };

        wire::ErrorDocument {
            error: wire::ContainerError {
                code: format!("{SYSTEM_ERROR_PREFIX}{classification}"),
                message,
                kind: wire::ErrorKind::NonRecoverable,
            },
        }
    }
}
