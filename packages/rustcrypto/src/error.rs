//! Per-request failure causes
//!
//! None of these ever reach the fuzzing driver. Handlers log the cause and
//! report "no result"; the driver only needs to know that nothing came out.

use cryptodiff_common::{AlgorithmId, LoggingTransformer};
use thiserror::Error;

/// Why a single operation produced no result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// Identifier not served by this module
    #[error("unsupported algorithm {0}")]
    UnsupportedAlgorithm(AlgorithmId),

    /// A buffer the operation needs was absent
    #[error("required input missing: {0}")]
    MissingInput(&'static str),

    /// Request rejected before reaching a primitive
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Handler switched off in [`ModuleConfig`](crate::ModuleConfig)
    #[error("handler disabled by configuration")]
    Disabled,

    /// Lifecycle phase called out of order
    #[error("phase {attempted} called while {state}")]
    InvalidState {
        /// Phase that was called
        attempted: &'static str,
        /// Phase the context was in
        state: &'static str,
    },

    /// Context of the wrong kind handed to a primitive
    #[error("context of type {found} handed to a {expected} primitive")]
    ContextMismatch {
        /// Context kind the primitive needs
        expected: &'static str,
        /// Context kind it received
        found: &'static str,
    },

    /// Output buffer and primitive disagree on length
    #[error("output size mismatch: expected {expected}, primitive produces {actual}")]
    OutputSize {
        /// Buffer length
        expected: usize,
        /// Native output length
        actual: usize,
    },

    /// Bytes fed differ from the cleartext length
    #[error("fed {fed} bytes but cleartext holds {expected}")]
    LengthMismatch {
        /// Bytes handed to the primitive
        fed: usize,
        /// Cleartext length
        expected: usize,
    },

    /// Key rejected by the primitive
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// KDF reported an error
    #[error("derivation failed: {0}")]
    Derivation(String),
}

impl PrimitiveError {
    /// Create a precondition error
    #[must_use]
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Create a derivation error from any displayable primitive error
    #[must_use]
    pub fn derivation(err: impl std::fmt::Display) -> Self {
        Self::Derivation(err.to_string())
    }
}

/// Result type for a single primitive step
pub type Result<T> = std::result::Result<T, PrimitiveError>;

/// Collapse a per-request result into "no result", logging the cause
pub(crate) fn settle<T>(operation: &str, algorithm: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            LoggingTransformer::log_no_result(operation, algorithm, &e);
            None
        }
    }
}
