//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
///
/// Only failures that make a module unusable are represented here. Per-request
/// failures never surface as an `Error`; they collapse into "no result".
#[derive(Debug, Clone)]
pub struct Error {
    /// The actual error
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// What went wrong
    pub kind: ErrorKind,
    /// Context chain, outermost first
    pub context: Option<String>,
    /// Underlying cause, shared between contextualized copies
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    /// Backtrace captured at error creation
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Algorithm registration failed; the dispatch table is unusable
    #[error("Algorithm registration error")]
    Registration,

    /// Module configuration could not be loaded or is inconsistent
    #[error("Configuration error")]
    Configuration,

    /// A value failed validation
    #[error("Validation error")]
    Validation,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
