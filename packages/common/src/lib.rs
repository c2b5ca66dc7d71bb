//! Shared infrastructure for cryptodiff modules
//!
//! - Error handling with context propagation
//! - Logging bootstrap
//! - Stable algorithm identifiers
//! - The request datasource and multipart splitting used to drive incremental
//!   primitive APIs

pub mod datasource;
pub mod error;
pub mod id;
pub mod logging;
pub mod multipart;

pub use datasource::Datasource;
pub use error::{Error, ErrorKind, Result};
pub use id::AlgorithmId;
pub use logging::LoggingTransformer;
pub use multipart::Multipart;
