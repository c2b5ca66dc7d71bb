//! Error handling with context propagation
//!
//! - Structured error kinds with thiserror
//! - Context attachment with call-site location (`err!`, `bail!`, `ensure!`)
//! - Backtrace capture behind the `full-backtrace` feature

pub mod constructors;
pub mod display;
pub mod macros;
pub mod types;

pub use types::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(len: usize) -> Result<usize> {
        crate::ensure!(len > 0, validation, "length must be non-zero");
        Ok(len)
    }

    #[test]
    fn ensure_attaches_location_context() {
        let err = checked(0).err();
        let err = err.as_ref().map(Error::kind);
        assert_eq!(err, Some(&ErrorKind::Validation));

        let msg = checked(0).map_err(|e| e.to_string()).err().unwrap_or_default();
        assert!(msg.starts_with("Validation error: length must be non-zero at "));
        assert!(msg.contains("mod.rs"));
    }

    #[test]
    fn context_is_prepended() {
        let err = Error::registration().context("inner").context("outer");
        assert_eq!(err.get_context(), Some("outer: inner"));
        assert_eq!(err, ErrorKind::Registration);
    }

    #[test]
    fn source_chain_is_displayed() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = Error::with_source(ErrorKind::Configuration, io);
        let rendered = err.to_string();
        assert!(rendered.starts_with("Configuration error"));
        assert!(rendered.contains("Caused by: disk on fire"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
