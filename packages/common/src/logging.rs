//! Logging bootstrap and structured helpers
//!
//! Modules emit events through `tracing`; with its `log` feature enabled those
//! events reach the `env_logger` backend installed here whenever no `tracing`
//! subscriber is active. Levels come from `RUST_LOG`:
//! - `RUST_LOG=debug` - every "no result" cause is logged
//! - `RUST_LOG=info` - registration summaries only
//! - `RUST_LOG=cryptodiff_rustcrypto=trace` - per-part feed tracing for one module
//!
//! Key material is never logged. Helpers take lengths and algorithm names only.

use log::{debug, error, info};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at harness startup; later calls are no-ops)
    ///
    /// A logger already installed by the harness is left in place.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            let installed = env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init();

            if installed.is_ok() {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed algorithm registration pass
    pub fn log_registration(module: &str, registered: usize) {
        info!("Module {module} registered {registered} digest algorithms");
    }

    /// Log a fatal registration failure right before the process aborts
    pub fn log_registration_failure(module: &str, error: &dyn std::error::Error) {
        error!("Module {module} failed to register algorithms, aborting: {error}");
    }

    /// Log why an operation produced no result
    ///
    /// `operation` is the handler name, `algorithm` a human readable algorithm
    /// name or raw identifier.
    pub fn log_no_result(operation: &str, algorithm: &str, reason: &dyn std::fmt::Display) {
        debug!("{operation} [{algorithm}]: no result ({reason})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_do_not_panic() {
        LoggingTransformer::init_test();
        LoggingTransformer::init_test();

        LoggingTransformer::log_registration("test", 3);
        LoggingTransformer::log_no_result("OpDigest", "SHA256", &"unsupported");
        let err = std::fmt::Error;
        LoggingTransformer::log_registration_failure("test", &err);
    }

    #[test]
    fn init_tolerates_existing_logger() {
        LoggingTransformer::init_test();
        LoggingTransformer::init();
        LoggingTransformer::init();
        log::debug!("still logging");
    }
}
