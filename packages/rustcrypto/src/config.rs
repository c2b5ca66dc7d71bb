//! Module configuration
//!
//! HMAC and bcrypt-PBKDF are switched off unless configured otherwise: HMAC
//! until its output is validated against other modules, bcrypt because
//! adversarial round counts exhaust memory and time. A disabled handler
//! reports "no result" without touching any primitive.

use cryptodiff_common::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

const ENV_HMAC_ENABLED: &str = "CRYPTODIFF_HMAC_ENABLED";
const ENV_BCRYPT_ENABLED: &str = "CRYPTODIFF_BCRYPT_ENABLED";
const ENV_MAX_KEY_SIZE: &str = "CRYPTODIFF_MAX_KEY_SIZE";
const ENV_MAX_BCRYPT_ROUNDS: &str = "CRYPTODIFF_MAX_BCRYPT_ROUNDS";

/// Per-module handler switches and resource bounds
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Serve HMAC requests
    #[serde(default)]
    pub hmac_enabled: bool,
    /// Serve bcrypt-PBKDF requests
    #[serde(default)]
    pub bcrypt_enabled: bool,
    /// Largest `key_size` a KDF request may ask for
    #[serde(default = "default_max_key_size")]
    pub max_key_size: usize,
    /// Largest bcrypt-PBKDF round count served when bcrypt is enabled
    #[serde(default = "default_max_bcrypt_rounds")]
    pub max_bcrypt_rounds: u32,
}

fn default_max_key_size() -> usize {
    1 << 16
}

fn default_max_bcrypt_rounds() -> u32 {
    64
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            hmac_enabled: false,
            bcrypt_enabled: false,
            max_key_size: default_max_key_size(),
            max_bcrypt_rounds: default_max_bcrypt_rounds(),
        }
    }
}

impl ModuleConfig {
    /// Parse a JSON document; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::with_source(ErrorKind::Configuration, e).context("parsing module config"))
    }

    /// Defaults overlaid with `CRYPTODIFF_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but unparsable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a value is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_HMAC_ENABLED)? {
            config.hmac_enabled = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_BCRYPT_ENABLED)? {
            config.bcrypt_enabled = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_MAX_KEY_SIZE)? {
            config.max_key_size = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_MAX_BCRYPT_ROUNDS)? {
            config.max_bcrypt_rounds = v;
        }

        if config.bcrypt_enabled {
            warn!(
                max_rounds = config.max_bcrypt_rounds,
                "bcrypt-PBKDF handler enabled"
            );
        }
        Ok(config)
    }

    /// Enable or disable the HMAC handler
    #[must_use]
    pub fn with_hmac(mut self, enabled: bool) -> Self {
        self.hmac_enabled = enabled;
        self
    }

    /// Enable or disable the bcrypt-PBKDF handler
    #[must_use]
    pub fn with_bcrypt(mut self, enabled: bool) -> Self {
        self.bcrypt_enabled = enabled;
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e| cryptodiff_common::err!(configuration, "{}={:?}: {}", key, raw, e))
}
