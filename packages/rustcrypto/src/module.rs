//! The module interface the fuzzing harness drives

use crate::components::{Digest, Key, Mac};
use crate::config::ModuleConfig;
use crate::dispatch::{self, DispatchTable};
use crate::handlers;
use crate::operations::{BcryptOp, DigestOp, HkdfOp, HmacOp, Operation};
use cryptodiff_common::Result;
use serde::{Deserialize, Serialize};

/// Output of any operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "bytes", rename_all = "snake_case")]
pub enum Output {
    /// From [`Module::op_digest`]
    Digest(Digest),
    /// From [`Module::op_hmac`]
    Mac(Mac),
    /// From either KDF
    Key(Key),
}

impl Output {
    /// Raw output bytes regardless of kind
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Digest(d) => d.as_bytes(),
            Self::Mac(m) => m.as_bytes(),
            Self::Key(k) => k.as_bytes(),
        }
    }
}

/// A backend answering operation requests
///
/// Every operation defaults to `None`, so a module overrides only what its
/// library supports. `None` always means "no result": the request was
/// unsupported, malformed, disabled, or the primitive failed.
pub trait Module {
    /// Short backend name
    fn name(&self) -> &'static str;

    /// Hash a cleartext
    fn op_digest(&self, _op: &DigestOp) -> Option<Digest> {
        None
    }

    /// Authenticate a cleartext under a key
    fn op_hmac(&self, _op: &HmacOp) -> Option<Mac> {
        None
    }

    /// Derive a key with HKDF
    fn op_kdf_hkdf(&self, _op: &HkdfOp) -> Option<Key> {
        None
    }

    /// Derive a key with bcrypt-PBKDF
    fn op_kdf_bcrypt(&self, _op: &BcryptOp) -> Option<Key> {
        None
    }

    /// Route a tagged request to its operation
    fn run(&self, op: &Operation) -> Option<Output> {
        match op {
            Operation::Digest(op) => self.op_digest(op).map(Output::Digest),
            Operation::Hmac(op) => self.op_hmac(op).map(Output::Mac),
            Operation::KdfHkdf(op) => self.op_kdf_hkdf(op).map(Output::Key),
            Operation::KdfBcrypt(op) => self.op_kdf_bcrypt(op).map(Output::Key),
        }
    }
}

/// Module backed by the RustCrypto hash, MAC and KDF crates
#[derive(Debug, Clone)]
pub struct RustCryptoModule {
    config: ModuleConfig,
    table: &'static DispatchTable,
}

impl RustCryptoModule {
    /// Register algorithms (once per process) and build the module
    ///
    /// # Errors
    ///
    /// Returns a registration error if the digest table cannot be built.
    pub fn new(config: ModuleConfig) -> Result<Self> {
        let table = dispatch::initialize()?;
        Ok(Self { config, table })
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// Shared digest table
    #[must_use]
    pub fn table(&self) -> &'static DispatchTable {
        self.table
    }
}

impl Module for RustCryptoModule {
    fn name(&self) -> &'static str {
        "rustcrypto"
    }

    fn op_digest(&self, op: &DigestOp) -> Option<Digest> {
        handlers::op_digest(self.table, op)
    }

    fn op_hmac(&self, op: &HmacOp) -> Option<Mac> {
        handlers::op_hmac(&self.config, op)
    }

    fn op_kdf_hkdf(&self, op: &HkdfOp) -> Option<Key> {
        handlers::op_kdf_hkdf(&self.config, op)
    }

    fn op_kdf_bcrypt(&self, op: &BcryptOp) -> Option<Key> {
        handlers::op_kdf_bcrypt(&self.config, op)
    }
}
