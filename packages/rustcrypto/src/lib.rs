//! RustCrypto backend for the cryptodiff differential fuzzing harness
//!
//! The harness hands every module the same operation request and compares the
//! answers. This crate answers with the RustCrypto hash, HMAC, HKDF and
//! bcrypt-PBKDF implementations, feeding each incremental primitive the
//! request's cleartext in pieces chosen by the request's modifier bytes.
//!
//! ```no_run
//! use cryptodiff_common::{AlgorithmId, LoggingTransformer};
//! use cryptodiff_rustcrypto::{DigestOp, Module, ModuleConfig, RustCryptoModule};
//!
//! # fn main() -> cryptodiff_common::Result<()> {
//! LoggingTransformer::init();
//! let module = RustCryptoModule::new(ModuleConfig::from_env()?)?;
//! let digest = module.op_digest(&DigestOp {
//!     digest_type: AlgorithmId::digest("SHA256"),
//!     cleartext: b"abc".to_vec(),
//!     modifier: vec![1, 2, 0, 0, 0, 0, 0, 0, 0],
//! });
//! assert_eq!(digest.map(|d| d.len()), Some(32));
//! # Ok(())
//! # }
//! ```

pub mod components;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod hash_kind;
pub mod module;
pub mod operations;
pub mod primitive;
pub mod registry;

pub use components::{Digest, Key, Mac};
pub use config::ModuleConfig;
pub use dispatch::DispatchTable;
pub use error::PrimitiveError;
pub use executor::{DigestExecutor, MacExecutor, Phase, StreamingOperation, MAX_BLOCK_SIZE};
pub use hash_kind::HashKind;
pub use module::{Module, Output, RustCryptoModule};
pub use operations::{BcryptOp, DigestOp, HkdfOp, HmacOp, Operation, Streamable};
pub use primitive::{AlgorithmEntry, Context};
