use crate::components::Key;
use crate::config::ModuleConfig;
use crate::error::{settle, PrimitiveError, Result};
use crate::hash_kind::{with_hash, HashKind};
use crate::operations::HkdfOp;
use digest::core_api::BlockSizeUser;
use hkdf::SimpleHkdf;

const OPERATION: &str = "OpKDF_HKDF";

/// Derive `key_size` bytes with HKDF over the named hash
///
/// An absent salt means "no salt"; an absent info is the empty string.
#[must_use]
pub fn op_kdf_hkdf(config: &ModuleConfig, op: &HkdfOp) -> Option<Key> {
    settle(OPERATION, &super::label(op.digest_type), derive(config, op))
}

fn derive(config: &ModuleConfig, op: &HkdfOp) -> Result<Key> {
    let password = op
        .password
        .as_deref()
        .ok_or(PrimitiveError::MissingInput("password"))?;
    let kind = HashKind::from_id(op.digest_type)
        .ok_or(PrimitiveError::UnsupportedAlgorithm(op.digest_type))?;
    if op.key_size > config.max_key_size {
        return Err(PrimitiveError::precondition(format!(
            "key size {} exceeds limit {}",
            op.key_size, config.max_key_size
        )));
    }

    let info = op.info.as_deref().unwrap_or_default();
    let mut okm = vec![0u8; op.key_size];
    with_hash!(kind, H => expand::<H>(op.salt.as_deref(), password, info, &mut okm))?;
    Ok(Key::new(okm))
}

fn expand<H>(salt: Option<&[u8]>, ikm: &[u8], info: &[u8], okm: &mut [u8]) -> Result<()>
where
    H: digest::Digest + BlockSizeUser + Clone,
{
    SimpleHkdf::<H>::new(salt, ikm)
        .expand(info, okm)
        .map_err(PrimitiveError::derivation)
}
