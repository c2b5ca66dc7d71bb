use crate::components::Key;
use crate::config::ModuleConfig;
use crate::error::{settle, PrimitiveError, Result};
use crate::hash_kind::HashKind;
use crate::operations::BcryptOp;

const OPERATION: &str = "OpKDF_BCRYPT";

/// Derive `key_size` bytes with bcrypt-PBKDF
///
/// Disabled unless [`ModuleConfig::bcrypt_enabled`] is set. Only SHA512 is
/// served. The `bcrypt-pbkdf` crate implements the OpenBSD construction,
/// which fixes the hash to SHA-512, so every other hash in the keyed
/// namespace is refused on purpose even though it resolves.
#[must_use]
pub fn op_kdf_bcrypt(config: &ModuleConfig, op: &BcryptOp) -> Option<Key> {
    settle(OPERATION, &super::label(op.digest_type), derive(config, op))
}

fn derive(config: &ModuleConfig, op: &BcryptOp) -> Result<Key> {
    if !config.bcrypt_enabled {
        return Err(PrimitiveError::Disabled);
    }
    if op.iterations == 0 {
        return Err(PrimitiveError::precondition("iterations must be non-zero"));
    }
    let secret = op
        .secret
        .as_deref()
        .ok_or(PrimitiveError::MissingInput("secret"))?;
    let salt = op
        .salt
        .as_deref()
        .ok_or(PrimitiveError::MissingInput("salt"))?;
    let kind = HashKind::from_id(op.digest_type)
        .ok_or(PrimitiveError::UnsupportedAlgorithm(op.digest_type))?;
    if op.iterations > config.max_bcrypt_rounds {
        return Err(PrimitiveError::precondition(format!(
            "{} rounds exceeds limit {}",
            op.iterations, config.max_bcrypt_rounds
        )));
    }
    if op.key_size > config.max_key_size {
        return Err(PrimitiveError::precondition(format!(
            "key size {} exceeds limit {}",
            op.key_size, config.max_key_size
        )));
    }
    // OpenBSD bcrypt-PBKDF has no hash parameter
    if kind != HashKind::Sha512 {
        return Err(PrimitiveError::UnsupportedAlgorithm(op.digest_type));
    }

    let mut out = vec![0u8; op.key_size];
    bcrypt_pbkdf::bcrypt_pbkdf(secret, salt, op.iterations, &mut out)
        .map_err(PrimitiveError::derivation)?;
    Ok(Key::new(out))
}
