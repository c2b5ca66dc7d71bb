//! Operation descriptors
//!
//! Descriptors arrive already parsed from the fuzz input. Buffers that may be
//! legitimately absent are `Option`s; an absent buffer and an empty one are
//! different requests.

use cryptodiff_common::AlgorithmId;
use serde::{Deserialize, Serialize};

/// Request to hash `cleartext` with `digest_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestOp {
    /// Digest algorithm
    pub digest_type: AlgorithmId,
    /// Bytes to hash
    pub cleartext: Vec<u8>,
    /// Datasource bytes deciding the multipart split
    #[serde(default)]
    pub modifier: Vec<u8>,
}

/// Request to authenticate `cleartext` with HMAC over `digest_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacOp {
    /// Underlying hash
    pub digest_type: AlgorithmId,
    /// Bytes to authenticate
    pub cleartext: Vec<u8>,
    /// MAC key; absent is distinct from empty
    pub key: Option<Vec<u8>>,
    /// Datasource bytes deciding the multipart split
    #[serde(default)]
    pub modifier: Vec<u8>,
}

/// Request to derive `key_size` bytes with HKDF over `digest_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HkdfOp {
    /// Underlying hash
    pub digest_type: AlgorithmId,
    /// Input keying material
    pub password: Option<Vec<u8>>,
    /// Extract salt; absent means no salt
    pub salt: Option<Vec<u8>>,
    /// Expand context; absent means empty
    pub info: Option<Vec<u8>>,
    /// Requested output length in bytes
    pub key_size: usize,
    /// Datasource bytes, unused by one-shot derivation
    #[serde(default)]
    pub modifier: Vec<u8>,
}

/// Request to derive `key_size` bytes with bcrypt-PBKDF over `digest_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BcryptOp {
    /// Underlying hash
    pub digest_type: AlgorithmId,
    /// Passphrase
    pub secret: Option<Vec<u8>>,
    /// Salt
    pub salt: Option<Vec<u8>>,
    /// Round count
    pub iterations: u32,
    /// Requested output length in bytes
    pub key_size: usize,
    /// Datasource bytes, unused by one-shot derivation
    #[serde(default)]
    pub modifier: Vec<u8>,
}

/// Any request a module can be asked to serve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    /// Hash a cleartext
    Digest(DigestOp),
    /// HMAC over a cleartext
    Hmac(HmacOp),
    /// HKDF derivation
    KdfHkdf(HkdfOp),
    /// bcrypt-PBKDF derivation
    KdfBcrypt(BcryptOp),
}

impl Operation {
    /// Algorithm the request names
    #[must_use]
    pub fn digest_type(&self) -> AlgorithmId {
        match self {
            Self::Digest(op) => op.digest_type,
            Self::Hmac(op) => op.digest_type,
            Self::KdfHkdf(op) => op.digest_type,
            Self::KdfBcrypt(op) => op.digest_type,
        }
    }

    /// Bytes seeding the request's datasource
    #[must_use]
    pub fn modifier(&self) -> &[u8] {
        match self {
            Self::Digest(op) => &op.modifier,
            Self::Hmac(op) => &op.modifier,
            Self::KdfHkdf(op) => &op.modifier,
            Self::KdfBcrypt(op) => &op.modifier,
        }
    }
}

/// Descriptor whose cleartext is fed to a primitive in parts
pub trait Streamable {
    /// Bytes to feed
    fn cleartext(&self) -> &[u8];

    /// Bytes deciding where the cleartext is cut
    fn modifier(&self) -> &[u8];
}

impl Streamable for DigestOp {
    fn cleartext(&self) -> &[u8] {
        &self.cleartext
    }

    fn modifier(&self) -> &[u8] {
        &self.modifier
    }
}

impl Streamable for HmacOp {
    fn cleartext(&self) -> &[u8] {
        &self.cleartext
    }

    fn modifier(&self) -> &[u8] {
        &self.modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_descriptor_roundtrips_through_json() -> serde_json::Result<()> {
        let json = r#"{
            "operation": "kdf_hkdf",
            "digest_type": 7,
            "password": [1, 2, 3],
            "salt": null,
            "info": [],
            "key_size": 16
        }"#;
        let op: Operation = serde_json::from_str(json)?;

        assert_eq!(op.digest_type(), AlgorithmId::from_raw(7));
        assert!(op.modifier().is_empty());
        match &op {
            Operation::KdfHkdf(hkdf) => {
                assert_eq!(hkdf.password.as_deref(), Some(&[1u8, 2, 3][..]));
                assert_eq!(hkdf.salt, None);
                assert_eq!(hkdf.info.as_deref(), Some(&[][..]));
            }
            other => panic!("decoded wrong variant: {other:?}"),
        }

        let again: Operation = serde_json::from_str(&serde_json::to_string(&op)?)?;
        assert_eq!(again, op);
        Ok(())
    }
}
