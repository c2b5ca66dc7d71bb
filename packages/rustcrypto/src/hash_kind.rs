//! Hash namespace for keyed and derivation primitives
//!
//! HMAC and the KDFs are generic over a hash type rather than driven through
//! the digest dispatch table, and they accept a narrower set of algorithms.
//! [`HashKind`] is that set; `with_hash!` turns a kind back into a concrete
//! type parameter.

use cryptodiff_common::AlgorithmId;

/// Hash functions usable under HMAC, HKDF and bcrypt-PBKDF
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// MD2
    Md2,
    /// MD4
    Md4,
    /// MD5
    Md5,
    /// RIPEMD-128
    Ripemd128,
    /// RIPEMD-160
    Ripemd160,
    /// RIPEMD-256
    Ripemd256,
    /// RIPEMD-320
    Ripemd320,
    /// SHA-1
    Sha1,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// Tiger/192
    Tiger,
}

impl HashKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 12] = [
        Self::Md2,
        Self::Md4,
        Self::Md5,
        Self::Ripemd128,
        Self::Ripemd160,
        Self::Ripemd256,
        Self::Ripemd320,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Tiger,
    ];

    /// Canonical algorithm name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md2 => "MD2",
            Self::Md4 => "MD4",
            Self::Md5 => "MD5",
            Self::Ripemd128 => "RIPEMD128",
            Self::Ripemd160 => "RIPEMD160",
            Self::Ripemd256 => "RIPEMD256",
            Self::Ripemd320 => "RIPEMD320",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Tiger => "TIGER",
        }
    }

    /// Kind for `id`, or `None` when keyed primitives have no equivalent
    ///
    /// SHA224, the checksums and the BLAKE2 family map to nothing.
    #[must_use]
    pub fn from_id(id: AlgorithmId) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| AlgorithmId::digest(kind.name()) == id)
    }

    /// Identifier of this kind in the shared namespace
    #[must_use]
    pub fn id(self) -> AlgorithmId {
        AlgorithmId::digest(self.name())
    }
}

/// Evaluate `$body` with `$ty` bound to the hash type for `$kind`
///
/// ```ignore
/// let len = with_hash!(kind, H => <H as digest::Digest>::output_size());
/// ```
macro_rules! with_hash {
    ($kind:expr, $ty:ident => $body:expr) => {
        match $kind {
            $crate::hash_kind::HashKind::Md2 => {
                type $ty = md2::Md2;
                $body
            }
            $crate::hash_kind::HashKind::Md4 => {
                type $ty = md4::Md4;
                $body
            }
            $crate::hash_kind::HashKind::Md5 => {
                type $ty = md5::Md5;
                $body
            }
            $crate::hash_kind::HashKind::Ripemd128 => {
                type $ty = ripemd::Ripemd128;
                $body
            }
            $crate::hash_kind::HashKind::Ripemd160 => {
                type $ty = ripemd::Ripemd160;
                $body
            }
            $crate::hash_kind::HashKind::Ripemd256 => {
                type $ty = ripemd::Ripemd256;
                $body
            }
            $crate::hash_kind::HashKind::Ripemd320 => {
                type $ty = ripemd::Ripemd320;
                $body
            }
            $crate::hash_kind::HashKind::Sha1 => {
                type $ty = sha1::Sha1;
                $body
            }
            $crate::hash_kind::HashKind::Sha256 => {
                type $ty = sha2::Sha256;
                $body
            }
            $crate::hash_kind::HashKind::Sha384 => {
                type $ty = sha2::Sha384;
                $body
            }
            $crate::hash_kind::HashKind::Sha512 => {
                type $ty = sha2::Sha512;
                $body
            }
            $crate::hash_kind::HashKind::Tiger => {
                type $ty = tiger::Tiger;
                $body
            }
        }
    };
}

pub(crate) use with_hash;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_keyed_namespace_only() {
        assert_eq!(
            HashKind::from_id(AlgorithmId::digest("SHA256")),
            Some(HashKind::Sha256)
        );
        assert_eq!(
            HashKind::from_id(AlgorithmId::digest("TIGER")),
            Some(HashKind::Tiger)
        );
        for name in ["SHA224", "CRC32", "ADLER32", "BLAKE2B512", "KECCAK_256"] {
            assert_eq!(HashKind::from_id(AlgorithmId::digest(name)), None, "{name}");
        }
    }

    #[test]
    fn macro_binds_matching_type() {
        use digest::Digest;
        for kind in HashKind::ALL {
            let len = with_hash!(kind, H => <H as Digest>::output_size());
            let expected = match kind {
                HashKind::Md2 | HashKind::Md4 | HashKind::Md5 | HashKind::Ripemd128 => 16,
                HashKind::Ripemd160 | HashKind::Sha1 => 20,
                HashKind::Tiger => 24,
                HashKind::Ripemd256 | HashKind::Sha256 => 32,
                HashKind::Ripemd320 => 40,
                HashKind::Sha384 => 48,
                HashKind::Sha512 => 64,
            };
            assert_eq!(len, expected, "{}", kind.name());
        }
    }
}
