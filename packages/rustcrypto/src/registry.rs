//! Digest algorithms served by this module
//!
//! SHA224 is deliberately absent: its output has not been validated against
//! the other modules yet, so requests for it must report "no result".

use crate::primitive::{
    adler32_finalize, adler32_init, adler32_update, crc32_finalize, crc32_init, crc32_update,
    AlgorithmEntry,
};
use blake2::{Blake2b, Blake2s};
use digest::consts::{U16, U20, U28, U32, U48, U64};

/// Every digest registration, in registration order
#[must_use]
pub fn digest_entries() -> Vec<AlgorithmEntry> {
    vec![
        AlgorithmEntry::new("CRC32", 4, crc32_init, crc32_update, crc32_finalize),
        AlgorithmEntry::new("ADLER32", 4, adler32_init, adler32_update, adler32_finalize),
        AlgorithmEntry::hash::<md2::Md2>("MD2", 16),
        AlgorithmEntry::hash::<md4::Md4>("MD4", 16),
        AlgorithmEntry::hash::<md5::Md5>("MD5", 16),
        AlgorithmEntry::hash::<ripemd::Ripemd128>("RIPEMD128", 16),
        AlgorithmEntry::hash::<ripemd::Ripemd160>("RIPEMD160", 20),
        AlgorithmEntry::hash::<ripemd::Ripemd256>("RIPEMD256", 32),
        AlgorithmEntry::hash::<ripemd::Ripemd320>("RIPEMD320", 40),
        AlgorithmEntry::hash::<sha1::Sha1>("SHA1", 20),
        AlgorithmEntry::hash::<sha2::Sha256>("SHA256", 32),
        AlgorithmEntry::hash::<sha2::Sha384>("SHA384", 48),
        AlgorithmEntry::hash::<sha2::Sha512>("SHA512", 64),
        AlgorithmEntry::hash::<tiger::Tiger>("TIGER", 24),
        AlgorithmEntry::hash::<Blake2b<U20>>("BLAKE2B160", 20),
        AlgorithmEntry::hash::<Blake2b<U32>>("BLAKE2B256", 32),
        AlgorithmEntry::hash::<Blake2b<U48>>("BLAKE2B384", 48),
        AlgorithmEntry::hash::<Blake2b<U64>>("BLAKE2B512", 64),
        AlgorithmEntry::hash::<Blake2s<U16>>("BLAKE2S128", 16),
        AlgorithmEntry::hash::<Blake2s<U20>>("BLAKE2S160", 20),
        AlgorithmEntry::hash::<Blake2s<U28>>("BLAKE2S224", 28),
        AlgorithmEntry::hash::<Blake2s<U32>>("BLAKE2S256", 32),
    ]
}
