//! Output must not depend on how the cleartext is cut

use cryptodiff_common::{AlgorithmId, Datasource, Multipart};
use cryptodiff_rustcrypto::{
    dispatch, DigestExecutor, DigestOp, HmacOp, MacExecutor, Module, ModuleConfig,
    RustCryptoModule, StreamingOperation,
};
use proptest::prelude::*;
use sha2::Digest as _;

/// Modifier that cuts a cleartext of `len` bytes into single-byte parts
fn one_byte_modifier(len: usize) -> Vec<u8> {
    (0..len)
        .flat_map(|_| std::iter::once(1u8).chain(1u64.to_le_bytes()))
        .collect()
}

#[test]
fn test_sha256_same_for_every_split() {
    let cleartext: Vec<u8> = (0x00..0x30).collect();
    let expected = sha2::Sha256::digest(&cleartext).to_vec();
    let module = RustCryptoModule::new(ModuleConfig::default()).expect("registration should succeed");

    let one_byte = one_byte_modifier(cleartext.len());
    let mut ds = Datasource::new(&one_byte);
    let parts = Multipart::split(&mut ds, &cleartext);
    assert_eq!(parts.non_empty().count(), 48);
    assert!(parts.non_empty().all(|p| p.len() == 1));

    let modifiers: [&[u8]; 4] = [
        &[],
        &one_byte,
        &[1, 0x11, 0, 0, 0, 0, 0, 0, 0, 1, 0x05, 0, 0, 0, 0, 0, 0, 0],
        &[0xff; 200],
    ];
    for modifier in modifiers {
        let out = module.op_digest(&DigestOp {
            digest_type: AlgorithmId::digest("SHA256"),
            cleartext: cleartext.clone(),
            modifier: modifier.to_vec(),
        });
        assert_eq!(out.map(|d| d.into_vec()), Some(expected.clone()));
    }
}

proptest! {
    #[test]
    fn prop_digest_split_invariant(
        cleartext in proptest::collection::vec(any::<u8>(), 0..512),
        modifier in proptest::collection::vec(any::<u8>(), 0..256),
        algorithm in prop::sample::select(vec!["MD5", "SHA1", "SHA512", "TIGER", "BLAKE2S224", "CRC32", "ADLER32"]),
    ) {
        let table = dispatch::initialize().expect("registration should succeed");
        let entry = table.lookup(AlgorithmId::digest(algorithm)).expect("algorithm is registered");

        let whole = DigestExecutor::new(entry).execute(&DigestOp {
            digest_type: entry.id,
            cleartext: cleartext.clone(),
            modifier: Vec::new(),
        });
        let split = DigestExecutor::new(entry).execute(&DigestOp {
            digest_type: entry.id,
            cleartext,
            modifier,
        });
        prop_assert!(whole.is_ok());
        prop_assert_eq!(whole, split);
    }

    #[test]
    fn prop_hmac_split_invariant(
        cleartext in proptest::collection::vec(any::<u8>(), 0..256),
        key in proptest::collection::vec(any::<u8>(), 0..200),
        modifier in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        use hmac::Mac as _;

        let op = HmacOp {
            digest_type: AlgorithmId::digest("SHA384"),
            cleartext: cleartext.clone(),
            key: Some(key.clone()),
            modifier,
        };
        let out = MacExecutor::<sha2::Sha384>::new("SHA384").execute(&op);

        let mut reference = hmac::Hmac::<sha2::Sha384>::new_from_slice(&key).expect("any key length");
        reference.update(&cleartext);
        let expected = reference.finalize().into_bytes().to_vec();
        prop_assert_eq!(out.map(|m| m.into_vec()), Ok(expected));
    }
}
