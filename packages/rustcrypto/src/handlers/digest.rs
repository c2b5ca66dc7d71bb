use crate::components::Digest;
use crate::dispatch::DispatchTable;
use crate::error::{settle, PrimitiveError};
use crate::executor::{DigestExecutor, StreamingOperation};
use crate::operations::DigestOp;

/// Hash the request's cleartext with the registered algorithm it names
///
/// An unregistered identifier yields `None` without constructing an executor.
#[must_use]
pub fn op_digest(table: &DispatchTable, op: &DigestOp) -> Option<Digest> {
    match table.lookup(op.digest_type) {
        Some(entry) => DigestExecutor::new(entry).run(op),
        None => settle(
            DigestExecutor::OPERATION,
            &op.digest_type.to_string(),
            Err(PrimitiveError::UnsupportedAlgorithm(op.digest_type)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch;
    use cryptodiff_common::{AlgorithmId, Result};
    use hex_literal::hex;

    fn request(name: &str, cleartext: &[u8]) -> DigestOp {
        DigestOp {
            digest_type: AlgorithmId::digest(name),
            cleartext: cleartext.to_vec(),
            modifier: vec![1, 3, 0, 0, 0, 0, 0, 0, 0],
        }
    }

    #[test]
    fn registered_algorithm_produces_digest() -> Result<()> {
        let table = dispatch::initialize()?;
        let out = op_digest(table, &request("MD5", b"abc"));
        assert_eq!(
            out.as_ref().map(Digest::as_bytes),
            Some(&hex!("900150983cd24fb0d6963f7d28e17f72")[..])
        );
        Ok(())
    }

    #[test]
    fn unregistered_algorithm_is_none() -> Result<()> {
        let table = dispatch::initialize()?;
        assert!(op_digest(table, &request("SHA224", b"abc")).is_none());
        assert!(op_digest(table, &request("KECCAK_256", b"abc")).is_none());
        Ok(())
    }
}
