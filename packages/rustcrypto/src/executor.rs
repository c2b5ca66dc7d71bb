//! Streaming execution of incremental primitives
//!
//! A request's cleartext is split by its modifier bytes and pushed through a
//! primitive's init/update/finalize interface. Implementations supply the
//! three phases; [`StreamingOperation::execute`] sequences them and checks
//! that every cleartext byte was fed exactly once.

use crate::components::{Digest, Mac};
use crate::error::{self, PrimitiveError, Result};
use crate::operations::{DigestOp, HmacOp, Streamable};
use crate::primitive::{AlgorithmEntry, Context};
use cryptodiff_common::{Datasource, Multipart};
use digest::core_api::BlockSizeUser;
use hmac::{Mac as _, SimpleHmac};
use tracing::trace;

/// Largest MAC output any supported hash can produce
pub const MAX_BLOCK_SIZE: usize = 144;

/// Lifecycle of one primitive context
#[derive(Debug, Default)]
pub enum Phase<C> {
    /// No context yet
    #[default]
    Created,
    /// Context live and accepting input
    Initialized(C),
    /// Context consumed
    Finalized,
}

impl<C> Phase<C> {
    /// Lowercase state name for diagnostics
    #[must_use]
    pub fn state(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Initialized(_) => "initialized",
            Self::Finalized => "finalized",
        }
    }

    /// Move from `Created` to `Initialized(ctx)`
    ///
    /// # Errors
    ///
    /// Fails if the phase has already left `Created`.
    pub fn begin(&mut self, ctx: C) -> Result<()> {
        match self {
            Self::Created => {
                *self = Self::Initialized(ctx);
                Ok(())
            }
            other => Err(PrimitiveError::InvalidState {
                attempted: "init",
                state: other.state(),
            }),
        }
    }

    /// The live context
    ///
    /// # Errors
    ///
    /// Fails unless the phase is `Initialized`.
    pub fn context_mut(&mut self) -> Result<&mut C> {
        match self {
            Self::Initialized(ctx) => Ok(ctx),
            other => Err(PrimitiveError::InvalidState {
                attempted: "update",
                state: other.state(),
            }),
        }
    }

    /// Take the context out, leaving `Finalized`
    ///
    /// # Errors
    ///
    /// Fails unless the phase is `Initialized`; the phase is left unchanged.
    pub fn finish(&mut self) -> Result<C> {
        match std::mem::replace(self, Self::Finalized) {
            Self::Initialized(ctx) => Ok(ctx),
            previous => {
                let state = previous.state();
                *self = previous;
                Err(PrimitiveError::InvalidState {
                    attempted: "finalize",
                    state,
                })
            }
        }
    }
}

/// Push every non-empty part of `parts` through `update`, in order
///
/// Returns the number of bytes fed. Stops at the first failing part.
///
/// # Errors
///
/// Propagates the first `update` failure.
pub fn feed<C, F>(ctx: &mut C, parts: &Multipart<'_>, mut update: F) -> Result<usize>
where
    F: FnMut(&mut C, &[u8]) -> Result<()>,
{
    let mut fed = 0;
    for (index, part) in parts.non_empty().enumerate() {
        trace!(index, len = part.len(), "feeding part");
        update(ctx, part)?;
        fed += part.len();
    }
    Ok(fed)
}

/// A primitive driven through init, a series of updates, and finalize
///
/// One value serves exactly one request; [`execute`](Self::execute) consumes
/// it.
pub trait StreamingOperation: Sized {
    /// Request this operation serves
    type Descriptor: Streamable;
    /// Result component it produces
    type Output: From<Vec<u8>>;

    /// Handler name used when logging a missing result
    const OPERATION: &'static str;

    /// Canonical name of the algorithm being run
    fn algorithm(&self) -> &'static str;

    /// Create the primitive context
    ///
    /// # Errors
    ///
    /// Any failure aborts the request before a single byte is fed.
    fn run_init(&mut self, op: &Self::Descriptor) -> Result<()>;

    /// Feed the parts in order, returning the number of bytes fed
    ///
    /// # Errors
    ///
    /// Any failing part aborts the whole request.
    fn run_update(&mut self, parts: &Multipart<'_>) -> Result<usize>;

    /// Produce the output bytes
    ///
    /// # Errors
    ///
    /// Fails if the primitive cannot produce its declared output.
    fn run_finalize(&mut self) -> Result<Vec<u8>>;

    /// Run the full lifecycle over `op`'s split cleartext
    ///
    /// # Errors
    ///
    /// Returns the first phase failure, or [`PrimitiveError::LengthMismatch`]
    /// if the bytes fed differ from the cleartext length.
    fn execute(mut self, op: &Self::Descriptor) -> Result<Self::Output> {
        self.run_init(op)?;

        let cleartext = op.cleartext();
        let mut ds = Datasource::new(op.modifier());
        let parts = Multipart::split(&mut ds, cleartext);

        let fed = self.run_update(&parts)?;
        if fed != cleartext.len() {
            return Err(PrimitiveError::LengthMismatch {
                fed,
                expected: cleartext.len(),
            });
        }

        self.run_finalize().map(Self::Output::from)
    }

    /// [`execute`](Self::execute), with any failure logged and reported as `None`
    fn run(self, op: &Self::Descriptor) -> Option<Self::Output> {
        let algorithm = self.algorithm();
        error::settle(Self::OPERATION, algorithm, self.execute(op))
    }
}

/// Runs one registered digest algorithm
#[derive(Debug)]
pub struct DigestExecutor<'t> {
    entry: &'t AlgorithmEntry,
    phase: Phase<Context>,
}

impl<'t> DigestExecutor<'t> {
    /// Executor for the algorithm registered as `entry`
    #[must_use]
    pub fn new(entry: &'t AlgorithmEntry) -> Self {
        Self {
            entry,
            phase: Phase::Created,
        }
    }
}

impl StreamingOperation for DigestExecutor<'_> {
    type Descriptor = DigestOp;
    type Output = Digest;

    const OPERATION: &'static str = "OpDigest";

    fn algorithm(&self) -> &'static str {
        self.entry.name
    }

    fn run_init(&mut self, _op: &DigestOp) -> Result<()> {
        let ctx = (self.entry.init)()?;
        self.phase.begin(ctx)
    }

    fn run_update(&mut self, parts: &Multipart<'_>) -> Result<usize> {
        let update = self.entry.update;
        feed(self.phase.context_mut()?, parts, update)
    }

    fn run_finalize(&mut self) -> Result<Vec<u8>> {
        let ctx = self.phase.finish()?;
        let mut out = vec![0u8; self.entry.output_size];
        (self.entry.finalize)(ctx, &mut out)?;
        Ok(out)
    }
}

/// Runs HMAC keyed by the request's key over hash `D`
pub struct MacExecutor<D>
where
    D: digest::Digest + BlockSizeUser,
{
    name: &'static str,
    phase: Phase<SimpleHmac<D>>,
}

impl<D> MacExecutor<D>
where
    D: digest::Digest + BlockSizeUser,
{
    /// Executor reporting itself as `name` in logs
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            phase: Phase::Created,
        }
    }
}

impl<D> StreamingOperation for MacExecutor<D>
where
    D: digest::Digest + BlockSizeUser,
{
    type Descriptor = HmacOp;
    type Output = Mac;

    const OPERATION: &'static str = "OpMAC";

    fn algorithm(&self) -> &'static str {
        self.name
    }

    fn run_init(&mut self, op: &HmacOp) -> Result<()> {
        let key = op.key.as_deref().ok_or(PrimitiveError::MissingInput("key"))?;
        let mac = <SimpleHmac<D> as hmac::Mac>::new_from_slice(key)
            .map_err(|e| PrimitiveError::InvalidKey(e.to_string()))?;
        self.phase.begin(mac)
    }

    fn run_update(&mut self, parts: &Multipart<'_>) -> Result<usize> {
        feed(self.phase.context_mut()?, parts, |mac, part| {
            mac.update(part);
            Ok(())
        })
    }

    fn run_finalize(&mut self) -> Result<Vec<u8>> {
        let out = self.phase.finish()?.finalize().into_bytes().to_vec();
        if out.len() > MAX_BLOCK_SIZE {
            return Err(PrimitiveError::OutputSize {
                expected: MAX_BLOCK_SIZE,
                actual: out.len(),
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{hash_finalize, hash_init, hash_update};
    use cryptodiff_common::AlgorithmId;

    fn sha256_entry() -> AlgorithmEntry {
        AlgorithmEntry::new(
            "SHA256",
            32,
            hash_init::<sha2::Sha256>,
            hash_update,
            hash_finalize,
        )
    }

    fn digest_op(cleartext: &[u8], modifier: &[u8]) -> DigestOp {
        DigestOp {
            digest_type: AlgorithmId::digest("SHA256"),
            cleartext: cleartext.to_vec(),
            modifier: modifier.to_vec(),
        }
    }

    #[test]
    fn phases_must_run_in_order() {
        let mut phase: Phase<u8> = Phase::default();
        assert_eq!(
            phase.context_mut().err(),
            Some(PrimitiveError::InvalidState {
                attempted: "update",
                state: "created"
            })
        );
        assert!(phase.finish().is_err());
        assert_eq!(phase.state(), "created");

        assert_eq!(phase.begin(7), Ok(()));
        assert!(phase.begin(8).is_err());
        assert_eq!(phase.finish(), Ok(7));
        assert_eq!(phase.state(), "finalized");
        assert!(phase.context_mut().is_err());
    }

    #[test]
    fn feed_skips_empty_parts() -> Result<()> {
        let data = b"abcdef";
        let parts = Multipart::from_lengths(data, &[0, 2, 0, 0, 4]);
        let mut seen = Vec::new();
        let fed = feed(&mut seen, &parts, |seen, part| {
            assert!(!part.is_empty());
            seen.push(part.to_vec());
            Ok(())
        })?;
        assert_eq!(fed, 6);
        assert_eq!(seen, vec![b"ab".to_vec(), b"cdef".to_vec()]);
        Ok(())
    }

    #[test]
    fn feed_stops_at_first_failure() {
        let parts = Multipart::from_lengths(b"abcdef", &[1, 1]);
        let mut calls = 0;
        let result = feed(&mut calls, &parts, |calls, _| {
            *calls += 1;
            Err(PrimitiveError::precondition("refused"))
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn digest_matches_one_shot() -> Result<()> {
        use sha2::Digest as _;
        let entry = sha256_entry();
        let cleartext: Vec<u8> = (0u8..100).collect();
        let expected = sha2::Sha256::digest(&cleartext).to_vec();

        for modifier in [&[][..], &[1, 5, 0, 0, 0, 0, 0, 0, 0, 1, 9][..], &[0xff; 64][..]] {
            let out = DigestExecutor::new(&entry).execute(&digest_op(&cleartext, modifier))?;
            assert_eq!(out.as_bytes(), expected.as_slice());
        }
        Ok(())
    }

    #[test]
    fn failing_init_yields_none() {
        fn refuse() -> Result<Context> {
            Err(PrimitiveError::precondition("no context"))
        }
        let entry = AlgorithmEntry::new("SHA256", 32, refuse, hash_update, hash_finalize);
        assert!(DigestExecutor::new(&entry).run(&digest_op(b"abc", &[])).is_none());
    }

    #[test]
    fn mac_requires_key() {
        let op = HmacOp {
            digest_type: AlgorithmId::digest("SHA256"),
            cleartext: b"abc".to_vec(),
            key: None,
            modifier: Vec::new(),
        };
        assert_eq!(
            MacExecutor::<sha2::Sha256>::new("SHA256").execute(&op).err(),
            Some(PrimitiveError::MissingInput("key"))
        );
    }
}
