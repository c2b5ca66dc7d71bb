//! Stable algorithm identifiers
//!
//! Identifiers are shared across every module taking part in a differential
//! run, so they are derived from the algorithm's canonical name rather than
//! from any one library's internal numbering.

use serde::{Deserialize, Serialize};
use std::fmt;
use twox_hash::XxHash64;

const ID_SEED: u64 = 0;

/// Opaque identifier naming one digest algorithm
///
/// `AlgorithmId::digest("SHA256")` is the XXH64 hash of `"Digest/SHA256"`.
/// Any `u64` is a valid identifier; most of them name nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmId(u64);

impl AlgorithmId {
    /// Identifier for the digest algorithm with the given canonical name
    #[must_use]
    pub fn digest(name: &str) -> Self {
        let mut tagged = String::with_capacity(name.len() + 7);
        tagged.push_str("Digest/");
        tagged.push_str(name);
        Self(XxHash64::oneshot(ID_SEED, tagged.as_bytes()))
    }

    /// Wrap a raw identifier value
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for AlgorithmId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
