//! Secondary randomness source
//!
//! A deterministic cursor over the modifier bytes attached to a request. The
//! fuzzing driver controls those bytes, so every draw is reproducible from the
//! saved test case. Running out of bytes is not an error: a draw that cannot
//! be satisfied consumes whatever is left and yields zero (or an empty slice),
//! and every later draw does the same.

use arbitrary::Unstructured;
use std::fmt;

/// Byte-stream cursor producing scalars and slices on demand
pub struct Datasource<'a> {
    u: Unstructured<'a>,
}

impl<'a> Datasource<'a> {
    /// Create a datasource over `data`
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            u: Unstructured::new(data),
        }
    }

    /// Bytes not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.u.len()
    }

    /// Whether every byte has been consumed
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.u.is_empty()
    }

    /// Take exactly `N` bytes, or drain the rest and return `None`
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        match self.u.bytes(N) {
            Ok(bytes) => bytes.try_into().ok(),
            Err(_) => {
                self.u = Unstructured::new(&[]);
                None
            }
        }
    }

    /// Draw one byte and test its low bit
    pub fn get_bool(&mut self) -> bool {
        self.u.arbitrary::<bool>().unwrap_or(false)
    }

    /// Draw a `u8`
    pub fn get_u8(&mut self) -> u8 {
        self.u.arbitrary::<u8>().unwrap_or(0)
    }

    /// Draw a little-endian `u16`
    pub fn get_u16(&mut self) -> u16 {
        self.take().map_or(0, u16::from_le_bytes)
    }

    /// Draw a little-endian `u32`
    pub fn get_u32(&mut self) -> u32 {
        self.take().map_or(0, u32::from_le_bytes)
    }

    /// Draw a little-endian `u64`
    pub fn get_u64(&mut self) -> u64 {
        self.take().map_or(0, u64::from_le_bytes)
    }

    /// Draw a length-prefixed slice of at most `max_len` bytes
    ///
    /// The length is a `u32` draw, clamped to `max_len` and to what remains.
    pub fn get_data(&mut self, max_len: usize) -> &'a [u8] {
        let wanted = usize::try_from(self.get_u32()).unwrap_or(usize::MAX);
        let len = wanted.min(max_len).min(self.remaining());
        self.u.bytes(len).unwrap_or_default()
    }
}

impl fmt::Debug for Datasource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Datasource")
            .field("remaining", &self.remaining())
            .finish()
    }
}
