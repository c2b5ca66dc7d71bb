//! Multipart splitting of a cleartext buffer
//!
//! Every incremental API is driven with the same bytes cut at different
//! places. Where the cuts fall is decided by the request's [`Datasource`], so a
//! crashing split can be replayed exactly.
//!
//! Invariant: the parts concatenate to the original buffer, in order, with
//! nothing dropped or duplicated. Parts may be empty; consumers must skip them
//! instead of handing zero-length slices to a primitive.

use crate::datasource::Datasource;

/// Ordered sequence of sub-slices of one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multipart<'a> {
    parts: Vec<&'a [u8]>,
}

impl<'a> Multipart<'a> {
    /// Split `buffer` at boundaries drawn from `ds`
    ///
    /// While the datasource yields `true`, a part of length
    /// `get_u64() % bytes_left` is cut off the front (length zero once nothing
    /// is left). Whatever remains then becomes the final part, so the result
    /// always holds at least one element.
    pub fn split(ds: &mut Datasource<'_>, buffer: &'a [u8]) -> Self {
        let mut parts = Vec::new();
        let mut pos = 0usize;

        while ds.get_bool() {
            let left = buffer.len() - pos;
            let len = if left == 0 {
                0
            } else {
                // left <= usize::MAX so the remainder always fits
                usize::try_from(ds.get_u64() % left as u64).unwrap_or(0)
            };
            parts.push(&buffer[pos..pos + len]);
            pos += len;
        }
        parts.push(&buffer[pos..]);

        tracing::trace!(
            parts = parts.len(),
            total = buffer.len(),
            "Split cleartext into parts"
        );

        Self { parts }
    }

    /// The whole buffer as a single part
    #[must_use]
    pub fn single(buffer: &'a [u8]) -> Self {
        Self {
            parts: vec![buffer],
        }
    }

    /// Split `buffer` into parts of the given lengths, clamped to its bounds
    ///
    /// Any bytes left after the listed lengths form one trailing part.
    #[must_use]
    pub fn from_lengths(buffer: &'a [u8], lengths: &[usize]) -> Self {
        let mut parts = Vec::with_capacity(lengths.len() + 1);
        let mut pos = 0usize;
        for &len in lengths {
            let len = len.min(buffer.len() - pos);
            parts.push(&buffer[pos..pos + len]);
            pos += len;
        }
        if pos < buffer.len() || parts.is_empty() {
            parts.push(&buffer[pos..]);
        }
        Self { parts }
    }

    /// Number of parts, empty ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether there are no parts at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Total number of bytes across all parts
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.parts.iter().map(|p| p.len()).sum()
    }

    /// Iterate over every part, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.parts.iter().copied()
    }

    /// Iterate over the parts that carry at least one byte
    pub fn non_empty(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.iter().filter(|p| !p.is_empty())
    }

    /// Reassemble the original buffer
    #[must_use]
    pub fn concat(&self) -> Vec<u8> {
        self.parts.concat()
    }
}

impl<'a> IntoIterator for Multipart<'a> {
    type Item = &'a [u8];
    type IntoIter = std::vec::IntoIter<&'a [u8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}
