//! Algorithm dispatch table
//!
//! Built exactly once, before any request is served, then shared read-only.
//! A registration problem means the build is broken, so it is a hard
//! [`Error`], never folded into the per-request "no result".

use crate::primitive::AlgorithmEntry;
use crate::registry;
use cryptodiff_common::{ensure, AlgorithmId, Error, LoggingTransformer, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Module name used in registration logs
const MODULE: &str = "rustcrypto";

static TABLE: OnceCell<DispatchTable> = OnceCell::new();

/// Lookup from algorithm identifier to its registration record
#[derive(Debug)]
pub struct DispatchTable {
    entries: Vec<AlgorithmEntry>,
    index: HashMap<AlgorithmId, usize>,
}

impl DispatchTable {
    /// Validate `entries` and index them by identifier
    ///
    /// Each entry must have a unique identifier, a non-zero output size, and
    /// an `init` that succeeds with a context natively producing exactly the
    /// declared output size.
    ///
    /// # Errors
    ///
    /// Returns a registration error naming the first offending entry.
    pub fn build(entries: Vec<AlgorithmEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (slot, entry) in entries.iter().enumerate() {
            ensure!(
                entry.output_size > 0,
                registration,
                "{} declares a zero output size",
                entry.name
            );

            let probe = (entry.init)().map_err(|e| {
                Error::with_source(cryptodiff_common::ErrorKind::Registration, e)
                    .context(format!("{} failed to initialize", entry.name))
            })?;
            ensure!(
                probe.output_size() == entry.output_size,
                registration,
                "{} declares {} output bytes but its primitive produces {}",
                entry.name,
                entry.output_size,
                probe.output_size()
            );

            if let Some(previous) = index.insert(entry.id, slot) {
                cryptodiff_common::bail!(
                    registration,
                    "{} reuses identifier {} already taken by {}",
                    entry.name,
                    entry.id,
                    entries[previous].name
                );
            }
        }

        Ok(Self { entries, index })
    }

    /// Registration record for `id`, if registered
    #[must_use]
    pub fn lookup(&self, id: AlgorithmId) -> Option<&AlgorithmEntry> {
        self.index.get(&id).map(|&slot| &self.entries[slot])
    }

    /// Canonical name registered for `id`
    #[must_use]
    pub fn name_of(&self, id: AlgorithmId) -> Option<&'static str> {
        self.lookup(id).map(|e| e.name)
    }

    /// Number of registered algorithms
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmEntry> {
        self.entries.iter()
    }
}

/// Build the process-wide table on first call; later calls return it as is
///
/// # Errors
///
/// Returns a registration error if any digest registration is invalid. The
/// table then stays unbuilt, so every later call fails the same way.
pub fn initialize() -> Result<&'static DispatchTable> {
    TABLE.get_or_try_init(|| {
        let table = DispatchTable::build(registry::digest_entries())?;
        LoggingTransformer::log_registration(MODULE, table.len());
        Ok(table)
    })
}

/// [`initialize`], terminating the process if registration fails
///
/// A half-populated table would make "unsupported algorithm" and
/// "registration bug" indistinguishable, so there is no way to continue.
pub fn initialize_or_abort() -> &'static DispatchTable {
    match initialize() {
        Ok(table) => table,
        Err(e) => {
            LoggingTransformer::log_registration_failure(MODULE, &e);
            std::process::abort()
        }
    }
}

/// The table, if [`initialize`] has already succeeded
#[must_use]
pub fn table() -> Option<&'static DispatchTable> {
    TABLE.get()
}
