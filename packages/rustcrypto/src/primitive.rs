//! Primitive contexts and algorithm entries
//!
//! Every digest is registered as an [`AlgorithmEntry`]: a record of three
//! plain function pointers plus the declared output size. The functions share
//! one signature regardless of algorithm; the concrete state lives in a
//! [`Context`] whose variant tags which kind of state it is. Hash functions use
//! the object-safe [`DynDigest`] interface, checksums keep their own small
//! state instead of a generic hash context.

use crate::error::{PrimitiveError, Result};
use cryptodiff_common::AlgorithmId;
use digest::DynDigest;

/// Live primitive state for one request
pub enum Context {
    /// Any RustCrypto hash function
    Hash(Box<dyn DynDigest>),
    /// CRC-32 (IEEE)
    Crc32(crc32fast::Hasher),
    /// Adler-32
    Adler32(adler2::Adler32),
}

impl Context {
    /// Name of the context type, for diagnostics
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Hash(_) => "hash",
            Self::Crc32(_) => "crc32",
            Self::Adler32(_) => "adler32",
        }
    }

    /// Output size the underlying state natively produces
    #[must_use]
    pub fn output_size(&self) -> usize {
        match self {
            Self::Hash(h) => h.output_size(),
            Self::Crc32(_) | Self::Adler32(_) => 4,
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("type", &self.type_name())
            .field("output_size", &self.output_size())
            .finish()
    }
}

/// Create a fresh context
pub type InitFn = fn() -> Result<Context>;
/// Absorb one non-empty part
pub type UpdateFn = fn(&mut Context, &[u8]) -> Result<()>;
/// Consume the context, writing exactly `out.len()` bytes
pub type FinalizeFn = fn(Context, &mut [u8]) -> Result<()>;

/// Immutable registration record for one digest algorithm
#[derive(Clone, Copy)]
pub struct AlgorithmEntry {
    /// Identifier derived from `name`
    pub id: AlgorithmId,
    /// Canonical algorithm name
    pub name: &'static str,
    /// Declared output length in bytes
    pub output_size: usize,
    /// Context constructor
    pub init: InitFn,
    /// Absorbs one part
    pub update: UpdateFn,
    /// Writes the output
    pub finalize: FinalizeFn,
}

impl AlgorithmEntry {
    /// Entry for the algorithm with canonical name `name`
    #[must_use]
    pub fn new(
        name: &'static str,
        output_size: usize,
        init: InitFn,
        update: UpdateFn,
        finalize: FinalizeFn,
    ) -> Self {
        Self {
            id: AlgorithmId::digest(name),
            name,
            output_size,
            init,
            update,
            finalize,
        }
    }

    /// Entry for a RustCrypto hash `D`, using the shared hash update/finalize
    #[must_use]
    pub fn hash<D>(name: &'static str, output_size: usize) -> Self
    where
        D: DynDigest + Default + 'static,
    {
        Self::new(name, output_size, hash_init::<D>, hash_update, hash_finalize)
    }
}

impl std::fmt::Debug for AlgorithmEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("output_size", &self.output_size)
            .finish_non_exhaustive()
    }
}

fn mismatch(expected: &'static str, found: &Context) -> PrimitiveError {
    PrimitiveError::ContextMismatch {
        expected,
        found: found.type_name(),
    }
}

fn check_len(native: usize, out: &[u8]) -> Result<()> {
    if out.len() == native {
        Ok(())
    } else {
        Err(PrimitiveError::OutputSize {
            expected: out.len(),
            actual: native,
        })
    }
}

/// Initialize a hash context for `D`
///
/// # Errors
///
/// Infallible for RustCrypto hashes; the signature matches [`InitFn`].
pub fn hash_init<D>() -> Result<Context>
where
    D: DynDigest + Default + 'static,
{
    Ok(Context::Hash(Box::new(D::default())))
}

/// Absorb `data` into a hash context
///
/// # Errors
///
/// Fails if `ctx` is not a hash context.
pub fn hash_update(ctx: &mut Context, data: &[u8]) -> Result<()> {
    match ctx {
        Context::Hash(h) => {
            h.update(data);
            Ok(())
        }
        other => Err(mismatch("hash", other)),
    }
}

/// Finish a hash context into `out`
///
/// # Errors
///
/// Fails if `ctx` is not a hash context or `out` is not exactly the hash's
/// output size.
pub fn hash_finalize(ctx: Context, out: &mut [u8]) -> Result<()> {
    match ctx {
        Context::Hash(mut h) => {
            let actual = h.output_size();
            h.finalize_into_reset(out).map_err(|_| PrimitiveError::OutputSize {
                expected: out.len(),
                actual,
            })
        }
        other => Err(mismatch("hash", &other)),
    }
}

/// Initialize a CRC-32 context
///
/// # Errors
///
/// Infallible; the signature matches [`InitFn`].
pub fn crc32_init() -> Result<Context> {
    Ok(Context::Crc32(crc32fast::Hasher::new()))
}

/// Absorb `data` into a CRC-32 context
///
/// # Errors
///
/// Fails if `ctx` is not a CRC-32 context.
pub fn crc32_update(ctx: &mut Context, data: &[u8]) -> Result<()> {
    match ctx {
        Context::Crc32(c) => {
            c.update(data);
            Ok(())
        }
        other => Err(mismatch("crc32", other)),
    }
}

/// Finish a CRC-32 context as four big-endian bytes
///
/// # Errors
///
/// Fails on a foreign context or an output buffer that is not 4 bytes.
pub fn crc32_finalize(ctx: Context, out: &mut [u8]) -> Result<()> {
    match ctx {
        Context::Crc32(c) => {
            check_len(4, out)?;
            out.copy_from_slice(&c.finalize().to_be_bytes());
            Ok(())
        }
        other => Err(mismatch("crc32", &other)),
    }
}

/// Initialize an Adler-32 context
///
/// # Errors
///
/// Infallible; the signature matches [`InitFn`].
pub fn adler32_init() -> Result<Context> {
    Ok(Context::Adler32(adler2::Adler32::new()))
}

/// Absorb `data` into an Adler-32 context
///
/// # Errors
///
/// Fails if `ctx` is not an Adler-32 context.
pub fn adler32_update(ctx: &mut Context, data: &[u8]) -> Result<()> {
    match ctx {
        Context::Adler32(a) => {
            a.write_slice(data);
            Ok(())
        }
        other => Err(mismatch("adler32", other)),
    }
}

/// Finish an Adler-32 context as four big-endian bytes
///
/// # Errors
///
/// Fails on a foreign context or an output buffer that is not 4 bytes.
pub fn adler32_finalize(ctx: Context, out: &mut [u8]) -> Result<()> {
    match ctx {
        Context::Adler32(a) => {
            check_len(4, out)?;
            out.copy_from_slice(&a.checksum().to_be_bytes());
            Ok(())
        }
        other => Err(mismatch("adler32", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_context_is_rejected() -> Result<()> {
        let mut ctx = crc32_init()?;
        assert_eq!(
            hash_update(&mut ctx, b"x"),
            Err(PrimitiveError::ContextMismatch {
                expected: "hash",
                found: "crc32"
            })
        );

        let ctx = hash_init::<sha2::Sha256>()?;
        let mut out = [0u8; 4];
        assert!(matches!(
            adler32_finalize(ctx, &mut out),
            Err(PrimitiveError::ContextMismatch { .. })
        ));
        Ok(())
    }

    #[test]
    fn hash_finalize_requires_exact_size() -> Result<()> {
        let ctx = hash_init::<sha2::Sha256>()?;
        let mut out = [0u8; 31];
        assert_eq!(
            hash_finalize(ctx, &mut out),
            Err(PrimitiveError::OutputSize {
                expected: 31,
                actual: 32
            })
        );
        Ok(())
    }

    #[test]
    fn checksums_are_big_endian() -> Result<()> {
        let mut ctx = crc32_init()?;
        crc32_update(&mut ctx, b"123456789")?;
        let mut out = [0u8; 4];
        crc32_finalize(ctx, &mut out)?;
        assert_eq!(out, [0xcb, 0xf4, 0x39, 0x26]);

        let mut ctx = adler32_init()?;
        adler32_update(&mut ctx, b"Wikipedia")?;
        adler32_finalize(ctx, &mut out)?;
        assert_eq!(out, [0x11, 0xe6, 0x03, 0x98]);
        Ok(())
    }
}
