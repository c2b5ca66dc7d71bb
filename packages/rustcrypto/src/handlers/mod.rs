//! Operation handlers
//!
//! Each handler checks its preconditions before touching a primitive and
//! reports "no result" as `None`. The cause is logged, never returned.

mod bcrypt;
mod digest;
mod hkdf;
mod hmac;

pub use self::bcrypt::op_kdf_bcrypt;
pub use self::digest::op_digest;
pub use self::hkdf::op_kdf_hkdf;
pub use self::hmac::op_hmac;

use crate::hash_kind::HashKind;
use cryptodiff_common::AlgorithmId;

/// Name to log for `id` in the keyed namespace, or the raw identifier
fn label(id: AlgorithmId) -> String {
    HashKind::from_id(id).map_or_else(|| id.to_string(), |kind| kind.name().to_owned())
}
