use crate::components::Mac;
use crate::config::ModuleConfig;
use crate::error::{settle, PrimitiveError};
use crate::executor::{MacExecutor, StreamingOperation};
use crate::hash_kind::{with_hash, HashKind};
use crate::operations::HmacOp;

const OPERATION: &str = "OpMAC";

/// Authenticate the request's cleartext with HMAC over the named hash
///
/// Disabled unless [`ModuleConfig::hmac_enabled`] is set; a disabled handler
/// answers `None` for every request.
#[must_use]
pub fn op_hmac(config: &ModuleConfig, op: &HmacOp) -> Option<Mac> {
    if !config.hmac_enabled {
        return settle(OPERATION, &super::label(op.digest_type), Err(PrimitiveError::Disabled));
    }

    let Some(kind) = HashKind::from_id(op.digest_type) else {
        return settle(
            OPERATION,
            &op.digest_type.to_string(),
            Err(PrimitiveError::UnsupportedAlgorithm(op.digest_type)),
        );
    };
    if op.key.is_none() {
        return settle(OPERATION, kind.name(), Err(PrimitiveError::MissingInput("key")));
    }

    with_hash!(kind, H => MacExecutor::<H>::new(kind.name()).run(op))
}
