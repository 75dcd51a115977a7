//! Version-5 (name-based, SHA-1) identifier construction.
//!
//! The pipeline is strictly sequential: serialize the namespace, digest
//! namespace-then-name, patch version/variant metadata into the first 16
//! digest bytes, reassemble. Every step is pure; the only fallible step is
//! argument-presence validation at entry.

use uuid::Uuid;

use crate::bytes::{uuid_from_bytes, uuid_to_bytes};
use crate::errors::{ValidationError, ValidationResult};
use crate::hashing::{digest_concat, HashAlg};

/// Patch version and variant metadata into the 16-byte digest prefix.
///
/// Byte 6: high nibble cleared, then set to `0x50` (version 5).
/// Byte 8: top two bits cleared, then top bit set (IETF variant).
/// All remaining digest bits pass through untouched.
fn set_metadata(bytes: &mut [u8; 16]) {
    bytes[6] &= 0x0f;
    bytes[6] |= 0x50;
    bytes[8] &= 0x3f;
    bytes[8] |= 0x80;
}

/// Derive a version-5 identifier from a namespace and a name.
///
/// Infallible entry point: the types guarantee both arguments are present,
/// and SHA-1 is statically available. A zero-length `name` is valid.
pub fn uuid_v5(namespace: &Uuid, name: &[u8]) -> Uuid {
    let digest = digest_concat(HashAlg::Sha1, &uuid_to_bytes(namespace), name);
    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&digest[..16]);
    set_metadata(&mut prefix);
    uuid_from_bytes(prefix)
}

/// Derive a version-5 identifier, validating argument presence first.
///
/// For callers that may hold either argument as absent. An absent namespace
/// or name fails before any hashing occurs; `Some(&[])` is a valid,
/// zero-length name and produces a deterministic result.
pub fn make_uuid_v5(namespace: Option<&Uuid>, name: Option<&[u8]>) -> ValidationResult<Uuid> {
    let (Some(namespace), Some(name)) = (namespace, name) else {
        return Err(ValidationError::invalid_argument("Invalid parameters"));
    };
    Ok(uuid_v5(namespace, name))
}
