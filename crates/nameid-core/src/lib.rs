//! nameid-core
//!
//! Deterministic name-based identifier generation:
//! - version-5 (SHA-1) UUID construction per RFC 4122
//! - big-endian serialization between identifiers and their 16-byte form
//! - a validation-aware entry point, `make_uuid_v5`
//!
//! The crate is pure: no I/O, no clock, no environment reads, no shared
//! state. Identical inputs always produce bit-identical identifiers, and
//! every entry point is safe to call from any number of threads at once.

pub mod bytes;
pub mod errors;
pub mod hashing;
pub mod v5;

pub use crate::errors::{ValidationError, ValidationResult};
pub use crate::v5::{make_uuid_v5, uuid_v5};

pub use uuid::Uuid;

/// Convenience re-exports.
pub mod prelude {
    pub use crate::bytes::{uuid_from_bytes, uuid_to_bytes};
    pub use crate::hashing::{digest_concat, HashAlg};
    pub use crate::v5::{make_uuid_v5, uuid_v5};
    pub use crate::{Uuid, ValidationError, ValidationResult};
}
