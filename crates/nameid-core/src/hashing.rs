//! Digest computation for name-based identifier generation.
//!
//! All digests are:
//! - deterministic
//! - explicitly parameterized
//! - computed with call-local state only
//!
//! No implicit defaults are allowed. Callers must choose algorithms
//! explicitly. The version-5 construction requires SHA-1, so that is the
//! only supported algorithm.

use sha1::{Digest, Sha1};

use crate::errors::{ValidationError, ValidationResult};

/// Digest algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlg {
    Sha1,
}

impl HashAlg {
    /// Look up an algorithm by name.
    ///
    /// This is the only point where "algorithm unavailable" can surface:
    /// the `Sha1` arm of [`digest_concat`] is statically linked and cannot
    /// fail at runtime.
    pub fn from_str(s: &str) -> ValidationResult<Self> {
        match s {
            "sha1" => Ok(HashAlg::Sha1),
            _ => {
                tracing::error!(algorithm = %s, "unsupported digest algorithm");
                Err(ValidationError::algorithm_unavailable("Invalid parameters"))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
        }
    }

    /// Digest output length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
        }
    }
}

/// Hash the namespace bytes followed by the name bytes in one pass.
///
/// The hasher is created per call; no scratch state is shared between
/// invocations, so concurrent callers never observe each other.
pub fn digest_concat(alg: HashAlg, namespace: &[u8], name: &[u8]) -> Vec<u8> {
    match alg {
        HashAlg::Sha1 => {
            let mut h = Sha1::new();
            h.update(namespace);
            h.update(name);
            h.finalize().to_vec()
        }
    }
}
