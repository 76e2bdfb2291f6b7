//! Plaintext digests for round-trip verification.

use sha2::{Digest, Sha512};

/// SHA-512 digest of `text`, rendered as lowercase hex.
pub fn sign(text: &str) -> String {
    let digest = Sha512::digest(text.as_bytes());
    hex::encode(digest)
}

/// Whether `signature` is the digest of `text`.
pub fn matches(text: &str, signature: &str) -> bool {
    sign(text) == signature
}
