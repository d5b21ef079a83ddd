//! # Keccak-256 Hashing
//!
//! The two hash operations the commitment engine is built from: raw
//! Keccak-256 over packed bytes, and the sorted-pair combination used for
//! internal nodes. Sorting the pair before hashing is what makes proof
//! verification order-independent.

use sha3::{Digest, Keccak256};

/// Compute Keccak-256 of raw bytes.
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let digest = Keccak256::digest(bytes);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Combine two node digests into their parent: `keccak256(min || max)`.
///
/// The pair is sorted by byte value before concatenation, so
/// `hash_pair(a, b) == hash_pair(b, a)`.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let digest = Keccak256::new().chain_update(lo).chain_update(hi).finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
