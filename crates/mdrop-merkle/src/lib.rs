//! # mdrop-merkle — Merkle Commitment Engine
//!
//! Pure, stateless, deterministic construction and verification of the
//! Merkle commitment that identifies a distribution. The engine owns no
//! mutable state; it is a function library over the entry lists it is
//! given.
//!
//! ## Algorithm
//!
//! - Leaf: `keccak256(be32(index) || account || be32(amount))`, the
//!   tightly-packed canonical encoding of one distribution entry.
//! - Node: `keccak256(min(l, r) || max(l, r))` — children are sorted by
//!   byte value before concatenation, so verification needs no left/right
//!   direction flags and sibling order cannot matter.
//! - Leaves are ordered by entry index before construction, making the
//!   root invariant under any permutation of the input list.
//! - A lone node at an odd-length level is promoted unchanged to the next
//!   level (no self-pairing).
//!
//! ## Verifier Contract
//!
//! [`verify()`] is the authoritative membership check. Any component that
//! accepts proofs (the distributor state machine) must call this exact
//! function: the off-chain generator and the verifier share one encoding
//! and one hash, or every proof silently fails.

pub mod entry;
pub mod hash;
pub mod proof;
pub mod tree;

// Re-export primary types for ergonomic imports.
pub use entry::DistributionEntry;
pub use hash::{hash_pair, keccak256};
pub use proof::{verify, MerkleProof};
pub use tree::{generate_proof, MerkleError, MerkleTree};
