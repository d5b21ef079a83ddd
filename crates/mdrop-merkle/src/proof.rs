//! # Membership Proofs and the Authoritative Verifier
//!
//! A `MerkleProof` is the ordered sequence of sibling digests on the path
//! from a leaf to the root. Together with the root it is the only artifact
//! a claimant needs beyond their own `(index, account, amount)`.
//!
//! `verify()` is deliberately a standalone pure function: the distributor
//! state machine calls it as its authoritative membership check, and it
//! returns `bool` rather than an error — a proof that fails to verify is
//! simply invalid, however it is malformed.

use serde::{Deserialize, Serialize};

use crate::hash::hash_pair;

/// An ordered sequence of sibling digests from leaf to root.
///
/// Regenerable at any time from the full entry list; never persisted per
/// claimant. Serializable for transport to claimants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    siblings: Vec<[u8; 32]>,
}

impl MerkleProof {
    /// Wrap a sibling path.
    pub fn new(siblings: Vec<[u8; 32]>) -> Self {
        Self { siblings }
    }

    /// The sibling digests, leaf end first.
    pub fn siblings(&self) -> &[[u8; 32]] {
        &self.siblings
    }

    /// Number of siblings (the proof's path length).
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof is empty (single-leaf tree).
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// The sibling digests rendered as lowercase hex strings.
    pub fn siblings_hex(&self) -> Vec<String> {
        self.siblings.iter().map(hex::encode).collect()
    }
}

/// Verify that `leaf` is a member of the tree committed to by `root`.
///
/// Re-applies the sorted-pair combination over the proof's siblings
/// starting from `leaf`; succeeds iff the final digest equals `root`.
pub fn verify(proof: &MerkleProof, leaf: [u8; 32], root: [u8; 32]) -> bool {
    let mut node = leaf;
    for sibling in &proof.siblings {
        node = hash_pair(&node, sibling);
    }
    node == root
}
