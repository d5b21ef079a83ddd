//! # Tree Construction and Proof Generation
//!
//! Builds the commitment tree bottom-up from a distribution list and walks
//! it to produce membership proofs.
//!
//! ## Determinism
//!
//! Leaves are ordered by entry index before construction. Combined with
//! sorted-pair node hashing, identical entry sets yield the identical root
//! for any permutation of the input list.
//!
//! ## Odd-Node Rule
//!
//! A lone node at an odd-length level is promoted unchanged to the next
//! level. No proof element is emitted at levels where the walked node has
//! no sibling, so single-leaf trees have empty proofs and the leaf equals
//! the root.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::entry::DistributionEntry;
use crate::hash::hash_pair;
use crate::proof::MerkleProof;

/// Errors from tree construction and proof generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// The distribution list cannot form a tree: empty, or duplicate
    /// indices. Fatal — the caller must fix the input.
    #[error("malformed distribution list: {reason}")]
    MalformedInput {
        /// Why the list was rejected.
        reason: String,
    },

    /// A proof was requested for an index absent from the list.
    #[error("no distribution entry with index {index}")]
    IndexNotFound {
        /// The requested index.
        index: u64,
    },
}

/// A fully built commitment tree over a distribution list.
///
/// Holds every level's digests, so repeated proof generation does not
/// rebuild. The tree is immutable once built.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// `layers[0]` is the leaf level in canonical (index-sorted) order;
    /// the last layer holds the single root.
    layers: Vec<Vec<[u8; 32]>>,
    /// Entry index to leaf position in `layers[0]`.
    positions: BTreeMap<u64, usize>,
}

impl MerkleTree {
    /// Build the tree over `entries`.
    ///
    /// Entry order does not matter: leaves are sorted by entry index
    /// internally, and indices need not be contiguous.
    ///
    /// # Errors
    ///
    /// [`MerkleError::MalformedInput`] if `entries` is empty or two
    /// entries share an index.
    pub fn build(entries: &[DistributionEntry]) -> Result<Self, MerkleError> {
        if entries.is_empty() {
            return Err(MerkleError::MalformedInput {
                reason: "empty distribution list".to_string(),
            });
        }

        let mut ordered: Vec<DistributionEntry> = entries.to_vec();
        ordered.sort_by_key(|entry| entry.index);
        for pair in ordered.windows(2) {
            if pair[0].index == pair[1].index {
                return Err(MerkleError::MalformedInput {
                    reason: format!("duplicate index {}", pair[0].index),
                });
            }
        }

        let positions: BTreeMap<u64, usize> = ordered
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.index, pos))
            .collect();

        let leaves: Vec<[u8; 32]> = ordered.iter().map(DistributionEntry::leaf).collect();
        let mut layers = vec![leaves];
        while layers[layers.len() - 1].len() > 1 {
            let current = &layers[layers.len() - 1];
            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(hash_pair(left, right)),
                    // Odd node: promoted unchanged.
                    [lone] => next.push(*lone),
                    _ => unreachable!("chunks(2) yields 1 or 2 elements"),
                }
            }
            layers.push(next);
        }

        Ok(Self { layers, positions })
    }

    /// The 32-byte root committing to the entire entry set.
    pub fn root(&self) -> [u8; 32] {
        self.layers[self.layers.len() - 1][0]
    }

    /// The root rendered as lowercase hex.
    pub fn root_hex(&self) -> String {
        hex::encode(self.root())
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Whether an entry with `index` is committed to by this tree.
    pub fn contains_index(&self, index: u64) -> bool {
        self.positions.contains_key(&index)
    }

    /// Generate the membership proof for the entry with `index`.
    ///
    /// # Errors
    ///
    /// [`MerkleError::IndexNotFound`] if no entry carries `index`.
    pub fn proof(&self, index: u64) -> Result<MerkleProof, MerkleError> {
        let mut pos = *self
            .positions
            .get(&index)
            .ok_or(MerkleError::IndexNotFound { index })?;

        let mut siblings = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = pos ^ 1;
            if sibling < layer.len() {
                siblings.push(layer[sibling]);
            }
            pos /= 2;
        }
        Ok(MerkleProof::new(siblings))
    }
}

/// Build the tree over `entries` and generate the proof for `index` in
/// one call. Convenience for callers that do not retain the tree.
pub fn generate_proof(
    entries: &[DistributionEntry],
    index: u64,
) -> Result<MerkleProof, MerkleError> {
    MerkleTree::build(entries)?.proof(index)
}
