//! # Distribution Entries and Leaf Encoding
//!
//! A `DistributionEntry` is one row of the operator's distribution list:
//! `(index, account, amount)`. The entry's canonical encoding — and nothing
//! else — determines its leaf, so proof validity is decoupled from where
//! the entry happens to sit in the list.
//!
//! ## Encoding
//!
//! Tightly packed, fixed width, 84 bytes total:
//!
//! ```text
//! be32(index) || account || be32(amount)
//!   32 bytes    20 bytes    32 bytes
//! ```
//!
//! where `be32(x)` is the 32-byte big-endian encoding. This is
//! byte-identical to `solidityPack(["uint256", "address", "uint256"])`, so
//! roots interoperate with EVM-side encoders of the same layout.

use mdrop_core::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::hash::keccak256;

/// Packed width of one encoded entry: 32 + 20 + 32.
const PACKED_LEN: usize = 84;

/// One row of a distribution list.
///
/// Immutable once a tree is built over it; the ordered entry list is the
/// source of truth from which leaves and proofs are recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Explicit entry index. Part of the leaf encoding; need not equal the
    /// entry's position in the supplied list.
    pub index: u64,
    /// Recipient account.
    pub account: Address,
    /// Allocation amount.
    pub amount: U256,
}

impl DistributionEntry {
    /// Construct an entry.
    pub fn new(index: u64, account: Address, amount: U256) -> Self {
        Self {
            index,
            account,
            amount,
        }
    }

    /// Compute this entry's leaf: Keccak-256 of the canonical packed encoding.
    pub fn leaf(&self) -> [u8; 32] {
        let mut packed = [0u8; PACKED_LEN];
        U256::from(self.index).to_big_endian(&mut packed[..32]);
        packed[32..52].copy_from_slice(self.account.as_bytes());
        self.amount.to_big_endian(&mut packed[52..]);
        keccak256(&packed)
    }
}
