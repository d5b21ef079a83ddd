//! # Claim Bitmap
//!
//! Tracks which distribution indices have been redeemed. One bit per
//! index, packed into 64-bit words that grow on demand, so the structure
//! stays small for dense index ranges and costs nothing for indices that
//! were never set.
//!
//! The bitmap only grows during normal operation — an index transitions
//! to claimed exactly once. The crate-internal `unset` exists solely so a
//! failed ledger interaction can roll a claim back before the error
//! surfaces.

use serde::{Deserialize, Serialize};

/// A grow-on-set bitset over distribution indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimBitmap {
    words: Vec<u64>,
}

impl ClaimBitmap {
    /// Create an empty bitmap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `index` has been claimed.
    pub fn is_claimed(&self, index: u64) -> bool {
        let word = (index / 64) as usize;
        let bit = index % 64;
        match self.words.get(word) {
            Some(w) => w & (1u64 << bit) != 0,
            // Bitmap has not grown to this index yet.
            None => false,
        }
    }

    /// Mark `index` as claimed, growing the bitmap if necessary.
    pub fn set_claimed(&mut self, index: u64) {
        let word = (index / 64) as usize;
        let bit = index % 64;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << bit;
    }

    /// Clear `index`. Rollback path only.
    pub(crate) fn unset(&mut self, index: u64) {
        let word = (index / 64) as usize;
        let bit = index % 64;
        if let Some(w) = self.words.get_mut(word) {
            *w &= !(1u64 << bit);
        }
    }

    /// Number of claimed indices.
    pub fn claimed_count(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }
}
