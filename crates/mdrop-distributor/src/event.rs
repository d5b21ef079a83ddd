//! # Settlement Records
//!
//! Every successful claim produces a `ClaimRecord`: the externally
//! observable account of what moved. It is a returned value, not a
//! broadcast — callers (and tests) assert on it directly, and embedding
//! systems forward it to whatever audit sink they run.

use mdrop_core::{Address, U256};
use serde::{Deserialize, Serialize};

/// Record of one settled claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// The distribution index that was redeemed.
    pub index: u64,
    /// The recipient account.
    pub account: Address,
    /// Token amount transferred.
    pub amount: U256,
    /// Yield-currency share transferred alongside the tokens.
    pub yield_share: U256,
}
