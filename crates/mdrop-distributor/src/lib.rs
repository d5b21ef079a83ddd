//! # mdrop-distributor — Claim and Yield State Machine
//!
//! The stateful half of the mdrop stack. A `Distributor` owns the full
//! distribution aggregate — Merkle root, claim bitmap, supply counters,
//! window timers, and the yield pool — and every mutation flows through
//! its methods.
//!
//! ## Lifecycle
//!
//! ```text
//! per index:      Unclaimed ──claim──▶ Claimed (terminal)
//! distribution:   Active (now < end_time) ──▶ Closed (now ≥ end_time)
//! ```
//!
//! Yield accrues linearly over `[start_time, end_time)` and claimants
//! receive a slice proportional to their allocation at the moment they
//! claim. After `end_time` accrual freezes and the owner may recover
//! whatever remains in the pool.
//!
//! ## Collaborators
//!
//! Balance storage and transfer mechanics are delegated to an injected
//! [`AssetLedger`] capability — the state machine decides how much moves
//! and to whom, never how balances are stored. Membership proofs are
//! checked with `mdrop_merkle::verify`, the same function the proof
//! generator tests against.
//!
//! ## Concurrency
//!
//! `Distributor` methods take `&mut self`; [`SharedDistributor`] wraps the
//! aggregate in a `parking_lot::RwLock` for the single-writer,
//! concurrent-reader model.

pub mod bitmap;
pub mod distributor;
pub mod event;
pub mod ledger;
pub mod shared;

// Re-export primary types for ergonomic imports.
pub use bitmap::ClaimBitmap;
pub use distributor::{
    CreateParams, Distributor, DistributorConfig, DistributorError,
    DEFAULT_DISTRIBUTION_WINDOW_SECS,
};
pub use event::ClaimRecord;
pub use ledger::{AssetLedger, InMemoryLedger, LedgerError};
pub use shared::SharedDistributor;
