//! # Shared Distributor Handle
//!
//! Cheap-to-clone handle wrapping a [`Distributor`] in a `parking_lot`
//! read-write lock. Mutating operations serialize behind the write lock,
//! which is what makes the claim path's check-then-set on the bitmap
//! race-free across threads; reads share the read lock.

use std::sync::Arc;

use parking_lot::RwLock;

use mdrop_core::{Address, Timestamp, U256};
use mdrop_merkle::MerkleProof;

use crate::distributor::{CreateParams, Distributor, DistributorError};
use crate::event::ClaimRecord;
use crate::ledger::AssetLedger;

/// Concurrent handle to one distribution.
pub struct SharedDistributor {
    inner: Arc<RwLock<Distributor>>,
}

impl Clone for SharedDistributor {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedDistributor {
    /// Create a distribution and wrap it for shared use.
    pub fn create(params: CreateParams, now: Timestamp) -> Result<Self, DistributorError> {
        Ok(Self::from_state(Distributor::create(params, now)?))
    }

    /// Wrap an existing aggregate, e.g. one restored from a snapshot.
    pub fn from_state(state: Distributor) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Serialized claim. See [`Distributor::claim`].
    pub fn claim<L: AssetLedger + ?Sized>(
        &self,
        index: u64,
        account: Address,
        amount: U256,
        proof: &MerkleProof,
        now: Timestamp,
        ledger: &mut L,
    ) -> Result<ClaimRecord, DistributorError> {
        self.inner
            .write()
            .claim(index, account, amount, proof, now, ledger)
    }

    /// Serialized accrual update. See [`Distributor::update_yield`].
    pub fn update_yield(&self, now: Timestamp) -> Result<U256, DistributorError> {
        self.inner.write().update_yield(now)
    }

    /// Serialized owner withdrawal. See [`Distributor::withdraw_yield`].
    pub fn withdraw_yield<L: AssetLedger + ?Sized>(
        &self,
        caller: Address,
        now: Timestamp,
        ledger: &mut L,
    ) -> Result<U256, DistributorError> {
        self.inner.write().withdraw_yield(caller, now, ledger)
    }

    /// Share for an allocation at the current accrual level.
    pub fn claimable_yield(&self, amount: U256) -> Result<U256, DistributorError> {
        self.inner.read().claimable_yield(amount)
    }

    /// Whether `index` has been redeemed.
    pub fn is_claimed(&self, index: u64) -> bool {
        self.inner.read().is_claimed(index)
    }

    /// Point-in-time copy of the aggregate, e.g. for persistence.
    pub fn snapshot(&self) -> Distributor {
        self.inner.read().clone()
    }
}
