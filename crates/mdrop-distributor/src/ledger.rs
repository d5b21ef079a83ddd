//! # Asset Ledger Capability
//!
//! The distributor decides *how much* to move and *to whom*; it never owns
//! balance storage. `AssetLedger` is the injected capability that performs
//! the actual movement: `transfer` for the distributed token, and
//! `transfer_value` for the yield currency.
//!
//! `InMemoryLedger` is a self-contained implementation backed by plain
//! maps. It models the distributor's custody as two reserves (token and
//! value) that were funded at creation time, and is what the state-machine
//! tests settle against.

use std::collections::BTreeMap;

use mdrop_core::{Address, U256};
use thiserror::Error;

/// Errors surfaced by an asset ledger implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The custodial reserve cannot cover the requested transfer.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the distributor asked to move.
        requested: U256,
        /// What the reserve actually holds.
        available: U256,
    },

    /// Crediting the recipient would overflow their balance.
    #[error("balance overflow crediting {account}")]
    BalanceOverflow {
        /// The recipient whose balance would overflow.
        account: Address,
    },
}

/// Capability for moving the distributed asset and the yield currency.
///
/// Implementations must be atomic per call: a returned error means the
/// call moved nothing.
pub trait AssetLedger {
    /// Move `amount` of the distributed token from the distributor's
    /// custody to `to`.
    fn transfer(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError>;

    /// Move `amount` of the yield currency from the distributor's custody
    /// to `to`.
    fn transfer_value(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError>;
}

/// Map-backed ledger holding the distributor's custodial reserves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    token_reserve: U256,
    value_reserve: U256,
    token_balances: BTreeMap<Address, U256>,
    value_balances: BTreeMap<Address, U256>,
}

impl InMemoryLedger {
    /// Create a ledger whose custody holds `token_reserve` of the
    /// distributed token and `value_reserve` of the yield currency.
    pub fn new(token_reserve: U256, value_reserve: U256) -> Self {
        Self {
            token_reserve,
            value_reserve,
            token_balances: BTreeMap::new(),
            value_balances: BTreeMap::new(),
        }
    }

    /// Token balance credited to `account` so far.
    pub fn token_balance(&self, account: &Address) -> U256 {
        self.token_balances.get(account).copied().unwrap_or_default()
    }

    /// Yield-currency balance credited to `account` so far.
    pub fn value_balance(&self, account: &Address) -> U256 {
        self.value_balances.get(account).copied().unwrap_or_default()
    }

    /// Remaining token reserve under distributor custody.
    pub fn token_reserve(&self) -> U256 {
        self.token_reserve
    }

    /// Remaining yield-currency reserve under distributor custody.
    pub fn value_reserve(&self) -> U256 {
        self.value_reserve
    }

    fn debit_and_credit(
        reserve: &mut U256,
        balances: &mut BTreeMap<Address, U256>,
        to: &Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let remaining = reserve
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                requested: amount,
                available: *reserve,
            })?;
        let current = balances.get(to).copied().unwrap_or_default();
        let credited = current
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { account: *to })?;
        *reserve = remaining;
        balances.insert(*to, credited);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError> {
        Self::debit_and_credit(&mut self.token_reserve, &mut self.token_balances, to, amount)
    }

    fn transfer_value(&mut self, to: &Address, amount: U256) -> Result<(), LedgerError> {
        Self::debit_and_credit(&mut self.value_reserve, &mut self.value_balances, to, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_transfer_debits_reserve_and_credits_recipient() {
        let mut ledger = InMemoryLedger::new(U256::from(100u64), U256::from(50u64));
        ledger.transfer(&addr(1), U256::from(30u64)).unwrap();
        assert_eq!(ledger.token_reserve(), U256::from(70u64));
        assert_eq!(ledger.token_balance(&addr(1)), U256::from(30u64));
        // The value reserve is untouched.
        assert_eq!(ledger.value_reserve(), U256::from(50u64));
    }

    #[test]
    fn test_transfer_value_is_separate_currency() {
        let mut ledger = InMemoryLedger::new(U256::from(100u64), U256::from(50u64));
        ledger.transfer_value(&addr(1), U256::from(50u64)).unwrap();
        assert_eq!(ledger.value_reserve(), U256::zero());
        assert_eq!(ledger.value_balance(&addr(1)), U256::from(50u64));
        assert_eq!(ledger.token_balance(&addr(1)), U256::zero());
    }

    #[test]
    fn test_insufficient_reserve_moves_nothing() {
        let mut ledger = InMemoryLedger::new(U256::from(10u64), U256::zero());
        let err = ledger.transfer(&addr(1), U256::from(11u64)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                requested: U256::from(11u64),
                available: U256::from(10u64),
            }
        );
        assert_eq!(ledger.token_reserve(), U256::from(10u64));
        assert_eq!(ledger.token_balance(&addr(1)), U256::zero());
    }

    #[test]
    fn test_repeated_credits_accumulate() {
        let mut ledger = InMemoryLedger::new(U256::from(100u64), U256::zero());
        ledger.transfer(&addr(2), U256::from(10u64)).unwrap();
        ledger.transfer(&addr(2), U256::from(15u64)).unwrap();
        assert_eq!(ledger.token_balance(&addr(2)), U256::from(25u64));
    }

    #[test]
    fn test_zero_transfer_is_allowed() {
        let mut ledger = InMemoryLedger::new(U256::zero(), U256::zero());
        ledger.transfer(&addr(3), U256::zero()).unwrap();
        assert_eq!(ledger.token_balance(&addr(3)), U256::zero());
    }
}
