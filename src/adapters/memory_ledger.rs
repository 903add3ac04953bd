//! In-memory [`TokenLedger`] for tests, demos and simulation.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;
use crate::traits::TokenLedger;

#[derive(Debug, Default)]
struct Books {
    accounts: HashMap<(AssetId, AccountId), Amount>,
    custody: HashMap<AssetId, Amount>,
}

/// Account balances plus the pool's custody, per asset, behind one lock.
///
/// A debit moves tokens from an account into custody; a credit moves them
/// back out.  Credits beyond what custody holds are rejected, so a pool
/// driven by this ledger can never pay out tokens it was not given.
///
/// # Examples
///
/// ```
/// use pairswap::adapters::InMemoryTokenLedger;
/// use pairswap::domain::{AccountId, Amount, AssetId};
/// use pairswap::traits::TokenLedger;
///
/// let ledger = InMemoryTokenLedger::new();
/// let usd = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([7u8; 32]);
///
/// ledger.mint(&usd, &alice, Amount::new(500)).expect("fits");
/// ledger.debit(&usd, &alice, Amount::new(200)).expect("funded");
/// assert_eq!(ledger.balance(&usd, &alice), Amount::new(300));
/// assert_eq!(ledger.custody(&usd), Amount::new(200));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTokenLedger {
    books: Mutex<Books>,
}

impl InMemoryTokenLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues `amount` of `asset` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Rejected`] if the balance would exceed
    /// `u128`.
    pub fn mint(
        &self,
        asset: &AssetId,
        account: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut books = self.books.lock();
        let entry = books.accounts.entry((*asset, *account)).or_default();
        *entry = entry
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("balance overflow".to_owned()))?;
        Ok(())
    }

    /// Balance of `account` in `asset`.
    #[must_use]
    pub fn balance(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.books
            .lock()
            .accounts
            .get(&(*asset, *account))
            .copied()
            .unwrap_or_default()
    }

    /// Tokens of `asset` currently held in the pool's custody.
    #[must_use]
    pub fn custody(&self, asset: &AssetId) -> Amount {
        self.books
            .lock()
            .custody
            .get(asset)
            .copied()
            .unwrap_or_default()
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn debit(
        &self,
        asset: &AssetId,
        from: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut books = self.books.lock();
        let available = books
            .accounts
            .get(&(*asset, *from))
            .copied()
            .unwrap_or_default();
        let remaining = available
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientFunds {
                available,
                requested: amount,
            })?;
        let held = books.custody.get(asset).copied().unwrap_or_default();
        let held = held
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("custody overflow".to_owned()))?;

        books.custody.insert(*asset, held);
        books.accounts.insert((*asset, *from), remaining);
        Ok(())
    }

    fn credit(&self, asset: &AssetId, to: &AccountId, amount: Amount) -> Result<(), TransferError> {
        let mut books = self.books.lock();
        let held = books.custody.get(asset).copied().unwrap_or_default();
        let held = held
            .checked_sub(&amount)
            .ok_or_else(|| TransferError::Rejected("custody cannot cover credit".to_owned()))?;
        let balance = books
            .accounts
            .get(&(*asset, *to))
            .copied()
            .unwrap_or_default();
        let balance = balance
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("balance overflow".to_owned()))?;

        books.custody.insert(*asset, held);
        books.accounts.insert((*asset, *to), balance);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn usd() -> AssetId {
        AssetId::from_bytes([1; 32])
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([7; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([8; 32])
    }

    #[test]
    fn debit_then_credit_moves_through_custody() {
        let ledger = InMemoryTokenLedger::new();
        let Ok(()) = ledger.mint(&usd(), &alice(), Amount::new(100)) else {
            panic!("mint");
        };
        let Ok(()) = ledger.debit(&usd(), &alice(), Amount::new(60)) else {
            panic!("debit");
        };
        let Ok(()) = ledger.credit(&usd(), &bob(), Amount::new(25)) else {
            panic!("credit");
        };
        assert_eq!(ledger.balance(&usd(), &alice()), Amount::new(40));
        assert_eq!(ledger.balance(&usd(), &bob()), Amount::new(25));
        assert_eq!(ledger.custody(&usd()), Amount::new(35));
    }

    #[test]
    fn debit_beyond_balance_is_refused() {
        let ledger = InMemoryTokenLedger::new();
        let Ok(()) = ledger.mint(&usd(), &alice(), Amount::new(10)) else {
            panic!("mint");
        };
        assert_eq!(
            ledger.debit(&usd(), &alice(), Amount::new(11)),
            Err(TransferError::InsufficientFunds {
                available: Amount::new(10),
                requested: Amount::new(11),
            })
        );
        assert_eq!(ledger.balance(&usd(), &alice()), Amount::new(10));
        assert_eq!(ledger.custody(&usd()), Amount::ZERO);
    }

    #[test]
    fn credit_beyond_custody_is_refused() {
        let ledger = InMemoryTokenLedger::new();
        assert!(matches!(
            ledger.credit(&usd(), &bob(), Amount::new(1)),
            Err(TransferError::Rejected(_))
        ));
        assert_eq!(ledger.balance(&usd(), &bob()), Amount::ZERO);
    }

    #[test]
    fn mint_overflow_is_refused() {
        let ledger = InMemoryTokenLedger::new();
        let Ok(()) = ledger.mint(&usd(), &alice(), Amount::MAX) else {
            panic!("mint");
        };
        assert!(ledger.mint(&usd(), &alice(), Amount::new(1)).is_err());
    }
}
