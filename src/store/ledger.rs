//! Liquidity Ledger: outstanding supply and depositor balances per record.
//!
//! Updates are split in two steps.  [`LiquidityLedger::plan_mint`] and
//! [`LiquidityLedger::plan_burn`] check every bound and return a
//! [`BalanceUpdate`] without touching the ledger; the controller applies it
//! with [`LiquidityLedger::apply`] only after every other fallible step of
//! the operation has succeeded.

use std::collections::HashMap;

use crate::domain::{AccountId, Liquidity, PairKey};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// New supply and balance for one `(record, account)` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a planned update does nothing until applied"]
pub struct BalanceUpdate {
    pair: PairKey,
    account: AccountId,
    supply: Liquidity,
    balance: Liquidity,
}

impl BalanceUpdate {
    /// Supply of the record after the update.
    pub const fn supply(&self) -> Liquidity {
        self.supply
    }

    /// Balance of the account after the update.
    pub const fn balance(&self) -> Liquidity {
        self.balance
    }
}

/// Total supply per record plus a flat `(record, account)` balance table.
///
/// Holds `sum(balances of record) == supply(record)` for every record as
/// long as it is only changed through planned updates.  Zero balances and
/// zero supplies are removed.
#[derive(Debug, Clone, Default)]
pub struct LiquidityLedger {
    supply: HashMap<PairKey, Liquidity>,
    balances: HashMap<(PairKey, AccountId), Liquidity>,
}

impl LiquidityLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding liquidity of `pair`.
    #[must_use]
    pub fn total_supply(&self, pair: &PairKey) -> Liquidity {
        self.supply.get(pair).copied().unwrap_or(Liquidity::ZERO)
    }

    /// Liquidity held by `account` in `pair`.
    #[must_use]
    pub fn balance_of(&self, pair: &PairKey, account: &AccountId) -> Liquidity {
        self.balances
            .get(&(*pair, *account))
            .copied()
            .unwrap_or(Liquidity::ZERO)
    }

    /// Every non-zero balance of `pair`, sorted by account.
    #[must_use]
    pub fn balances_of_pair(&self, pair: &PairKey) -> Vec<(AccountId, Liquidity)> {
        let mut out: Vec<_> = self
            .balances
            .iter()
            .filter(|((key, _), _)| key == pair)
            .map(|((_, account), balance)| (*account, *balance))
            .collect();
        out.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Plans minting `amount` to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the supply or the balance would
    /// exceed 256 bits.
    pub fn plan_mint(
        &self,
        pair: PairKey,
        account: AccountId,
        amount: Liquidity,
    ) -> Result<BalanceUpdate> {
        let supply = self.total_supply(&pair).safe_add(&amount)?;
        let balance = self.balance_of(&pair, &account).safe_add(&amount)?;
        Ok(BalanceUpdate {
            pair,
            account,
            supply,
            balance,
        })
    }

    /// Plans burning `amount` from `account`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if `account` holds less than
    ///   `amount`.
    /// - [`AmmError::Underflow`] if the supply is below `amount`, which
    ///   means the ledger was corrupted.
    pub fn plan_burn(
        &self,
        pair: PairKey,
        account: AccountId,
        amount: Liquidity,
    ) -> Result<BalanceUpdate> {
        let held = self.balance_of(&pair, &account);
        let balance = held
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance {
                balance: held,
                requested: amount,
            })?;
        let supply = self.total_supply(&pair).safe_sub(&amount)?;
        Ok(BalanceUpdate {
            pair,
            account,
            supply,
            balance,
        })
    }

    /// Writes a planned update.
    pub fn apply(&mut self, update: BalanceUpdate) {
        if update.supply.is_zero() {
            self.supply.remove(&update.pair);
        } else {
            self.supply.insert(update.pair, update.supply);
        }
        let entry = (update.pair, update.account);
        if update.balance.is_zero() {
            self.balances.remove(&entry);
        } else {
            self.balances.insert(entry, update.balance);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AssetId;
    use crate::math::U256;

    fn pair() -> PairKey {
        let Ok(k) = PairKey::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32])) else {
            panic!("distinct assets");
        };
        k
    }

    fn alice() -> AccountId {
        AccountId::from_bytes([0xa1; 32])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xb0; 32])
    }

    fn mint(ledger: &mut LiquidityLedger, account: AccountId, amount: u128) {
        let Ok(update) = ledger.plan_mint(pair(), account, Liquidity::from_u128(amount)) else {
            panic!("mint {amount}");
        };
        ledger.apply(update);
    }

    #[test]
    fn planning_does_not_mutate() {
        let ledger = LiquidityLedger::new();
        let Ok(update) = ledger.plan_mint(pair(), alice(), Liquidity::from_u128(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(update.supply(), Liquidity::from_u128(10));
        assert_eq!(update.balance(), Liquidity::from_u128(10));
        assert!(ledger.total_supply(&pair()).is_zero());
    }

    #[test]
    fn mint_and_burn_keep_sum_equal_to_supply() {
        let mut ledger = LiquidityLedger::new();
        mint(&mut ledger, alice(), 2_000);
        mint(&mut ledger, bob(), 500);

        let Ok(update) = ledger.plan_burn(pair(), alice(), Liquidity::from_u128(700)) else {
            panic!("burn");
        };
        ledger.apply(update);

        let balances = ledger.balances_of_pair(&pair());
        assert_eq!(
            balances,
            vec![
                (alice(), Liquidity::from_u128(1_300)),
                (bob(), Liquidity::from_u128(500)),
            ]
        );
        assert_eq!(ledger.total_supply(&pair()), Liquidity::from_u128(1_800));
    }

    #[test]
    fn zero_entries_are_removed() {
        let mut ledger = LiquidityLedger::new();
        mint(&mut ledger, alice(), 5);
        let Ok(update) = ledger.plan_burn(pair(), alice(), Liquidity::from_u128(5)) else {
            panic!("burn");
        };
        ledger.apply(update);
        assert!(ledger.balances_of_pair(&pair()).is_empty());
        assert!(ledger.total_supply(&pair()).is_zero());
    }

    #[test]
    fn burn_more_than_balance() {
        let mut ledger = LiquidityLedger::new();
        mint(&mut ledger, alice(), 5);
        mint(&mut ledger, bob(), 50);
        assert_eq!(
            ledger.plan_burn(pair(), alice(), Liquidity::from_u128(6)),
            Err(AmmError::InsufficientBalance {
                balance: Liquidity::from_u128(5),
                requested: Liquidity::from_u128(6),
            })
        );
    }

    #[test]
    fn directions_are_separate_records() {
        let mut ledger = LiquidityLedger::new();
        mint(&mut ledger, alice(), 5);
        assert!(ledger.balance_of(&pair().reversed(), &alice()).is_zero());
        assert!(ledger.total_supply(&pair().reversed()).is_zero());
    }

    #[test]
    fn supply_overflow() {
        let mut ledger = LiquidityLedger::new();
        let Ok(update) = ledger.plan_mint(pair(), alice(), Liquidity::new(U256::MAX)) else {
            panic!("mint max");
        };
        ledger.apply(update);
        let Err(AmmError::Overflow(_)) = ledger.plan_mint(pair(), bob(), Liquidity::from_u128(1))
        else {
            panic!("expected Overflow");
        };
    }
}
