//! Pool state: reserves and liquidity claims of every record.
//!
//! The [`ReserveStore`] and the [`LiquidityLedger`] are plain, single-owner
//! data structures.  The controller keeps both inside one [`PoolBook`]
//! behind a single lock, so a reserve change and the matching supply change
//! are always committed together.

mod ledger;
mod reserves;

pub use ledger::{BalanceUpdate, LiquidityLedger};
pub use reserves::ReserveStore;

use crate::domain::{Liquidity, PairKey, Reserves};

/// Everything the controller mutates, as one unit.
#[derive(Debug, Clone, Default)]
pub struct PoolBook {
    /// Reserve Pair Store.
    pub reserves: ReserveStore,
    /// Liquidity Ledger.
    pub ledger: LiquidityLedger,
}

impl PoolBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves and total supply of `key`.
    #[must_use]
    pub fn state(&self, key: &PairKey) -> (Reserves, Liquidity) {
        (self.reserves.get(key), self.ledger.total_supply(key))
    }

    /// Writes new reserves together with a planned ledger update.
    pub fn commit(&mut self, key: PairKey, reserves: Reserves, update: Option<BalanceUpdate>) {
        self.reserves.set(key, reserves);
        if let Some(update) = update {
            self.ledger.apply(update);
        }
    }
}
