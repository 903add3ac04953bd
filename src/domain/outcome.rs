//! Resolved results of controller operations.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, Liquidity, PairKey, Reserves};

/// Amounts accepted and liquidity minted by an add-liquidity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidityOutcome {
    /// Accepted (and debited) amount of the first asset.
    pub amount_a: Amount,
    /// Accepted (and debited) amount of the second asset.
    pub amount_b: Amount,
    /// Liquidity minted to the recipient.
    pub liquidity: Liquidity,
}

/// Amounts paid out by a remove-liquidity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidityOutcome {
    /// Payout of the first asset.
    pub amount_a: Amount,
    /// Payout of the second asset.
    pub amount_b: Amount,
}

/// Amounts exchanged by a swap.
///
/// The full `amount_in` stays in the pool; the 0.3% fee is the part of it
/// that did not contribute to `amount_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// Input amount debited from the caller.
    pub amount_in: Amount,
    /// Output amount credited to the recipient.
    pub amount_out: Amount,
}

impl SwapOutcome {
    /// Returns `[amount_in, amount_out]`.
    #[must_use]
    pub const fn amounts(&self) -> [Amount; 2] {
        [self.amount_in, self.amount_out]
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swap(in={}, out={})", self.amount_in, self.amount_out)
    }
}

/// Point-in-time view of one pool record, in the caller's orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSnapshot {
    /// The pair as addressed by the caller.
    pub pair: PairKey,
    /// Current reserves.
    pub reserves: Reserves,
    /// Outstanding liquidity.
    pub total_supply: Liquidity,
    /// Every non-zero depositor balance, sorted by account.
    pub balances: Vec<(AccountId, Liquidity)>,
}

impl PairSnapshot {
    /// Sum of all depositor balances.
    ///
    /// Equals [`total_supply`](Self::total_supply) for every consistent
    /// snapshot; returns `None` only if the sum exceeds 256 bits.
    #[must_use]
    pub fn balance_sum(&self) -> Option<Liquidity> {
        self.balances
            .iter()
            .try_fold(Liquidity::ZERO, |acc, (_, bal)| acc.checked_add(bal))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AssetId;

    #[test]
    fn swap_amounts_pair() {
        let o = SwapOutcome {
            amount_in: Amount::new(100),
            amount_out: Amount::new(362),
        };
        assert_eq!(o.amounts(), [Amount::new(100), Amount::new(362)]);
        assert_eq!(o.to_string(), "Swap(in=100, out=362)");
    }

    #[test]
    fn snapshot_balance_sum() {
        let Ok(pair) = PairKey::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
        else {
            panic!("distinct assets");
        };
        let snap = PairSnapshot {
            pair,
            reserves: Reserves::EMPTY,
            total_supply: Liquidity::from_u128(30),
            balances: vec![
                (AccountId::from_bytes([1; 32]), Liquidity::from_u128(10)),
                (AccountId::from_bytes([2; 32]), Liquidity::from_u128(20)),
            ],
        };
        assert_eq!(snap.balance_sum(), Some(snap.total_supply));
    }
}
