//! State-change notifications emitted by the pool controller.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, Liquidity, PairKey};

/// A committed state change.
///
/// Every event carries the operation's resolved amounts in the caller's
/// orientation of the pair.  Events are emitted only after the operation's
/// state and transfers have been committed, so a sink never observes an
/// event for an aborted operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolEvent {
    /// Liquidity was deposited and minted.
    LiquidityAdded {
        /// Pair as addressed by the caller.
        pair: PairKey,
        /// Account that supplied the assets.
        caller: AccountId,
        /// Account credited with the liquidity.
        recipient: AccountId,
        /// Accepted amount of the first asset.
        amount_a: Amount,
        /// Accepted amount of the second asset.
        amount_b: Amount,
        /// Liquidity minted.
        liquidity: Liquidity,
    },
    /// Liquidity was burned and assets paid out.
    LiquidityRemoved {
        /// Pair as addressed by the caller.
        pair: PairKey,
        /// Account whose liquidity was burned.
        caller: AccountId,
        /// Account receiving the payouts.
        recipient: AccountId,
        /// Payout of the first asset.
        amount_a: Amount,
        /// Payout of the second asset.
        amount_b: Amount,
        /// Liquidity burned.
        liquidity: Liquidity,
    },
    /// A swap executed.
    SwapExecuted {
        /// `(asset_in, asset_out)`.
        pair: PairKey,
        /// Account that paid the input.
        caller: AccountId,
        /// Account receiving the output.
        recipient: AccountId,
        /// Input amount.
        amount_in: Amount,
        /// Output amount.
        amount_out: Amount,
    },
}

impl PoolEvent {
    /// Returns the pair the event refers to.
    #[must_use]
    pub const fn pair(&self) -> PairKey {
        match self {
            Self::LiquidityAdded { pair, .. }
            | Self::LiquidityRemoved { pair, .. }
            | Self::SwapExecuted { pair, .. } => *pair,
        }
    }

    /// Returns a short, stable name for the event kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LiquidityAdded { .. } => "liquidity_added",
            Self::LiquidityRemoved { .. } => "liquidity_removed",
            Self::SwapExecuted { .. } => "swap_executed",
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityAdded {
                pair,
                amount_a,
                amount_b,
                liquidity,
                ..
            } => write!(
                f,
                "liquidity_added({pair}: a={amount_a}, b={amount_b}, minted={liquidity})"
            ),
            Self::LiquidityRemoved {
                pair,
                amount_a,
                amount_b,
                liquidity,
                ..
            } => write!(
                f,
                "liquidity_removed({pair}: a={amount_a}, b={amount_b}, burned={liquidity})"
            ),
            Self::SwapExecuted {
                pair,
                amount_in,
                amount_out,
                ..
            } => write!(f, "swap_executed({pair}: in={amount_in}, out={amount_out})"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AssetId;

    fn pair() -> PairKey {
        let Ok(p) = PairKey::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32])) else {
            panic!("distinct assets");
        };
        p
    }

    fn swap_event() -> PoolEvent {
        PoolEvent::SwapExecuted {
            pair: pair(),
            caller: AccountId::from_bytes([3; 32]),
            recipient: AccountId::from_bytes([4; 32]),
            amount_in: Amount::new(100),
            amount_out: Amount::new(362),
        }
    }

    #[test]
    fn kind_and_pair() {
        let e = swap_event();
        assert_eq!(e.kind(), "swap_executed");
        assert_eq!(e.pair(), pair());
    }

    #[test]
    fn serialises_with_kind_tag() {
        let Ok(json) = serde_json::to_value(swap_event()) else {
            panic!("serialize");
        };
        assert_eq!(json["kind"], "swap_executed");
        assert_eq!(json["amount_out"], 362);
    }

    #[test]
    fn display_mentions_amounts() {
        let s = swap_event().to_string();
        assert!(s.contains("in=100"));
        assert!(s.contains("out=362"));
    }
}
