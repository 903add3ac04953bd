//! Inputs to the pool controller's mutating operations.
//!
//! Requests are plain data.  The controller validates them in a fixed order
//! (deadline, assets, amounts) so the reported error always names the
//! first precondition that failed.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetId, Liquidity};

/// Deposit both assets of a pair and mint liquidity to `recipient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// First asset of the pair.
    pub asset_a: AssetId,
    /// Second asset of the pair.
    pub asset_b: AssetId,
    /// Most the caller is willing to deposit of `asset_a`.
    pub amount_a_desired: Amount,
    /// Most the caller is willing to deposit of `asset_b`.
    pub amount_b_desired: Amount,
    /// Least acceptable accepted amount of `asset_a`.
    pub amount_a_min: Amount,
    /// Least acceptable accepted amount of `asset_b`.
    pub amount_b_min: Amount,
    /// Account credited with the minted liquidity.
    pub recipient: AccountId,
    /// Latest time (unix seconds) at which the operation may execute.
    pub deadline: u64,
}

impl AddLiquidity {
    /// Creates a request with zero minimums.
    ///
    /// Use [`with_minimums`](Self::with_minimums) to add slippage bounds.
    pub const fn new(
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        recipient: AccountId,
        deadline: u64,
    ) -> Self {
        Self {
            asset_a,
            asset_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient,
            deadline,
        }
    }

    /// Sets the slippage bounds.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }
}

/// Burn the caller's liquidity and pay out both assets to `recipient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// First asset of the pair.
    pub asset_a: AssetId,
    /// Second asset of the pair.
    pub asset_b: AssetId,
    /// Liquidity to burn from the caller's balance.
    pub liquidity: Liquidity,
    /// Least acceptable payout of `asset_a`.
    pub amount_a_min: Amount,
    /// Least acceptable payout of `asset_b`.
    pub amount_b_min: Amount,
    /// Account receiving both payouts.
    pub recipient: AccountId,
    /// Latest time (unix seconds) at which the operation may execute.
    pub deadline: u64,
}

impl RemoveLiquidity {
    /// Creates a request with zero minimums.
    pub const fn new(
        asset_a: AssetId,
        asset_b: AssetId,
        liquidity: Liquidity,
        recipient: AccountId,
        deadline: u64,
    ) -> Self {
        Self {
            asset_a,
            asset_b,
            liquidity,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient,
            deadline,
        }
    }

    /// Sets the slippage bounds.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }
}

/// Sell exactly `amount_in` of `route[0]` for at least `amount_out_min` of
/// `route[1]`.
///
/// The route is kept as a vector so that malformed routes reach the
/// controller and are rejected with a precise
/// [`InvalidRoute`](crate::error::AmmError::InvalidRoute).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapExact {
    /// Exact input amount.
    pub amount_in: Amount,
    /// Least acceptable output amount.
    pub amount_out_min: Amount,
    /// `[asset_in, asset_out]`.
    pub route: Vec<AssetId>,
    /// Account receiving the output.
    pub recipient: AccountId,
    /// Latest time (unix seconds) at which the operation may execute.
    pub deadline: u64,
}

impl SwapExact {
    /// Creates a two-hop route request from `asset_in` to `asset_out`.
    pub fn new(
        amount_in: Amount,
        amount_out_min: Amount,
        asset_in: AssetId,
        asset_out: AssetId,
        recipient: AccountId,
        deadline: u64,
    ) -> Self {
        Self {
            amount_in,
            amount_out_min,
            route: vec![asset_in, asset_out],
            recipient,
            deadline,
        }
    }
}
