//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, AddLiquidity, AddLiquidityOutcome, Amount, AssetId, Liquidity, PairKey,
    PairSnapshot, PoolEvent, Price, RemoveLiquidity, RemoveLiquidityOutcome, Reserves, SwapExact,
    SwapOutcome,
};

pub use crate::traits::{Clock, EventSink, TokenLedger};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{AmmConfig, PairOrdering};

pub use crate::error::{AmmError, Result, TransferError};

pub use crate::pools::PoolController;
