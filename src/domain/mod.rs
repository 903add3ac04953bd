//! Fundamental domain value types used throughout the pool ledger.
//!
//! This module contains the value types that model the AMM domain:
//! identifiers, amounts, liquidity claims, pair keys, prices, and the
//! requests, outcomes and events of controller operations.  Newtypes with
//! validated constructors enforce invariants where one exists.

mod address;
mod amount;
mod event;
mod liquidity;
mod outcome;
mod pair_key;
mod price;
mod request;
mod reserves;

pub use address::{AccountId, AssetId};
pub use amount::Amount;
pub use event::PoolEvent;
pub use liquidity::Liquidity;
pub use outcome::{AddLiquidityOutcome, PairSnapshot, RemoveLiquidityOutcome, SwapOutcome};
pub use pair_key::PairKey;
pub use price::{Price, PRICE_DECIMALS};
pub use request::{AddLiquidity, RemoveLiquidity, SwapExact};
pub use reserves::Reserves;
