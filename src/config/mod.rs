//! Controller configuration.
//!
//! [`AmmConfig`] is the declarative blueprint for a
//! [`PoolController`](crate::pools::PoolController); [`PairOrdering`]
//! decides how directed pair keys map onto pool records.

mod amm_config;
mod pair_ordering;

pub use amm_config::AmmConfig;
pub use pair_ordering::PairOrdering;
