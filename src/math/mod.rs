//! Arithmetic for the constant-product pool.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain newtypes, the wide integer types used for intermediate
//! products, the integer square root, and the pure pricing and share
//! functions the pool controller is built on.
//!
//! Every function here is pure: it takes values and returns a
//! [`Result`](crate::error::Result), and never touches pool state.

mod checked;
mod pricing;
mod shares;
mod sqrt;
mod wide;

pub use checked::CheckedArithmetic;
pub use pricing::{quote, quote_input, quote_output, spot_price, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use shares::{initial_liquidity, proportional_liquidity, redeem_amount};
pub use sqrt::isqrt;
pub use wide::{U256, U512};

pub(crate) use wide::widen_u256;
