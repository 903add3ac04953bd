//! Integer square root.

use super::U256;

/// Floor of the square root of `n`, by Newton's method.
///
/// Returns the unique `y` with `y * y <= n < (y + 1) * (y + 1)`.  The
/// iteration starts at `ceil(n / 2)` and decreases monotonically until it
/// stops improving; every intermediate stays below `2^256`.
///
/// Used only to size the first deposit into an empty pool.
///
/// # Examples
///
/// ```
/// use pairswap::math::{isqrt, U256};
///
/// assert_eq!(isqrt(U256::from(4_000_000u64)), U256::from(2_000u64));
/// assert_eq!(isqrt(U256::from(15u64)), U256::from(3u64));
/// ```
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    let mut x = n;
    // ceil(n / 2) without the overflow of n + 1
    let mut y = (n >> 1u32) + (n & U256::one());
    while y < x {
        x = y;
        y = (x + n / x) >> 1u32;
    }
    x
}
