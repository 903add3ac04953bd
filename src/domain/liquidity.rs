//! Liquidity claims on a pool.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::U256;

/// Units of proportional ownership over a pool's reserves.
///
/// Distinct from [`Amount`](super::Amount): an amount measures one asset,
/// liquidity measures a share of both.  Total supply and depositor balances
/// are 256-bit so that supply growth is never the binding constraint; the
/// reserves themselves are bounded at 128 bits.
///
/// Serialised as a decimal string.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Liquidity;
///
/// let a = Liquidity::from_u128(1_000);
/// let b = Liquidity::from_u128(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::from_u128(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Liquidity(U256);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Creates a new `Liquidity` from a 256-bit value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Creates a new `Liquidity` from a `u128` value.
    pub fn from_u128(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl From<u128> for Liquidity {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Liquidity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Liquidity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_dec_str(&raw)
            .map(Self)
            .map_err(|_| serde::de::Error::custom("liquidity must be a decimal integer"))
    }
}
