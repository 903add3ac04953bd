//! Fixed-point exchange rate between the two sides of a pair.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::U256;

/// Number of fractional decimal digits carried by a [`Price`].
pub const PRICE_DECIMALS: u32 = 18;

/// Exchange rate `reserve_a / reserve_b` scaled by `10^18`.
///
/// The raw value is a 256-bit integer so that a ratio of two 128-bit
/// reserves never overflows after scaling.  `Display` renders the value
/// with its decimal point; serialisation uses the raw integer as a decimal
/// string.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Price};
/// use pairswap::math::spot_price;
///
/// let price = spot_price(Amount::new(1_000), Amount::new(4_000)).expect("active pair");
/// assert_eq!(price.to_string(), "0.250000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(U256);

impl Price {
    /// The fixed-point scaling constant, `10^18`.
    pub const SCALE: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

    /// A ratio of exactly one.
    pub const ONE: Self = Self(Self::SCALE);

    /// Wraps a raw scaled value.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Returns the integer part of the ratio.
    #[must_use]
    pub fn integer_part(&self) -> U256 {
        self.0 / Self::SCALE
    }

    /// Returns the fractional part in units of `10^-18`.
    #[must_use]
    pub fn fractional_part(&self) -> u64 {
        (self.0 % Self::SCALE).low_u64()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.integer_part(),
            self.fractional_part(),
            width = PRICE_DECIMALS as usize
        )
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_dec_str(&raw)
            .map(Self)
            .map_err(|_| serde::de::Error::custom("price must be a decimal integer"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn one_displays_as_unit() {
        assert_eq!(Price::ONE.to_string(), "1.000000000000000000");
    }

    #[test]
    fn parts() {
        let p = Price::from_raw(U256::from(2_500_000_000_000_000_000u128));
        assert_eq!(p.integer_part(), U256::from(2u8));
        assert_eq!(p.fractional_part(), 500_000_000_000_000_000);
        assert_eq!(p.to_string(), "2.500000000000000000");
    }

    #[test]
    fn ordering_follows_raw_value() {
        let lo = Price::from_raw(U256::from(1u8));
        assert!(lo < Price::ONE);
    }

    #[test]
    fn serde_round_trip() {
        let p = Price::ONE;
        let Ok(json) = serde_json::to_string(&p) else {
            panic!("serialize");
        };
        assert_eq!(json, "\"1000000000000000000\"");
        let Ok(back) = serde_json::from_str::<Price>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, p);
    }
}
