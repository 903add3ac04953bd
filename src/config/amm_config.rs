//! Top-level controller configuration.
//!
//! [`AmmConfig`] holds the few parameters of the pool ledger that are not
//! fixed by the pricing formula: how directed pairs map onto records, an
//! optional cap on any single reserve, and whether dust-sized transitions
//! are refused.  Every field has a default, so an empty TOML document is a
//! valid configuration.
//!
//! ```toml
//! pair_ordering = "canonical"
//! max_reserve = 1000000000000
//! reject_dust = true
//! ```

use serde::{Deserialize, Serialize};

use super::PairOrdering;
use crate::domain::Amount;
use crate::error::AmmError;

/// Configuration of a [`PoolController`](crate::pools::PoolController).
///
/// # Validation
///
/// - `max_reserve` must be non-zero.
///
/// Call [`validate()`](AmmConfig::validate) after building a configuration
/// by hand; [`from_toml_str`](AmmConfig::from_toml_str) and
/// [`PoolController::new`](crate::pools::PoolController::new) validate on
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmmConfig {
    /// Whether `(A, B)` and `(B, A)` share a record.
    pub pair_ordering: PairOrdering,
    /// Largest value any single reserve may reach.  An operation that
    /// would push a reserve past it fails with
    /// [`AmmError::Overflow`].
    pub max_reserve: Amount,
    /// Refuse with [`AmmError::InvalidAmount`] any operation that would
    /// move a zero amount or mint zero liquidity: a deposit side matched
    /// down to zero, a withdrawal payout or swap output floored to zero.
    /// Off by default, where only the caller's minimums guard against
    /// such results.
    pub reject_dust: bool,
}

impl Default for AmmConfig {
    fn default() -> Self {
        Self {
            pair_ordering: PairOrdering::Directed,
            max_reserve: Amount::MAX,
            reject_dust: false,
        }
    }
}

impl AmmConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the document does not
    /// parse or fails [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use pairswap::config::{AmmConfig, PairOrdering};
    ///
    /// let config = AmmConfig::from_toml_str(r#"pair_ordering = "canonical""#)
    ///     .expect("valid toml");
    /// assert_eq!(config.pair_ordering, PairOrdering::Canonical);
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(input)
            .map_err(|e| AmmError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `max_reserve` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.max_reserve.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "max_reserve must be non-zero".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns a copy with a different pair ordering.
    #[must_use]
    pub const fn with_pair_ordering(mut self, pair_ordering: PairOrdering) -> Self {
        self.pair_ordering = pair_ordering;
        self
    }

    /// Returns a copy with a different reserve cap.
    #[must_use]
    pub const fn with_max_reserve(mut self, max_reserve: Amount) -> Self {
        self.max_reserve = max_reserve;
        self
    }

    /// Returns a copy that refuses or accepts dust-sized transitions.
    #[must_use]
    pub const fn with_reject_dust(mut self, reject_dust: bool) -> Self {
        self.reject_dust = reject_dust;
        self
    }

    /// Fails with [`AmmError::InvalidAmount`] if dust is refused and
    /// `amount` is zero.
    pub(crate) fn check_dust(&self, amount: Amount, what: &'static str) -> Result<(), AmmError> {
        if self.reject_dust && amount.is_zero() {
            return Err(AmmError::InvalidAmount(what));
        }
        Ok(())
    }

    /// Fails with [`AmmError::Overflow`] if `reserve` is above the cap.
    pub(crate) fn check_reserve(&self, reserve: Amount) -> Result<(), AmmError> {
        if reserve > self.max_reserve {
            return Err(AmmError::Overflow("reserve exceeds configured cap"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_directed_and_uncapped() {
        let config = AmmConfig::default();
        assert_eq!(config.pair_ordering, PairOrdering::Directed);
        assert_eq!(config.max_reserve, Amount::MAX);
        assert!(!config.reject_dust);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        let Ok(config) = AmmConfig::from_toml_str("") else {
            panic!("expected Ok");
        };
        assert_eq!(config, AmmConfig::default());
    }

    #[test]
    fn full_toml() {
        let input = r#"
            pair_ordering = "canonical"
            max_reserve = 5000
            reject_dust = true
        "#;
        let Ok(config) = AmmConfig::from_toml_str(input) else {
            panic!("expected Ok");
        };
        assert_eq!(config.pair_ordering, PairOrdering::Canonical);
        assert_eq!(config.max_reserve, Amount::new(5_000));
        assert!(config.reject_dust);
    }

    #[test]
    fn unknown_key_rejected() {
        let Err(AmmError::InvalidConfiguration(_)) = AmmConfig::from_toml_str("fee_bps = 30")
        else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn bad_ordering_rejected() {
        assert!(AmmConfig::from_toml_str(r#"pair_ordering = "sorted""#).is_err());
    }

    #[test]
    fn zero_cap_rejected() {
        let Err(AmmError::InvalidConfiguration(_)) = AmmConfig::from_toml_str("max_reserve = 0")
        else {
            panic!("expected InvalidConfiguration");
        };
        assert!(AmmConfig::default()
            .with_max_reserve(Amount::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn builders_and_cap_check() {
        let config = AmmConfig::default()
            .with_pair_ordering(PairOrdering::Canonical)
            .with_max_reserve(Amount::new(10));
        assert_eq!(config.pair_ordering, PairOrdering::Canonical);
        assert!(config.check_reserve(Amount::new(10)).is_ok());
        assert_eq!(
            config.check_reserve(Amount::new(11)),
            Err(AmmError::Overflow("reserve exceeds configured cap"))
        );
    }

    #[test]
    fn dust_check_follows_flag() {
        let lenient = AmmConfig::default();
        assert!(lenient.check_dust(Amount::ZERO, "zero").is_ok());

        let strict = lenient.with_reject_dust(true);
        assert_eq!(
            strict.check_dust(Amount::ZERO, "zero"),
            Err(AmmError::InvalidAmount("zero"))
        );
        assert!(strict.check_dust(Amount::new(1), "zero").is_ok());
    }
}
