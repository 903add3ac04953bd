//! Ordered pair of distinct assets.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::AmmError;

/// An ordered pair of distinct assets addressing one pool record.
///
/// Unlike a canonically sorted pair, `(A, B)` and `(B, A)` are different
/// keys.  Whether they share a record is decided by
/// [`PairOrdering`](crate::config::PairOrdering), which uses
/// [`PairKey::canonical`] when pairs are folded together.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AssetId, PairKey};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// let key = PairKey::new(b, a).expect("distinct assets");
/// assert_eq!(key.first(), b);
/// assert_eq!(key.second(), a);
/// assert!(PairKey::new(a, a).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: AssetId,
    second: AssetId,
}

impl PairKey {
    /// Creates a directed pair key.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both assets are equal.
    pub fn new(first: AssetId, second: AssetId) -> Result<Self, AmmError> {
        if first == second {
            return Err(AmmError::IdenticalAssets);
        }
        Ok(Self { first, second })
    }

    /// Returns the first asset (side "A").
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.first
    }

    /// Returns the second asset (side "B").
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.second
    }

    /// Returns the same assets in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Returns the byte-wise sorted key and whether `self` had to be
    /// flipped to obtain it.
    #[must_use]
    pub fn canonical(&self) -> (Self, bool) {
        if self.first < self.second {
            (*self, false)
        } else {
            (self.reversed(), true)
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}
