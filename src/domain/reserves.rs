//! Reserve balances of one pool record.

use serde::{Deserialize, Serialize};

use super::Amount;

/// The two reserve balances of a pool record, in record orientation.
///
/// A record is either uninitialised (both zero) or active (both strictly
/// positive); the controller never commits any other combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserves {
    /// Reserve of the pair's first asset.
    pub reserve_a: Amount,
    /// Reserve of the pair's second asset.
    pub reserve_b: Amount,
}

impl Reserves {
    /// Uninitialised reserves.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
    };

    /// Creates reserves from both sides.
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Returns `true` if both reserves are strictly positive.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
    }

    /// Returns the sides as seen by a caller; `flipped` swaps them.
    pub const fn oriented(&self, flipped: bool) -> Self {
        if flipped {
            Self::new(self.reserve_b, self.reserve_a)
        } else {
            *self
        }
    }
}
