//! How directed pair keys map onto pool records.

use serde::{Deserialize, Serialize};

use crate::domain::PairKey;

/// Policy deciding whether `(A, B)` and `(B, A)` share a pool record.
///
/// # Examples
///
/// ```
/// use pairswap::config::PairOrdering;
/// use pairswap::domain::{AssetId, PairKey};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let ba = PairKey::new(b, a).expect("distinct assets");
///
/// assert_eq!(PairOrdering::Directed.resolve(ba), (ba, false));
/// assert_eq!(PairOrdering::Canonical.resolve(ba), (ba.reversed(), true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairOrdering {
    /// Every directed pair owns an independent record.  Liquidity added to
    /// `(A, B)` is invisible to a swap on `(B, A)`.
    #[default]
    Directed,
    /// Both directions share the record stored under the byte-wise sorted
    /// key; amounts are mapped to and from the caller's orientation.
    Canonical,
}

impl PairOrdering {
    /// Returns the record key for `pair` and whether the caller's
    /// orientation is flipped relative to the record.
    #[must_use]
    pub fn resolve(self, pair: PairKey) -> (PairKey, bool) {
        match self {
            Self::Directed => (pair, false),
            Self::Canonical => pair.canonical(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AssetId;

    fn key(x: u8, y: u8) -> PairKey {
        let Ok(k) = PairKey::new(AssetId::from_bytes([x; 32]), AssetId::from_bytes([y; 32])) else {
            panic!("distinct assets");
        };
        k
    }

    #[test]
    fn directed_keeps_orientation() {
        assert_eq!(PairOrdering::Directed.resolve(key(2, 1)), (key(2, 1), false));
        assert_eq!(PairOrdering::Directed.resolve(key(1, 2)), (key(1, 2), false));
    }

    #[test]
    fn canonical_folds_both_directions() {
        assert_eq!(PairOrdering::Canonical.resolve(key(1, 2)), (key(1, 2), false));
        assert_eq!(PairOrdering::Canonical.resolve(key(2, 1)), (key(1, 2), true));
    }
}
