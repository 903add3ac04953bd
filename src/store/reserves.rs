//! Reserve Pair Store.

use std::collections::HashMap;

use crate::domain::{PairKey, Reserves};

/// Current reserves of every pool record, keyed by record key.
///
/// A record that was never written, or that was drained back to zero, reads
/// as [`Reserves::EMPTY`]; empty records are not kept in the map.
#[derive(Debug, Clone, Default)]
pub struct ReserveStore {
    records: HashMap<PairKey, Reserves>,
}

impl ReserveStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves of `key`, or [`Reserves::EMPTY`] if the record is unset.
    #[must_use]
    pub fn get(&self, key: &PairKey) -> Reserves {
        self.records.get(key).copied().unwrap_or(Reserves::EMPTY)
    }

    /// Overwrites the reserves of `key`.
    pub fn set(&mut self, key: PairKey, reserves: Reserves) {
        if reserves.is_empty() {
            self.records.remove(&key);
        } else {
            self.records.insert(key, reserves);
        }
    }

    /// Number of records holding non-zero reserves.
    #[must_use]
    pub fn active_pairs(&self) -> usize {
        self.records.len()
    }
}
