//! Source of the current time for deadline checks.

use std::sync::Arc;

/// Current time in unix seconds.
///
/// Read once when an operation is entered; an operation whose deadline is
/// strictly earlier than this value fails with
/// [`Expired`](crate::error::AmmError::Expired).
pub trait Clock: Send + Sync {
    /// Returns the current time in unix seconds.
    fn now(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> u64 {
        (**self).now()
    }
}
