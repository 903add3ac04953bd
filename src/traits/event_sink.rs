//! Notification sink for committed state changes.

use std::sync::Arc;

use crate::domain::PoolEvent;

/// Receives a [`PoolEvent`] for every committed operation.
///
/// Emission happens after the pool book has been updated and released, so
/// a sink may read controller views from another thread.  It is still
/// called inside the operation's reentrancy scope: calling back into the
/// same controller from `emit` on the same thread fails with
/// [`ReentrantCall`](crate::error::AmmError::ReentrantCall).
///
/// Sinks are infallible; an implementation that can fail must handle the
/// failure itself.
pub trait EventSink: Send + Sync {
    /// Publishes one event.
    fn emit(&self, event: &PoolEvent);
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn emit(&self, event: &PoolEvent) {
        (**self).emit(event);
    }
}
