//! [`EventSink`] implementations.

use parking_lot::Mutex;

use crate::domain::PoolEvent;
use crate::traits::EventSink;

/// Publishes every event as an `info` record on target `pairswap::events`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &PoolEvent) {
        match event {
            PoolEvent::LiquidityAdded {
                pair,
                recipient,
                amount_a,
                amount_b,
                liquidity,
                ..
            } => tracing::info!(
                target: "pairswap::events",
                kind = event.kind(),
                %pair,
                %recipient,
                %amount_a,
                %amount_b,
                %liquidity,
                "pool event"
            ),
            PoolEvent::LiquidityRemoved {
                pair,
                recipient,
                amount_a,
                amount_b,
                liquidity,
                ..
            } => tracing::info!(
                target: "pairswap::events",
                kind = event.kind(),
                %pair,
                %recipient,
                %amount_a,
                %amount_b,
                %liquidity,
                "pool event"
            ),
            PoolEvent::SwapExecuted {
                pair,
                recipient,
                amount_in,
                amount_out,
                ..
            } => tracing::info!(
                target: "pairswap::events",
                kind = event.kind(),
                %pair,
                %recipient,
                %amount_in,
                %amount_out,
                "pool event"
            ),
        }
    }
}

/// Keeps every emitted event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<PoolEvent>>,
}

impl RecordingEventSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.events.lock().clone()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<PoolEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &PoolEvent) {
        self.events.lock().push(event.clone());
    }
}
