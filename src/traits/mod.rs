//! Collaborator abstractions consumed by the pool controller.
//!
//! The controller is generic over three collaborators: a [`TokenLedger`]
//! that moves assets, a [`Clock`] that supplies the current time, and an
//! [`EventSink`] that receives notifications.  All are resolved statically
//! (`PoolController<L, C, S>`), so no trait objects are involved on the hot
//! path.  Reference implementations live in [`crate::adapters`].

mod clock;
mod event_sink;
mod token_ledger;

pub use clock::Clock;
pub use event_sink::EventSink;
pub use token_ledger::TokenLedger;
