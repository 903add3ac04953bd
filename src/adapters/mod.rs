//! Reference implementations of the collaborator traits.
//!
//! None of these talk to a real chain.  [`InMemoryTokenLedger`] and
//! [`ManualClock`] make the controller fully deterministic in tests;
//! [`SystemClock`] and [`TracingEventSink`] are reasonable defaults for
//! simulations and demos.

mod clock;
mod memory_ledger;
mod sinks;

pub use clock::{ManualClock, SystemClock};
pub use memory_ledger::InMemoryTokenLedger;
pub use sinks::{RecordingEventSink, TracingEventSink};
