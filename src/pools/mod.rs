//! The pool controller and the machinery that keeps its operations atomic.
//!
//! [`PoolController`] is the public entry point.  [`ReentrancyGuard`]
//! rejects nested calls from collaborator callbacks, and
//! [`TransferJournal`] reverses completed token transfers when a later
//! step of the same operation fails.

mod controller;
mod guard;
mod journal;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use controller::PoolController;
pub use guard::{Entered, ReentrancyGuard};
pub use journal::TransferJournal;
