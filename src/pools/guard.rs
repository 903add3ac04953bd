//! Per-thread reentrancy protection for controller operations.
//!
//! Each [`ReentrancyGuard`] gets a process-unique id.  Entering pushes that
//! id onto a thread-local registry and the returned [`Entered`] token pops
//! it on drop.  A second `enter` on the same thread while the id is still
//! registered fails with [`AmmError::ReentrantCall`], which is what a
//! collaborator calling back into its controller observes.  The check
//! happens before any lock is taken, so re-entry can never deadlock.
//!
//! Other threads have their own registry and are unaffected.  A nested
//! call routed through another thread is therefore not detected; it waits
//! on the controller's lock like any concurrent caller.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{AmmError, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static ACTIVE: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
}

/// Rejects nested entry into the same guarded object on one thread.
#[derive(Debug)]
pub struct ReentrancyGuard {
    id: u64,
}

impl Default for ReentrancyGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ReentrancyGuard {
    /// Creates a guard with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Marks the guard as entered on the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ReentrantCall`] if the current thread is already
    /// inside this guard.
    pub fn enter(&self) -> Result<Entered<'_>> {
        ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&self.id) {
                return Err(AmmError::ReentrantCall);
            }
            active.push(self.id);
            Ok(Entered {
                id: self.id,
                _marker: PhantomData,
            })
        })
    }

    /// Returns `true` if the current thread is inside this guard.
    #[must_use]
    pub fn is_entered(&self) -> bool {
        ACTIVE.with(|active| active.borrow().contains(&self.id))
    }
}

/// Proof of entry; leaving the scope releases the guard.
///
/// Not `Send`: it must be dropped on the thread that created it.
#[derive(Debug)]
#[must_use = "the guard is released as soon as this is dropped"]
pub struct Entered<'g> {
    id: u64,
    _marker: PhantomData<(&'g ReentrancyGuard, *const ())>,
}

impl Drop for Entered<'_> {
    fn drop(&mut self) {
        // try_with: the registry may already be gone during thread teardown
        let _ = ACTIVE.try_with(|active| {
            let mut active = active.borrow_mut();
            if let Some(pos) = active.iter().rposition(|id| *id == self.id) {
                active.swap_remove(pos);
            }
        });
    }
}
