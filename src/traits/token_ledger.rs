//! Token transfer capability consumed by the pool controller.
//!
//! The pool never holds token balances itself: every movement of an asset
//! between an account and the pool goes through a [`TokenLedger`].  The
//! controller debits deposits and swap inputs from the caller and credits
//! payouts and swap outputs to the recipient.
//!
//! # Atomicity
//!
//! A single `debit` or `credit` must either fully succeed or leave the
//! ledger untouched.  The controller composes several transfers into one
//! operation and reverses the completed ones if a later step fails, by
//! issuing the opposite transfer for the same asset, account and amount.

use std::sync::Arc;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::TransferError;

/// Moves assets between accounts and the pool's custody.
///
/// Implementations must be callable from any thread.  A ledger may call
/// back into the controller that invoked it; such a nested call fails with
/// [`ReentrantCall`](crate::error::AmmError::ReentrantCall).
///
/// # Callbacks from other threads
///
/// Reentrancy is tracked per thread.  A `debit` or `credit` runs while the
/// controller holds its book lock, so a callback that hands work to another
/// thread and waits for it to call the same controller deadlocks: the
/// other thread is an ordinary concurrent caller and blocks on the lock.
/// Call back only from the invoking thread, or do not wait for the result.
pub trait TokenLedger: Send + Sync {
    /// Takes `amount` of `asset` from `from` into the pool's custody.
    ///
    /// # Errors
    ///
    /// - [`TransferError::InsufficientFunds`] if `from` cannot cover it.
    /// - [`TransferError::Rejected`] for any other refusal.
    fn debit(&self, asset: &AssetId, from: &AccountId, amount: Amount)
        -> Result<(), TransferError>;

    /// Pays `amount` of `asset` out of the pool's custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Rejected`] if the transfer is refused.
    fn credit(&self, asset: &AssetId, to: &AccountId, amount: Amount) -> Result<(), TransferError>;
}

impl<T: TokenLedger + ?Sized> TokenLedger for Arc<T> {
    fn debit(
        &self,
        asset: &AssetId,
        from: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).debit(asset, from, amount)
    }

    fn credit(&self, asset: &AssetId, to: &AccountId, amount: Amount) -> Result<(), TransferError> {
        (**self).credit(asset, to, amount)
    }
}
