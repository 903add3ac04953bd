//! Unified error types for the pairswap ledger.
//!
//! Every fallible operation in the crate returns [`AmmError`], so a caller
//! can always tell exactly which precondition failed.  Failures abort the
//! whole operation: no variant is ever returned after partial state has been
//! committed.

use thiserror::Error;

use crate::domain::{Amount, Liquidity};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Error reported by a [`TokenLedger`](crate::traits::TokenLedger)
/// collaborator when it refuses a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The debited account does not hold enough of the asset (or has not
    /// authorised the pool to move it).
    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Balance the account holds.
        available: Amount,
        /// Amount the pool tried to move.
        requested: Amount,
    },
    /// The collaborator rejected the transfer for another reason.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// All failure modes of the pool accounting engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The caller-supplied deadline is earlier than the current time.
    #[error("operation expired: now {now} is past deadline {deadline}")]
    Expired {
        /// Time observed at entry.
        now: u64,
        /// Deadline supplied by the caller.
        deadline: u64,
    },

    /// Both sides of a pair refer to the same asset.
    #[error("pair requires two distinct assets")]
    IdenticalAssets,

    /// An amount is zero or would produce a zero-valued transition.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A swap route did not contain exactly two assets.
    #[error("invalid route: expected 2 assets, got {len}")]
    InvalidRoute {
        /// Number of assets in the supplied route.
        len: usize,
    },

    /// A pricing-engine precondition was violated.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A computed amount fell below the caller's minimum.
    #[error("slippage exceeded: got {actual}, minimum {minimum}")]
    SlippageExceeded {
        /// The amount the pool would have delivered or accepted.
        actual: Amount,
        /// The caller's lower bound.
        minimum: Amount,
    },

    /// The caller tried to burn more liquidity than it owns.
    #[error("insufficient liquidity balance: have {balance}, requested {requested}")]
    InsufficientBalance {
        /// Caller's recorded balance.
        balance: Liquidity,
        /// Liquidity the caller asked to burn.
        requested: Liquidity,
    },

    /// The pair holds no reserves.
    #[error("pair has zero reserves")]
    ZeroReserves,

    /// The token ledger refused a debit or credit.
    #[error("token transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// A guarded operation was entered while another one on the same
    /// controller was still running on this thread.
    #[error("reentrant call into pool controller")]
    ReentrantCall,

    /// A value exceeded its fixed bit width or the configured reserve cap.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A checked subtraction would have gone negative.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A checked division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl AmmError {
    /// Returns `true` for the variants that describe malformed arguments
    /// (zero, identical or mismatched inputs).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::IdenticalAssets
                | Self::InvalidAmount(_)
                | Self::InvalidRoute { .. }
                | Self::InvalidInput(_)
        )
    }
}
