//! All-or-nothing grouping of token transfers.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::Result;
use crate::traits::TokenLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Copy)]
struct Transfer {
    direction: Direction,
    asset: AssetId,
    account: AccountId,
    amount: Amount,
}

/// Records completed transfers and reverses them unless committed.
///
/// Dropping an uncommitted journal issues the opposite transfer for every
/// recorded entry, newest first: a debit is paid back with a credit and a
/// credit is taken back with a debit.  A reversal the ledger refuses is
/// logged at `error` level and skipped.
#[must_use = "an uncommitted journal rolls back on drop"]
pub struct TransferJournal<'l, L: TokenLedger> {
    ledger: &'l L,
    done: Vec<Transfer>,
}

impl<'l, L: TokenLedger> TransferJournal<'l, L> {
    /// Starts an empty journal over `ledger`.
    pub fn new(ledger: &'l L) -> Self {
        Self {
            ledger,
            done: Vec::with_capacity(2),
        }
    }

    /// Debits `amount` of `asset` from `from` and records it.
    ///
    /// # Errors
    ///
    /// Returns [`TransferFailed`](crate::error::AmmError::TransferFailed)
    /// if the ledger refuses; nothing is recorded in that case.
    pub fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<()> {
        self.ledger.debit(&asset, &from, amount)?;
        self.done.push(Transfer {
            direction: Direction::Debit,
            asset,
            account: from,
            amount,
        });
        Ok(())
    }

    /// Credits `amount` of `asset` to `to` and records it.
    ///
    /// # Errors
    ///
    /// Returns [`TransferFailed`](crate::error::AmmError::TransferFailed)
    /// if the ledger refuses; nothing is recorded in that case.
    pub fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<()> {
        self.ledger.credit(&asset, &to, amount)?;
        self.done.push(Transfer {
            direction: Direction::Credit,
            asset,
            account: to,
            amount,
        });
        Ok(())
    }

    /// Number of transfers recorded so far.
    pub fn len(&self) -> usize {
        self.done.len()
    }

    /// Returns `true` if no transfer has completed.
    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Keeps every recorded transfer.
    pub fn commit(mut self) {
        self.done.clear();
    }
}

impl<L: TokenLedger> Drop for TransferJournal<'_, L> {
    fn drop(&mut self) {
        while let Some(t) = self.done.pop() {
            let reversed = match t.direction {
                Direction::Debit => self.ledger.credit(&t.asset, &t.account, t.amount),
                Direction::Credit => self.ledger.debit(&t.asset, &t.account, t.amount),
            };
            if let Err(error) = reversed {
                tracing::error!(
                    asset = %t.asset,
                    account = %t.account,
                    amount = %t.amount,
                    direction = ?t.direction,
                    %error,
                    "failed to reverse transfer"
                );
            }
        }
    }
}
