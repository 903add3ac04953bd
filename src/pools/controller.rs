//! Pool Controller: the only entry point that mutates pool state.
//!
//! Every public operation follows the same shape:
//!
//! 1. enter the [`ReentrancyGuard`] (nested calls fail with
//!    [`AmmError::ReentrantCall`] before any lock is touched);
//! 2. check the deadline, then validate the request;
//! 3. lock the [`PoolBook`] and compute the transition from a consistent
//!    view of reserves and supply;
//! 4. run the token transfers through a [`TransferJournal`];
//! 5. commit reserves and ledger together, commit the journal, release
//!    the lock;
//! 6. emit the [`PoolEvent`].
//!
//! Any failure before step 5 leaves the book untouched, and the journal
//! reverses the transfers that had already completed.
//!
//! # Ordering
//!
//! One lock covers every pair.  A committed operation releases it with a
//! fair unlock, handing it straight to the longest-waiting thread, so
//! contending operations run in the order they queued on the lock.  A
//! rejected operation releases it normally and may let a newcomer barge
//! ahead of the queue.
//!
//! # Orientation
//!
//! Requests, outcomes and events always use the caller's orientation of
//! the pair.  Under [`PairOrdering::Canonical`](crate::config::PairOrdering)
//! the record may be stored the other way round; the controller maps
//! amounts in and out with the `flipped` flag returned by
//! [`PairOrdering::resolve`](crate::config::PairOrdering::resolve).

use parking_lot::{Mutex, MutexGuard};

use super::guard::ReentrancyGuard;
use super::journal::TransferJournal;
use crate::config::AmmConfig;
use crate::domain::{
    AccountId, AddLiquidity, AddLiquidityOutcome, Amount, AssetId, Liquidity, PairKey,
    PairSnapshot, PoolEvent, Price, RemoveLiquidity, RemoveLiquidityOutcome, Reserves,
    SwapExact, SwapOutcome,
};
use crate::error::{AmmError, Result};
use crate::math::{
    self, initial_liquidity, proportional_liquidity, quote, quote_output, redeem_amount,
    CheckedArithmetic,
};
use crate::store::PoolBook;
use crate::traits::{Clock, EventSink, TokenLedger};

/// Orchestrates deposits, withdrawals and swaps over every pair.
///
/// Generic over its collaborators so that each is resolved statically.
/// Every operation takes `&self`; the controller can be shared across
/// threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use pairswap::adapters::{InMemoryTokenLedger, ManualClock, RecordingEventSink};
/// use pairswap::config::AmmConfig;
/// use pairswap::domain::{AccountId, AddLiquidity, Amount, AssetId, SwapExact};
/// use pairswap::pools::PoolController;
///
/// let usd = AssetId::from_bytes([1u8; 32]);
/// let eth = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
///
/// let ledger = InMemoryTokenLedger::new();
/// ledger.mint(&usd, &alice, Amount::new(10_000)).expect("fits");
/// ledger.mint(&eth, &alice, Amount::new(10_000)).expect("fits");
///
/// let pool = PoolController::new(
///     AmmConfig::default(),
///     ledger,
///     ManualClock::new(0),
///     RecordingEventSink::new(),
/// )
/// .expect("valid config");
///
/// let added = pool
///     .add_liquidity(
///         &alice,
///         AddLiquidity::new(usd, eth, Amount::new(1_000), Amount::new(4_000), alice, 60),
///     )
///     .expect("first deposit");
/// assert_eq!(added.liquidity.to_string(), "2000");
///
/// let swapped = pool
///     .swap_exact(&alice, SwapExact::new(Amount::new(100), Amount::ZERO, usd, eth, alice, 60))
///     .expect("swap");
/// assert_eq!(swapped.amount_out, Amount::new(362));
/// ```
pub struct PoolController<L, C, S> {
    config: AmmConfig,
    book: Mutex<PoolBook>,
    guard: ReentrancyGuard,
    ledger: L,
    clock: C,
    sink: S,
}

impl<L, C, S> core::fmt::Debug for PoolController<L, C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PoolController")
            .field("config", &self.config)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

/// Record key, caller pair and orientation of one request.
#[derive(Debug, Clone, Copy)]
struct Route {
    pair: PairKey,
    key: PairKey,
    flipped: bool,
}

impl Route {
    /// Asset stored on the record's first side.
    const fn record_first(&self) -> AssetId {
        self.key.first()
    }

    const fn record_second(&self) -> AssetId {
        self.key.second()
    }
}

/// Swaps a caller-oriented couple into record orientation, or back.
const fn orient(flipped: bool, a: Amount, b: Amount) -> (Amount, Amount) {
    if flipped {
        (b, a)
    } else {
        (a, b)
    }
}

impl<L, C, S> PoolController<L, C, S>
where
    L: TokenLedger,
    C: Clock,
    S: EventSink,
{
    /// Creates a controller with an empty book.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` fails
    /// [`AmmConfig::validate`].
    pub fn new(config: AmmConfig, ledger: L, clock: C, sink: S) -> Result<Self> {
        config.validate()?;
        tracing::debug!(ordering = ?config.pair_ordering, max_reserve = %config.max_reserve, "pool controller created");
        Ok(Self {
            config,
            book: Mutex::new(PoolBook::new()),
            guard: ReentrancyGuard::new(),
            ledger,
            clock,
            sink,
        })
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &AmmConfig {
        &self.config
    }

    /// Returns the token ledger collaborator.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the clock collaborator.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the event sink collaborator.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    // -- mutations ------------------------------------------------------------

    /// Deposits both assets of a pair and mints liquidity to
    /// `request.recipient`.
    ///
    /// The first deposit into an empty record accepts both desired amounts
    /// and mints `floor(sqrt(a × b))`.  Later deposits accept the largest
    /// ratio-matched amounts within the desired ones and mint
    /// `a × supply / reserve_a` (floor).
    ///
    /// Only the accepted amounts are debited from `caller`, never the
    /// desired ones, so no unmatched excess ever sits in pool custody.
    /// The caller's net position is the same as debiting the desired
    /// amounts and refunding the excess.
    ///
    /// # Errors
    ///
    /// In the order they are checked:
    ///
    /// - [`AmmError::ReentrantCall`] when called from inside another
    ///   operation of this controller on the same thread.
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::IdenticalAssets`] if both assets are equal.
    /// - [`AmmError::InvalidAmount`] if a desired amount is zero.
    /// - [`AmmError::SlippageExceeded`] if an accepted amount is below its
    ///   minimum.
    /// - [`AmmError::InvalidAmount`] if an accepted amount or the minted
    ///   liquidity is zero and [`AmmConfig::reject_dust`] is set.
    /// - [`AmmError::Overflow`] if a reserve would exceed `u128` or the
    ///   configured cap, or the supply would exceed 256 bits.
    /// - [`AmmError::TransferFailed`] if a debit is refused.
    pub fn add_liquidity(
        &self,
        caller: &AccountId,
        request: AddLiquidity,
    ) -> Result<AddLiquidityOutcome> {
        let _entered = self.guard.enter()?;
        tracing::debug!(
            %caller,
            asset_a = %request.asset_a,
            asset_b = %request.asset_b,
            amount_a_desired = %request.amount_a_desired,
            amount_b_desired = %request.amount_b_desired,
            "add_liquidity"
        );
        let result = self.try_add_liquidity(caller, &request);
        if let Err(ref error) = result {
            tracing::warn!(%caller, %error, "add_liquidity rejected");
        }
        result
    }

    /// Burns `request.liquidity` from `caller` and pays out both assets to
    /// `request.recipient`, pro rata and rounded down.  A payout may round
    /// to zero; the dust stays in the pool.
    ///
    /// # Errors
    ///
    /// In the order they are checked:
    ///
    /// - [`AmmError::ReentrantCall`], [`AmmError::Expired`],
    ///   [`AmmError::IdenticalAssets`] as for
    ///   [`add_liquidity`](Self::add_liquidity).
    /// - [`AmmError::InvalidAmount`] if `liquidity` is zero.
    /// - [`AmmError::InsufficientBalance`] if `caller` holds less.
    /// - [`AmmError::InvalidAmount`] if either payout rounds to zero and
    ///   [`AmmConfig::reject_dust`] is set.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
    /// - [`AmmError::TransferFailed`] if a credit is refused.
    pub fn remove_liquidity(
        &self,
        caller: &AccountId,
        request: RemoveLiquidity,
    ) -> Result<RemoveLiquidityOutcome> {
        let _entered = self.guard.enter()?;
        tracing::debug!(
            %caller,
            asset_a = %request.asset_a,
            asset_b = %request.asset_b,
            liquidity = %request.liquidity,
            "remove_liquidity"
        );
        let result = self.try_remove_liquidity(caller, &request);
        if let Err(ref error) = result {
            tracing::warn!(%caller, %error, "remove_liquidity rejected");
        }
        result
    }

    /// Sells exactly `request.amount_in` of `route[0]` for `route[1]`.
    ///
    /// The output follows [`math::quote_output`]; the whole input,
    /// fee included, is added to the input reserve.
    ///
    /// # Errors
    ///
    /// In the order they are checked:
    ///
    /// - [`AmmError::ReentrantCall`], [`AmmError::Expired`].
    /// - [`AmmError::InvalidRoute`] unless the route has two assets.
    /// - [`AmmError::IdenticalAssets`] if they are equal.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::ZeroReserves`] if the pair holds no reserves.
    /// - [`AmmError::InvalidAmount`] if the output rounds to zero and
    ///   [`AmmConfig::reject_dust`] is set.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `amount_out_min`.
    /// - [`AmmError::Overflow`] if the input reserve would exceed `u128`
    ///   or the configured cap.
    /// - [`AmmError::TransferFailed`] if the debit or the credit is
    ///   refused.
    pub fn swap_exact(&self, caller: &AccountId, request: SwapExact) -> Result<SwapOutcome> {
        let _entered = self.guard.enter()?;
        tracing::debug!(
            %caller,
            route_len = request.route.len(),
            amount_in = %request.amount_in,
            amount_out_min = %request.amount_out_min,
            "swap_exact"
        );
        let result = self.try_swap_exact(caller, &request);
        if let Err(ref error) = result {
            tracing::warn!(%caller, %error, "swap_exact rejected");
        }
        result
    }

    // -- views ----------------------------------------------------------------

    /// Spot price of `asset_a` in units of `asset_b`, scaled by `10^18`:
    /// `reserve_a × 10^18 / reserve_b`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ReentrantCall`] from inside an operation.
    /// - [`AmmError::IdenticalAssets`] if both assets are equal.
    /// - [`AmmError::ZeroReserves`] if the pair holds no reserves.
    pub fn spot_price(&self, asset_a: &AssetId, asset_b: &AssetId) -> Result<Price> {
        let reserves = self.reserves(asset_a, asset_b)?;
        math::spot_price(reserves.reserve_a, reserves.reserve_b)
    }

    /// Reserves of the pair in the caller's orientation; zero for a pair
    /// that was never seeded.
    ///
    /// # Errors
    ///
    /// [`AmmError::ReentrantCall`] or [`AmmError::IdenticalAssets`].
    pub fn reserves(&self, asset_a: &AssetId, asset_b: &AssetId) -> Result<Reserves> {
        let _entered = self.guard.enter()?;
        let route = self.route(*asset_a, *asset_b)?;
        let book = self.book.lock();
        Ok(book.reserves.get(&route.key).oriented(route.flipped))
    }

    /// Outstanding liquidity of the pair.
    ///
    /// # Errors
    ///
    /// [`AmmError::ReentrantCall`] or [`AmmError::IdenticalAssets`].
    pub fn total_supply(&self, asset_a: &AssetId, asset_b: &AssetId) -> Result<Liquidity> {
        let _entered = self.guard.enter()?;
        let route = self.route(*asset_a, *asset_b)?;
        let book = self.book.lock();
        Ok(book.ledger.total_supply(&route.key))
    }

    /// Liquidity `account` holds in the pair.
    ///
    /// # Errors
    ///
    /// [`AmmError::ReentrantCall`] or [`AmmError::IdenticalAssets`].
    pub fn balance_of(
        &self,
        asset_a: &AssetId,
        asset_b: &AssetId,
        account: &AccountId,
    ) -> Result<Liquidity> {
        let _entered = self.guard.enter()?;
        let route = self.route(*asset_a, *asset_b)?;
        let book = self.book.lock();
        Ok(book.ledger.balance_of(&route.key, account))
    }

    /// Consistent view of reserves, supply and every depositor balance.
    ///
    /// # Errors
    ///
    /// [`AmmError::ReentrantCall`] or [`AmmError::IdenticalAssets`].
    pub fn pair_snapshot(&self, asset_a: &AssetId, asset_b: &AssetId) -> Result<PairSnapshot> {
        let _entered = self.guard.enter()?;
        let route = self.route(*asset_a, *asset_b)?;
        let book = self.book.lock();
        let (reserves, total_supply) = book.state(&route.key);
        Ok(PairSnapshot {
            pair: route.pair,
            reserves: reserves.oriented(route.flipped),
            total_supply,
            balances: book.ledger.balances_of_pair(&route.key),
        })
    }

    // -- internals ------------------------------------------------------------

    fn check_deadline(&self, deadline: u64) -> Result<()> {
        let now = self.clock.now();
        if now > deadline {
            return Err(AmmError::Expired { now, deadline });
        }
        Ok(())
    }

    fn route(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Route> {
        let pair = PairKey::new(asset_a, asset_b)?;
        let (key, flipped) = self.config.pair_ordering.resolve(pair);
        Ok(Route { pair, key, flipped })
    }

    fn grow_reserve(&self, reserve: Amount, amount: Amount) -> Result<Amount> {
        let grown = reserve
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("reserve overflow"))?;
        self.config.check_reserve(grown)?;
        Ok(grown)
    }

    fn try_add_liquidity(
        &self,
        caller: &AccountId,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityOutcome> {
        self.check_deadline(request.deadline)?;
        let route = self.route(request.asset_a, request.asset_b)?;
        if request.amount_a_desired.is_zero() || request.amount_b_desired.is_zero() {
            return Err(AmmError::InvalidAmount("desired amounts must be positive"));
        }

        let (a_desired, b_desired) = orient(
            route.flipped,
            request.amount_a_desired,
            request.amount_b_desired,
        );
        let (a_min, b_min) = orient(route.flipped, request.amount_a_min, request.amount_b_min);

        let mut book = self.book.lock();
        let (reserves, supply) = book.state(&route.key);

        let (amount_a, amount_b, minted) = if supply.is_zero() {
            (a_desired, b_desired, initial_liquidity(a_desired, b_desired))
        } else {
            let (a, b) = matched_amounts(reserves, a_desired, b_desired, a_min, b_min)?;
            (a, b, proportional_liquidity(a, reserves.reserve_a, supply)?)
        };

        check_minimum(amount_a, a_min)?;
        check_minimum(amount_b, b_min)?;
        self.config
            .check_dust(amount_a, "deposit must include both assets")?;
        self.config
            .check_dust(amount_b, "deposit must include both assets")?;
        if self.config.reject_dust && minted.is_zero() {
            return Err(AmmError::InvalidAmount("deposit too small to mint liquidity"));
        }

        let next = Reserves::new(
            self.grow_reserve(reserves.reserve_a, amount_a)?,
            self.grow_reserve(reserves.reserve_b, amount_b)?,
        );
        let update = book
            .ledger
            .plan_mint(route.key, request.recipient, minted)?;

        let mut journal = TransferJournal::new(&self.ledger);
        journal.debit(route.record_first(), *caller, amount_a)?;
        journal.debit(route.record_second(), *caller, amount_b)?;

        book.commit(route.key, next, Some(update));
        journal.commit();
        MutexGuard::unlock_fair(book);

        let (amount_a, amount_b) = orient(route.flipped, amount_a, amount_b);
        tracing::info!(
            pair = %route.pair,
            recipient = %request.recipient,
            %amount_a,
            %amount_b,
            liquidity = %minted,
            "liquidity added"
        );
        self.sink.emit(&PoolEvent::LiquidityAdded {
            pair: route.pair,
            caller: *caller,
            recipient: request.recipient,
            amount_a,
            amount_b,
            liquidity: minted,
        });
        Ok(AddLiquidityOutcome {
            amount_a,
            amount_b,
            liquidity: minted,
        })
    }

    fn try_remove_liquidity(
        &self,
        caller: &AccountId,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityOutcome> {
        self.check_deadline(request.deadline)?;
        let route = self.route(request.asset_a, request.asset_b)?;
        if request.liquidity.is_zero() {
            return Err(AmmError::InvalidAmount("liquidity must be positive"));
        }
        let (a_min, b_min) = orient(route.flipped, request.amount_a_min, request.amount_b_min);

        let mut book = self.book.lock();
        let update = book
            .ledger
            .plan_burn(route.key, *caller, request.liquidity)?;
        let (reserves, supply) = book.state(&route.key);

        let amount_a = redeem_amount(request.liquidity, reserves.reserve_a, supply)?;
        let amount_b = redeem_amount(request.liquidity, reserves.reserve_b, supply)?;
        self.config
            .check_dust(amount_a, "withdrawal too small to pay out")?;
        self.config
            .check_dust(amount_b, "withdrawal too small to pay out")?;
        check_minimum(amount_a, a_min)?;
        check_minimum(amount_b, b_min)?;

        let next = Reserves::new(
            reserves.reserve_a.safe_sub(&amount_a)?,
            reserves.reserve_b.safe_sub(&amount_b)?,
        );

        let mut journal = TransferJournal::new(&self.ledger);
        journal.credit(route.record_first(), request.recipient, amount_a)?;
        journal.credit(route.record_second(), request.recipient, amount_b)?;

        book.commit(route.key, next, Some(update));
        journal.commit();
        MutexGuard::unlock_fair(book);

        let (amount_a, amount_b) = orient(route.flipped, amount_a, amount_b);
        tracing::info!(
            pair = %route.pair,
            recipient = %request.recipient,
            %amount_a,
            %amount_b,
            liquidity = %request.liquidity,
            "liquidity removed"
        );
        self.sink.emit(&PoolEvent::LiquidityRemoved {
            pair: route.pair,
            caller: *caller,
            recipient: request.recipient,
            amount_a,
            amount_b,
            liquidity: request.liquidity,
        });
        Ok(RemoveLiquidityOutcome { amount_a, amount_b })
    }

    fn try_swap_exact(&self, caller: &AccountId, request: &SwapExact) -> Result<SwapOutcome> {
        self.check_deadline(request.deadline)?;
        let [asset_in, asset_out] = request.route[..] else {
            return Err(AmmError::InvalidRoute {
                len: request.route.len(),
            });
        };
        let route = self.route(asset_in, asset_out)?;
        if request.amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("amount_in must be positive"));
        }

        let mut book = self.book.lock();
        // (reserve_in, reserve_out) as seen by the caller
        let reserves = book.reserves.get(&route.key).oriented(route.flipped);
        if !reserves.is_active() {
            return Err(AmmError::ZeroReserves);
        }

        let amount_out = quote_output(request.amount_in, reserves.reserve_a, reserves.reserve_b)?;
        self.config
            .check_dust(amount_out, "swap output rounds to zero")?;
        check_minimum(amount_out, request.amount_out_min)?;

        let next = Reserves::new(
            self.grow_reserve(reserves.reserve_a, request.amount_in)?,
            reserves.reserve_b.safe_sub(&amount_out)?,
        );

        let mut journal = TransferJournal::new(&self.ledger);
        journal.debit(asset_in, *caller, request.amount_in)?;
        journal.credit(asset_out, request.recipient, amount_out)?;

        book.commit(route.key, next.oriented(route.flipped), None);
        journal.commit();
        MutexGuard::unlock_fair(book);

        tracing::info!(
            pair = %route.pair,
            recipient = %request.recipient,
            amount_in = %request.amount_in,
            %amount_out,
            "swap executed"
        );
        self.sink.emit(&PoolEvent::SwapExecuted {
            pair: route.pair,
            caller: *caller,
            recipient: request.recipient,
            amount_in: request.amount_in,
            amount_out,
        });
        Ok(SwapOutcome {
            amount_in: request.amount_in,
            amount_out,
        })
    }
}

fn check_minimum(actual: Amount, minimum: Amount) -> Result<()> {
    if actual < minimum {
        return Err(AmmError::SlippageExceeded { actual, minimum });
    }
    Ok(())
}

/// Largest ratio-matched deposit within the desired amounts.
///
/// Tries to use all of `a_desired`; if the matching `b` would exceed
/// `b_desired`, uses all of `b_desired` instead.
fn matched_amounts(
    reserves: Reserves,
    a_desired: Amount,
    b_desired: Amount,
    a_min: Amount,
    b_min: Amount,
) -> Result<(Amount, Amount)> {
    match quote(a_desired, reserves.reserve_a, reserves.reserve_b) {
        Ok(b_optimal) if b_optimal <= b_desired => {
            check_minimum(b_optimal, b_min)?;
            return Ok((a_desired, b_optimal));
        }
        // an overflowing match is larger than any b_desired
        Ok(_) | Err(AmmError::Overflow(_)) => {}
        Err(other) => return Err(other),
    }
    let a_optimal = quote(b_desired, reserves.reserve_b, reserves.reserve_a)?;
    if a_optimal > a_desired {
        return Err(AmmError::InvalidAmount("matched amount exceeds desired"));
    }
    check_minimum(a_optimal, a_min)?;
    Ok((a_optimal, b_desired))
}
