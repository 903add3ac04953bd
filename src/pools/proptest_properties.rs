//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Quote bound**: `quote_output` never reaches `reserve_out`.
//! 2. **Square root**: `isqrt` is bit-exact over the whole 256-bit range.
//! 3. **Deposit invariant**: deposits never shrink `reserve_a × reserve_b`.
//! 4. **Swap invariant**: swaps strictly grow `reserve_in × reserve_out`.
//! 5. **Ledger conservation**: depositor balances always sum to supply.
//! 6. **Withdrawal bound**: deposit then full withdrawal returns at most
//!    what was deposited, for the first and for later depositors.
//! 7. **Swap reversibility**: a round trip A→B→A loses value.

use proptest::prelude::*;

use super::PoolController;
use crate::adapters::{InMemoryTokenLedger, ManualClock, RecordingEventSink};
use crate::config::{AmmConfig, PairOrdering};
use crate::domain::{
    AccountId, AddLiquidity, Amount, AssetId, Liquidity, RemoveLiquidity, Reserves, SwapExact,
};
use crate::math::{isqrt, quote_output, U256, U512};

type Pool = PoolController<InMemoryTokenLedger, ManualClock, RecordingEventSink>;

const DEADLINE: u64 = 10;
const FUNDING: u128 = 1_000_000_000_000_000_000_000_000;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn account(n: u8) -> AccountId {
    AccountId::from_bytes([n; 32])
}

fn make_pool(accounts: u8, config: AmmConfig) -> Pool {
    let ledger = InMemoryTokenLedger::new();
    for n in 0..accounts {
        for asset in [asset_a(), asset_b()] {
            let Ok(()) = ledger.mint(&asset, &account(n), Amount::new(FUNDING)) else {
                panic!("funding fits");
            };
        }
    }
    let Ok(pool) = PoolController::new(
        config,
        ledger,
        ManualClock::new(0),
        RecordingEventSink::new(),
    ) else {
        panic!("valid config");
    };
    pool
}

fn seeded(ra: u128, rb: u128) -> Pool {
    let pool = make_pool(4, AmmConfig::default());
    let req = AddLiquidity::new(
        asset_a(),
        asset_b(),
        Amount::new(ra),
        Amount::new(rb),
        account(0),
        DEADLINE,
    );
    let Ok(_) = pool.add_liquidity(&account(0), req) else {
        panic!("seed deposit");
    };
    pool
}

fn reserves(pool: &Pool) -> Reserves {
    let Ok(r) = pool.reserves(&asset_a(), &asset_b()) else {
        panic!("reserves view");
    };
    r
}

fn product(r: Reserves) -> U256 {
    U256::from(r.reserve_a.get()) * U256::from(r.reserve_b.get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10^15].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000_000u128
}

/// Deposit or swap sizes in range [1, 10^15].
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000u128
}

fn u256_strategy() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256)
}

#[derive(Debug, Clone)]
enum Op {
    Add { who: u8, a: u128, b: u128 },
    Remove { who: u8, share_bps: u128 },
    Swap { who: u8, a_to_b: bool, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, amount_strategy(), amount_strategy())
            .prop_map(|(who, a, b)| Op::Add { who, a, b }),
        (0u8..4, 1u128..=10_000).prop_map(|(who, share_bps)| Op::Remove { who, share_bps }),
        (0u8..4, any::<bool>(), amount_strategy())
            .prop_map(|(who, a_to_b, amount)| Op::Swap { who, a_to_b, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1 & 2: pure math
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_output_below_reserve(
        amount_in in 1u128..,
        reserve_in in 1u128..,
        reserve_out in 1u128..,
    ) {
        let Ok(out) = quote_output(
            Amount::new(amount_in),
            Amount::new(reserve_in),
            Amount::new(reserve_out),
        ) else {
            return Err(TestCaseError::fail("positive inputs must quote"));
        };
        prop_assert!(out.get() < reserve_out);
    }

    #[test]
    fn prop_isqrt_is_floor_root(n in u256_strategy()) {
        let y = isqrt(n);
        let wide = |v: U256| {
            let mut bytes = [0u8; 32];
            v.to_little_endian(&mut bytes);
            U512::from_little_endian(&bytes)
        };
        let (y, n) = (wide(y), wide(n));
        let next = y + U512::one();
        prop_assert!(y * y <= n, "y^2 above n");
        prop_assert!(next * next > n, "(y+1)^2 not above n");
    }
}

// ---------------------------------------------------------------------------
// Property 3 & 4: constant product never shrinks
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_grows_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let pool = seeded(ra, rb);
        let k_before = product(reserves(&pool));

        let req = AddLiquidity::new(
            asset_a(), asset_b(), Amount::new(da), Amount::new(db), account(1), DEADLINE,
        );
        // capped or overflowing deposits fail; only committed ones matter
        if pool.add_liquidity(&account(1), req).is_err() {
            return Ok(());
        }

        let k_after = product(reserves(&pool));
        prop_assert!(k_after >= k_before);
    }

    #[test]
    fn prop_swap_strictly_grows_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let pool = seeded(ra, rb);
        let k_before = product(reserves(&pool));

        let (asset_in, asset_out) = if a_to_b {
            (asset_a(), asset_b())
        } else {
            (asset_b(), asset_a())
        };
        // Only (A, B) is seeded on a directed pool, so B→A fails and must
        // leave the record untouched.
        let req = SwapExact::new(
            Amount::new(amount), Amount::ZERO, asset_in, asset_out, account(1), DEADLINE,
        );
        let result = pool.swap_exact(&account(1), req);
        let k_after = product(reserves(&pool));

        if result.is_ok() {
            prop_assert!(k_after > k_before, "k did not grow");
        } else {
            prop_assert_eq!(k_after, k_before);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: balances sum to supply
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_balances_sum_to_supply(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..24),
    ) {
        let pool = seeded(ra, rb);

        for op in ops {
            match op {
                Op::Add { who, a, b } => {
                    let req = AddLiquidity::new(
                        asset_a(), asset_b(), Amount::new(a), Amount::new(b), account(who), DEADLINE,
                    );
                    let _ = pool.add_liquidity(&account(who), req);
                }
                Op::Remove { who, share_bps } => {
                    let Ok(held) = pool.balance_of(&asset_a(), &asset_b(), &account(who)) else {
                        return Err(TestCaseError::fail("balance view"));
                    };
                    let burn = held.get() * U256::from(share_bps) / U256::from(10_000u64);
                    let req = RemoveLiquidity::new(
                        asset_a(), asset_b(), Liquidity::new(burn), account(who), DEADLINE,
                    );
                    let _ = pool.remove_liquidity(&account(who), req);
                }
                Op::Swap { who, a_to_b, amount } => {
                    let (i, o) = if a_to_b { (asset_a(), asset_b()) } else { (asset_b(), asset_a()) };
                    let req = SwapExact::new(
                        Amount::new(amount), Amount::ZERO, i, o, account(who), DEADLINE,
                    );
                    let _ = pool.swap_exact(&account(who), req);
                }
            }

            let Ok(snap) = pool.pair_snapshot(&asset_a(), &asset_b()) else {
                return Err(TestCaseError::fail("snapshot view"));
            };
            prop_assert_eq!(snap.balance_sum(), Some(snap.total_supply));
            prop_assert_eq!(snap.total_supply.is_zero(), snap.reserves.is_empty());
            prop_assert!(snap.reserves.is_empty() || snap.reserves.is_active());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6 & 7: no value is created for the user
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_deposit_withdraws_at_most_deposit(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let pool = make_pool(1, AmmConfig::default());
        let req = AddLiquidity::new(
            asset_a(), asset_b(), Amount::new(a), Amount::new(b), account(0), DEADLINE,
        );
        let Ok(added) = pool.add_liquidity(&account(0), req) else {
            return Err(TestCaseError::fail("first deposit"));
        };
        let req = RemoveLiquidity::new(
            asset_a(), asset_b(), added.liquidity, account(0), DEADLINE,
        );
        let Ok(removed) = pool.remove_liquidity(&account(0), req) else {
            return Err(TestCaseError::fail("full withdrawal"));
        };
        prop_assert!(removed.amount_a.get() <= a);
        prop_assert!(removed.amount_b.get() <= b);
        prop_assert_eq!(reserves(&pool), Reserves::EMPTY);
    }

    #[test]
    fn prop_later_deposit_withdraws_at_most_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let pool = seeded(ra, rb);
        let req = AddLiquidity::new(
            asset_a(), asset_b(), Amount::new(da), Amount::new(db), account(1), DEADLINE,
        );
        let Ok(added) = pool.add_liquidity(&account(1), req) else {
            return Ok(());
        };
        let req = RemoveLiquidity::new(
            asset_a(), asset_b(), added.liquidity, account(1), DEADLINE,
        );
        let Ok(removed) = pool.remove_liquidity(&account(1), req) else {
            return Ok(());
        };
        prop_assert!(removed.amount_a <= added.amount_a);
        prop_assert!(removed.amount_b <= added.amount_b);
    }

    #[test]
    fn prop_swap_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let pool = make_pool(2, AmmConfig::default().with_pair_ordering(PairOrdering::Canonical));
        let req = AddLiquidity::new(
            asset_a(), asset_b(), Amount::new(ra), Amount::new(rb), account(0), DEADLINE,
        );
        let Ok(_) = pool.add_liquidity(&account(0), req) else {
            return Err(TestCaseError::fail("seed deposit"));
        };

        // A → B
        let req = SwapExact::new(
            Amount::new(swap_in), Amount::ZERO, asset_a(), asset_b(), account(1), DEADLINE,
        );
        let Ok(there) = pool.swap_exact(&account(1), req) else {
            return Ok(());
        };

        // B → A on the same record
        let req = SwapExact::new(
            there.amount_out, Amount::ZERO, asset_b(), asset_a(), account(1), DEADLINE,
        );
        let Ok(back) = pool.swap_exact(&account(1), req) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out.get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            back.amount_out.get(), swap_in
        );
    }
}
