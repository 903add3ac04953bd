//! Pool lifecycle example.
//!
//! Seeds a USDC/WETH pair, trades against it, adds a second depositor,
//! shows a slippage rejection and finally drains the pair.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pairswap=debug cargo run --example pool_lifecycle
//! ```

use pairswap::adapters::{InMemoryTokenLedger, SystemClock, TracingEventSink};
use pairswap::config::{AmmConfig, PairOrdering};
use pairswap::domain::{AccountId, AddLiquidity, Amount, AssetId, RemoveLiquidity, SwapExact};
use pairswap::pools::PoolController;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Constant Product Pair (x · y = k) ===\n");

    // ── 1. Assets and accounts ──────────────────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let alice = AccountId::from_bytes([0xa1; 32]);
    let bob = AccountId::from_bytes([0xb0; 32]);

    let ledger = InMemoryTokenLedger::new();
    for account in [alice, bob] {
        ledger.mint(&usdc, &account, Amount::new(1_000_000))?;
        ledger.mint(&weth, &account, Amount::new(1_000_000))?;
    }

    // ── 2. Controller with canonical pair ordering ──────────────────────
    let config = AmmConfig::default().with_pair_ordering(PairOrdering::Canonical);
    let pool = PoolController::new(config, ledger, SystemClock, TracingEventSink)?;
    let deadline = u64::MAX;

    // ── 3. First deposit sets the price ─────────────────────────────────
    let seeded = pool.add_liquidity(
        &alice,
        AddLiquidity::new(usdc, weth, Amount::new(1_000), Amount::new(4_000), alice, deadline),
    )?;
    println!("Alice deposited {} USDC + {} WETH", seeded.amount_a, seeded.amount_b);
    println!("  Liquidity minted: {}", seeded.liquidity);
    println!("  Spot price (USDC per WETH): {}", pool.spot_price(&usdc, &weth)?);

    // ── 4. Bob sells 100 USDC ───────────────────────────────────────────
    let swap = SwapExact::new(Amount::new(100), Amount::new(350), usdc, weth, bob, deadline);
    let out = pool.swap_exact(&bob, swap)?;
    println!("\nBob swapped: {out}");
    let reserves = pool.reserves(&usdc, &weth)?;
    println!(
        "  Reserves now: {} USDC / {} WETH",
        reserves.reserve_a, reserves.reserve_b
    );

    // ── 5. Bob adds liquidity at the new ratio ──────────────────────────
    let added = pool.add_liquidity(
        &bob,
        AddLiquidity::new(usdc, weth, Amount::new(550), Amount::new(5_000), bob, deadline),
    )?;
    println!(
        "\nBob deposited {} USDC + {} WETH for {} liquidity",
        added.amount_a, added.amount_b, added.liquidity
    );

    // ── 6. A swap with an unreachable minimum is refused ────────────────
    let greedy = SwapExact::new(Amount::new(100), Amount::new(1_000), weth, usdc, bob, deadline);
    match pool.swap_exact(&bob, greedy) {
        Ok(out) => println!("\nUnexpected fill: {out}"),
        Err(e) => println!("\nGreedy swap rejected: {e}"),
    }

    // ── 7. Everyone withdraws ───────────────────────────────────────────
    for (name, account) in [("Alice", alice), ("Bob", bob)] {
        let owned = pool.balance_of(&usdc, &weth, &account)?;
        let removed = pool.remove_liquidity(
            &account,
            RemoveLiquidity::new(usdc, weth, owned, account, deadline),
        )?;
        println!(
            "{name} withdrew {} USDC + {} WETH",
            removed.amount_a, removed.amount_b
        );
    }

    let snapshot = pool.pair_snapshot(&usdc, &weth)?;
    println!("\nFinal snapshot: {}", serde_json::to_string_pretty(&snapshot)?);
    println!(
        "Custody left: {} USDC, {} WETH",
        pool.ledger().custody(&usdc),
        pool.ledger().custody(&weth)
    );

    Ok(())
}
