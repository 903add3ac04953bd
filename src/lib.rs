//! # pairswap
//!
//! Two-asset constant-product AMM ledger: paired reserves, proportional
//! liquidity claims, and exact-input swaps at a fixed 0.3% fee.
//!
//! Every arithmetic step is exact under fixed precision (reserves are
//! 128-bit, liquidity is 256-bit, products are evaluated in 512 bits),
//! every division floors so rounding always favours the pool, and every
//! operation is one atomic, serialised transition.
//!
//! The ledger never talks to a chain.  Token movement, time and
//! notifications are collaborators supplied by the caller through the
//! [`TokenLedger`](traits::TokenLedger), [`Clock`](traits::Clock) and
//! [`EventSink`](traits::EventSink) traits; [`adapters`] has in-memory
//! implementations.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::adapters::{InMemoryTokenLedger, SystemClock, TracingEventSink};
//! use pairswap::config::AmmConfig;
//! use pairswap::domain::{AccountId, AddLiquidity, Amount, AssetId, SwapExact};
//! use pairswap::pools::PoolController;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//!
//! // 1. Fund an account in the in-memory token ledger
//! let ledger = InMemoryTokenLedger::new();
//! ledger.mint(&usdc, &alice, Amount::new(1_000_000)).expect("fits");
//! ledger.mint(&weth, &alice, Amount::new(1_000_000)).expect("fits");
//!
//! // 2. Build a controller
//! let pool = PoolController::new(AmmConfig::default(), ledger, SystemClock, TracingEventSink)
//!     .expect("valid config");
//!
//! // 3. Seed the USDC/WETH pair
//! let deadline = u64::MAX;
//! let seeded = pool
//!     .add_liquidity(
//!         &alice,
//!         AddLiquidity::new(usdc, weth, Amount::new(1_000), Amount::new(4_000), alice, deadline),
//!     )
//!     .expect("first deposit");
//! assert_eq!(seeded.liquidity.to_string(), "2000");
//!
//! // 4. Sell 100 USDC for at least 360 WETH
//! let swap = SwapExact::new(Amount::new(100), Amount::new(360), usdc, weth, alice, deadline);
//! let out = pool.swap_exact(&alice, swap).expect("swap succeeded");
//! assert_eq!(out.amount_out, Amount::new(362));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  builds requests, owns collaborators
//! └──────┬───────┘
//!        │ add_liquidity / remove_liquidity / swap_exact
//!        ▼
//! ┌──────────────┐
//! │  Controller  │  reentrancy guard, validation, transfer journal, events
//! └──────┬───────┘
//!        │ one lock over the PoolBook
//!        ▼
//! ┌──────────────┐
//! │    Store     │  ReserveStore + LiquidityLedger
//! └──────┬───────┘
//!        │ pure functions
//!        ▼
//! ┌──────────────┐
//! │     Math     │  quote_output, spot_price, isqrt, share math
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`PairKey`](domain::PairKey), requests, outcomes, events |
//! | [`math`] | Wide integers, checked arithmetic, pricing and share formulas |
//! | [`store`] | [`ReserveStore`](store::ReserveStore), [`LiquidityLedger`](store::LiquidityLedger), [`PoolBook`](store::PoolBook) |
//! | [`traits`] | Collaborator abstractions |
//! | [`adapters`] | In-memory and tracing collaborator implementations |
//! | [`config`] | [`AmmConfig`](config::AmmConfig) and [`PairOrdering`](config::PairOrdering) |
//! | [`pools`] | [`PoolController`](pools::PoolController), reentrancy guard, transfer journal |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod store;
pub mod traits;
