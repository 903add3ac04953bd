//! Liquidity share arithmetic.
//!
//! Minting and burning are proportional to the pool's reserves.  Every
//! division floors, so rounding always favours the pool over the provider.

use super::isqrt;
use super::wide::{div_floor, mul, narrow_u128, narrow_u256, wide, widen_u256, U256};
use crate::domain::{Amount, Liquidity};
use crate::error::{AmmError, Result};

/// Liquidity minted by the first deposit into an empty pool:
/// `floor(sqrt(amount_a × amount_b))`.
///
/// The product of two 128-bit amounts always fits in 256 bits.
#[must_use]
pub fn initial_liquidity(amount_a: Amount, amount_b: Amount) -> Liquidity {
    let product = U256::from(amount_a.get()) * U256::from(amount_b.get());
    Liquidity::new(isqrt(product))
}

/// Liquidity minted for a deposit into an active pool:
/// `amount_a × supply / reserve_a` (floor).
///
/// The deposit is already ratio-matched, so the first side alone sets the
/// share.
///
/// # Errors
///
/// - [`AmmError::ZeroReserves`] if `reserve_a` is zero.
/// - [`AmmError::Overflow`] if the share does not fit in 256 bits.
pub fn proportional_liquidity(
    amount_a: Amount,
    reserve_a: Amount,
    supply: Liquidity,
) -> Result<Liquidity> {
    if reserve_a.is_zero() {
        return Err(AmmError::ZeroReserves);
    }
    share_of(amount_a, reserve_a, supply)
}

/// Payout of one asset for burning `liquidity`:
/// `liquidity × reserve / supply` (floor).
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `supply` is zero.
/// - [`AmmError::Overflow`] if the payout does not fit in 128 bits, which
///   can only happen when `liquidity` exceeds `supply`.
pub fn redeem_amount(liquidity: Liquidity, reserve: Amount, supply: Liquidity) -> Result<Amount> {
    let numerator = mul(
        widen_u256(liquidity.get()),
        wide(reserve.get()),
        "redeem numerator overflow",
    )?;
    let payout = div_floor(numerator, widen_u256(supply.get()))?;
    narrow_u128(payout, "payout exceeds 128 bits").map(Amount::new)
}

fn share_of(amount: Amount, reserve: Amount, supply: Liquidity) -> Result<Liquidity> {
    let numerator = mul(
        wide(amount.get()),
        widen_u256(supply.get()),
        "share numerator overflow",
    )?;
    let share = div_floor(numerator, wide(reserve.get()))?;
    narrow_u256(share, "minted liquidity exceeds 256 bits").map(Liquidity::new)
}
