//! Swap pricing for the constant-product curve.
//!
//! The pool charges a fixed 0.3% fee on every input:
//!
//! ```text
//! net        = amount_in × 997
//! amount_out = net × reserve_out / (reserve_in × 1000 + net)      (floor)
//! ```
//!
//! The whole `amount_in` is added to the input reserve, so the fee stays in
//! the pool and `reserve_in × reserve_out` strictly grows with every swap.
//! Products are evaluated in 512 bits; nothing here can silently truncate.

use super::wide::{add, div_floor, mul, narrow_u128, narrow_u256, wide};
use crate::domain::{Amount, Price};
use crate::error::{AmmError, Result};

/// Fee-adjusted share of the input that reaches the curve, in thousandths.
pub const FEE_NUMERATOR: u128 = 997;

/// Denominator of [`FEE_NUMERATOR`].
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Output of an exact-input swap.
///
/// The result is always strictly less than `reserve_out`, so no single
/// swap can drain a pool.
///
/// # Errors
///
/// - [`AmmError::InvalidInput`] if `amount_in` or either reserve is zero.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::math::quote_output;
///
/// let out = quote_output(Amount::new(100), Amount::new(1_000), Amount::new(4_000));
/// assert_eq!(out, Ok(Amount::new(362)));
/// ```
pub fn quote_output(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidInput("amount_in must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidInput("reserves must be positive"));
    }

    let net = mul(wide(amount_in.get()), wide(FEE_NUMERATOR), "net input overflow")?;
    let numerator = mul(net, wide(reserve_out.get()), "output numerator overflow")?;
    let scaled_reserve = mul(
        wide(reserve_in.get()),
        wide(FEE_DENOMINATOR),
        "scaled reserve overflow",
    )?;
    let denominator = add(scaled_reserve, net, "output denominator overflow")?;

    let out = div_floor(numerator, denominator)?;
    narrow_u128(out, "amount_out exceeds 128 bits").map(Amount::new)
}

/// Smallest exact input whose [`quote_output`] is at least `amount_out`.
///
/// ```text
/// amount_in = reserve_in × amount_out × 1000 / ((reserve_out − amount_out) × 997) + 1
/// ```
///
/// # Errors
///
/// - [`AmmError::InvalidInput`] if `amount_out` or either reserve is zero,
///   or if `amount_out >= reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds 128 bits.
pub fn quote_input(amount_out: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidInput("amount_out must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidInput("reserves must be positive"));
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InvalidInput("amount_out must be below reserve_out"));
    }

    let numerator = mul(
        mul(
            wide(reserve_in.get()),
            wide(amount_out.get()),
            "input numerator overflow",
        )?,
        wide(FEE_DENOMINATOR),
        "input numerator overflow",
    )?;
    let remaining = wide(reserve_out.get() - amount_out.get());
    let denominator = mul(remaining, wide(FEE_NUMERATOR), "input denominator overflow")?;

    let floor = div_floor(numerator, denominator)?;
    let amount_in = add(floor, wide(1), "amount_in overflow")?;
    narrow_u128(amount_in, "amount_in exceeds 128 bits").map(Amount::new)
}

/// Amount of the second asset matching `amount_a` at the current reserve
/// ratio: `amount_a × reserve_b / reserve_a` (floor).
///
/// # Errors
///
/// - [`AmmError::InvalidInput`] if `amount_a` is zero.
/// - [`AmmError::ZeroReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result exceeds 128 bits.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(AmmError::InvalidInput("amount must be positive"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::ZeroReserves);
    }
    let numerator = mul(
        wide(amount_a.get()),
        wide(reserve_b.get()),
        "quote numerator overflow",
    )?;
    let matched = div_floor(numerator, wide(reserve_a.get()))?;
    narrow_u128(matched, "quoted amount exceeds 128 bits").map(Amount::new)
}

/// Spot price of the pair: `reserve_a × 10^18 / reserve_b` (floor).
///
/// # Errors
///
/// Returns [`AmmError::ZeroReserves`] if either reserve is zero.
pub fn spot_price(reserve_a: Amount, reserve_b: Amount) -> Result<Price> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::ZeroReserves);
    }
    let scaled = mul(
        wide(reserve_a.get()),
        super::widen_u256(Price::SCALE),
        "price scaling overflow",
    )?;
    let raw = div_floor(scaled, wide(reserve_b.get()))?;
    narrow_u256(raw, "price exceeds 256 bits").map(Price::from_raw)
}
