//! Wide unsigned integers for intermediate products.
//!
//! Reserves are 128-bit, liquidity supply is 256-bit, and every product
//! the pool computes is evaluated in 512 bits before being narrowed back.
//! Narrowing is checked: a result that does not fit its destination width
//! is reported as [`AmmError::Overflow`] rather than truncated.

use crate::error::{AmmError, Result};

#[allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
mod construct {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer.
        pub struct U256(4);
    }

    construct_uint! {
        /// 512-bit unsigned integer.
        pub struct U512(8);
    }
}

pub use construct::{U256, U512};

/// Widens a `u128` into the 512-bit working type.
#[inline]
pub fn wide(value: u128) -> U512 {
    U512::from(value)
}

/// Widens a 256-bit value into the 512-bit working type.
pub fn widen_u256(value: U256) -> U512 {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    U512::from_little_endian(&bytes)
}

/// Narrows a 512-bit value into `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if `value` needs more than
/// 128 bits.
pub fn narrow_u128(value: U512, context: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Narrows a 512-bit value into a 256-bit value.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if `value` needs more than
/// 256 bits.
pub fn narrow_u256(value: U512, context: &'static str) -> Result<U256> {
    if value.bits() > 256 {
        return Err(AmmError::Overflow(context));
    }
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    Ok(U256::from_little_endian(&bytes[..32]))
}

/// Checked `a * b` in 512 bits.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` on overflow.
#[inline]
pub fn mul(a: U512, b: U512, context: &'static str) -> Result<U512> {
    a.checked_mul(b).ok_or(AmmError::Overflow(context))
}

/// Checked `a + b` in 512 bits.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` on overflow.
#[inline]
pub fn add(a: U512, b: U512, context: &'static str) -> Result<U512> {
    a.checked_add(b).ok_or(AmmError::Overflow(context))
}

/// Floor division in 512 bits.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `divisor` is zero.
#[inline]
pub fn div_floor(numerator: U512, divisor: U512) -> Result<U512> {
    numerator.checked_div(divisor).ok_or(AmmError::DivisionByZero)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn widen_and_narrow_u128() {
        let Ok(v) = narrow_u128(wide(u128::MAX), "ctx") else {
            panic!("fits");
        };
        assert_eq!(v, u128::MAX);
    }

    #[test]
    fn narrow_u128_overflow() {
        let big = wide(u128::MAX) + U512::one();
        assert_eq!(narrow_u128(big, "ctx"), Err(AmmError::Overflow("ctx")));
    }

    #[test]
    fn u256_round_trip_through_u512() {
        let v = U256::MAX;
        let Ok(back) = narrow_u256(widen_u256(v), "ctx") else {
            panic!("fits");
        };
        assert_eq!(back, v);
    }

    #[test]
    fn narrow_u256_overflow() {
        let big = widen_u256(U256::MAX) + U512::one();
        assert!(narrow_u256(big, "ctx").is_err());
    }

    #[test]
    fn max_product_fits_512() {
        let m = wide(u128::MAX);
        let Ok(sq) = mul(m, m, "sq") else {
            panic!("fits");
        };
        let Ok(cube) = mul(sq, m, "cube") else {
            panic!("fits");
        };
        assert!(cube.bits() <= 384);
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(
            div_floor(wide(10), U512::zero()),
            Err(AmmError::DivisionByZero)
        );
    }
}
