//! # Value Arithmetic — Integer-Exact 256-bit Math
//!
//! Distribution amounts and yield balances are unsigned 256-bit integers.
//! The proportional-share formulas (`pool * elapsed / window`,
//! `accrued * amount / supply`) multiply two `U256` values before dividing,
//! so the intermediate product must be computed at 512-bit width to avoid
//! spurious overflow. `mul_div()` is the single place that widening lives.

use primitive_types::{U256, U512};

use crate::error::CoreError;

/// Compute `a * b / denom` exactly, widening the product through `U512`.
///
/// # Errors
///
/// - [`CoreError::DivisionByZero`] if `denom` is zero.
/// - [`CoreError::Overflow`] if the quotient does not fit in 256 bits
///   (only possible when `b > denom`).
pub fn mul_div(a: U256, b: U256, denom: U256) -> Result<U256, CoreError> {
    if denom.is_zero() {
        return Err(CoreError::DivisionByZero { op: "mul_div" });
    }
    let quotient = a.full_mul(b) / U512::from(denom);
    let mut buf = [0u8; 64];
    quotient.to_big_endian(&mut buf);
    if buf[..32].iter().any(|&byte| byte != 0) {
        return Err(CoreError::Overflow { op: "mul_div" });
    }
    Ok(U256::from_big_endian(&buf[32..]))
}
