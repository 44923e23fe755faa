//! Fixed-width arithmetic core: `mul` and `div` over the 16-bit signed domain.
//!
//! ## Sign-magnitude evaluation
//!
//! minic has no multiply or divide instruction, so both routines work on
//! magnitudes using only addition, subtraction and comparison, then reapply
//! the sign. Magnitudes come from `unsigned_abs`, so `-32768` has magnitude
//! 32768 and is never negated inside `i16`.
//!
//! ## Overflow
//!
//! A negative result may have magnitude up to 32768, a non-negative one up
//! to 32767. Anything else is `Trap::IntegerOverflow`. The accumulator in
//! `mul` stops as soon as it leaves that range, so every loop here runs at
//! most ~32768 times regardless of the operands.
//!
//! `no_std` compatible: no alloc, no std, no panics.

use crate::{MinicResult, Trap};

/// `|i16::MIN|`, the largest magnitude a signed cell can carry.
pub(crate) const MAX_MAGNITUDE: u32 = 32768;

/// Signed multiplication by repeated addition.
///
/// The larger magnitude is added to itself `min(|a|, |b|)` times, so the
/// loop count is bounded by the smaller operand.
#[inline(never)]
pub fn mul(a: i16, b: i16) -> MinicResult<i16> {
    let negative = (a < 0) != (b < 0);
    let product = mul_magnitude(u32::from(a.unsigned_abs()), u32::from(b.unsigned_abs()))?;
    apply_sign(negative, product)
}

/// Signed division by repeated subtraction, truncating toward zero.
/// The remainder is discarded.
///
/// Traps with `DivisionByZero` when `b == 0` and with `IntegerOverflow` for
/// `-32768 / -1`.
#[inline(never)]
pub fn div(a: i16, b: i16) -> MinicResult<i16> {
    if b == 0 {
        return Err(Trap::DivisionByZero);
    }
    let negative = (a < 0) != (b < 0);
    let divisor = u32::from(b.unsigned_abs());
    let mut rest = u32::from(a.unsigned_abs());
    let mut quotient = 0u32;
    while rest >= divisor {
        quotient += 1;
        rest -= divisor;
    }
    apply_sign(negative, quotient)
}

// ── Magnitude helpers (shared with the codec) ────────────────────────────────

/// Product of two magnitudes, trapping once it exceeds `MAX_MAGNITUDE`.
pub(crate) fn mul_magnitude(x: u32, y: u32) -> MinicResult<u32> {
    let (big, mut small) = if x < y { (y, x) } else { (x, y) };
    let mut acc = 0u32;
    while small > 0 {
        acc = acc.checked_add(big).ok_or(Trap::IntegerOverflow)?;
        if acc > MAX_MAGNITUDE {
            return Err(Trap::IntegerOverflow);
        }
        small -= 1;
    }
    Ok(acc)
}

/// Combine a sign and a magnitude into a cell value, checking the range.
pub(crate) fn apply_sign(negative: bool, magnitude: u32) -> MinicResult<i16> {
    let wide = i32::try_from(magnitude).map_err(|_| Trap::IntegerOverflow)?;
    let signed = if negative { -wide } else { wide };
    i16::try_from(signed).map_err(|_| Trap::IntegerOverflow)
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: `mul` agrees with native checked multiplication on small operands.
    #[kani::proof]
    #[kani::unwind(10)]
    fn mul_matches_native() {
        let a: i16 = kani::any();
        let b: i16 = kani::any();
        kani::assume(a.unsigned_abs() <= 8 || b.unsigned_abs() <= 8);
        match a.checked_mul(b) {
            Some(expected) => kani::assert(mul(a, b) == Ok(expected), "product in range"),
            None => kani::assert(mul(a, b) == Err(Trap::IntegerOverflow), "overflow traps"),
        }
    }

    /// Proof: `div` never loops on a zero divisor.
    #[kani::proof]
    #[kani::unwind(1)]
    fn div_zero_always_traps() {
        let a: i16 = kani::any();
        kani::assert(div(a, 0) == Err(Trap::DivisionByZero), "zero divisor traps");
    }

    /// Proof: `div` agrees with native truncating division when the quotient is small.
    #[kani::proof]
    #[kani::unwind(10)]
    fn div_matches_native() {
        let a: i16 = kani::any();
        let b: i16 = kani::any();
        kani::assume(b != 0);
        kani::assume(a.unsigned_abs() / b.unsigned_abs() <= 8);
        match a.checked_div(b) {
            Some(expected) => kani::assert(div(a, b) == Ok(expected), "quotient matches"),
            None => kani::assert(div(a, b) == Err(Trap::IntegerOverflow), "overflow traps"),
        }
    }
}
