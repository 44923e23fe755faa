//! Runtime `mul` / `div` against native checked arithmetic.
//!
//! Operands are sampled across the whole 16-bit range plus the values
//! around every boundary.

use minic_runtime::{div, mul, Trap};
use minic_tests::{div_orig, mul_orig};

/// Boundary values plus a stride through the full range.
fn operands() -> Vec<i16> {
    let mut values: Vec<i16> = (i16::MIN..=i16::MAX).step_by(251).collect();
    values.extend([
        i16::MIN,
        i16::MIN + 1,
        -256,
        -181,
        -128,
        -10,
        -2,
        -1,
        0,
        1,
        2,
        10,
        128,
        181,
        256,
        i16::MAX - 1,
        i16::MAX,
    ]);
    values
}

#[test]
fn test_mul_matches_native() {
    let values = operands();
    for &a in &values {
        for &b in &values {
            let expected = mul_orig(a, b).ok_or(Trap::IntegerOverflow);
            assert_eq!(mul(a, b), expected, "mul({a}, {b})");
        }
    }
}

#[test]
fn test_mul_examples() {
    assert_eq!(mul(123, -45), Ok(-5535));
    assert_eq!(mul(0, 999), Ok(0));
    assert_eq!(mul(-1, i16::MAX), Ok(-i16::MAX));
    assert_eq!(mul(2, -16384), Ok(i16::MIN));
    assert_eq!(mul(-2, -16384), Err(Trap::IntegerOverflow));
}

#[test]
fn test_div_matches_native() {
    let values = operands();
    for &a in &values {
        for &b in values.iter().filter(|&&b| b != 0) {
            let expected = div_orig(a, b).ok_or(Trap::IntegerOverflow);
            assert_eq!(div(a, b), expected, "div({a}, {b})");
        }
    }
}

#[test]
fn test_div_examples() {
    assert_eq!(div(7, 2), Ok(3));
    assert_eq!(div(-7, 2), Ok(-3));
    assert_eq!(div(-7, -2), Ok(3));
    assert_eq!(div(0, -5), Ok(0));
}

#[test]
fn test_div_by_zero_always_traps() {
    for a in i16::MIN..=i16::MAX {
        assert_eq!(div(a, 0), Err(Trap::DivisionByZero), "div({a}, 0)");
    }
}

#[test]
fn test_div_min_by_neg_one_overflows() {
    assert_eq!(div(i16::MIN, -1), Err(Trap::IntegerOverflow));
}
