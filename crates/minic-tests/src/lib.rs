//! Reference implementations the runtime is checked against.
//!
//! Each `*_orig` function computes the same result with native Rust
//! arithmetic and formatting.

use minic_runtime::{cell, Cell, NUL};

/// Native checked multiplication (`None` on overflow).
pub fn mul_orig(a: i16, b: i16) -> Option<i16> {
    a.checked_mul(b)
}

/// Native truncating division (`None` on zero divisor or overflow).
pub fn div_orig(a: i16, b: i16) -> Option<i16> {
    a.checked_div(b)
}

/// Native decimal formatting.
pub fn format_orig(n: i16) -> String {
    n.to_string()
}

/// Iterative Fibonacci, `-1` for negative `n`.
pub fn fib_orig(n: i16) -> i16 {
    if n < 0 {
        return -1;
    }
    let mut a: i16 = 0;
    let mut b: i16 = 1;
    for _ in 0..n {
        let tmp = a.wrapping_add(b);
        a = b;
        b = tmp;
    }
    a
}

/// ASCII text as a NUL-terminated cell string.
pub fn cells(text: &str) -> Vec<Cell> {
    text.bytes().map(cell).chain([NUL]).collect()
}

/// Text of a cell string up to its terminator.
pub fn text(cells: &[Cell]) -> String {
    cells
        .iter()
        .take_while(|&&c| c != NUL)
        .map(|&c| u8::try_from(c).map_or(char::REPLACEMENT_CHARACTER, char::from))
        .collect()
}
