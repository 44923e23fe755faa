//! Decimal codec: `sputn` (format) and `atoi` (parse).
//!
//! Both directions are built only on `ops` and `string`; no native
//! multiply, divide or formatting is involved.
//!
//! Formatting extracts five digits most-significant first with the divisor
//! sequence `10000, 1000, 100, 10, 1`, which covers every magnitude up to
//! 32767. `-32768` cannot be negated and is emitted from a literal.
//!
//! Parsing runs `SKIP_SPACE → SIGN → DIGITS → DONE` once, left to right, and
//! stops at the first non-digit. The magnitude is range-checked as it
//! accumulates, so `"-32768"` parses while `"32768"` traps.

use crate::ops::{apply_sign, div, mul, mul_magnitude, MAX_MAGNITUDE};
use crate::string::strcpy;
use crate::{ascii_cells, cell, Cell, MinicResult, Trap, NUL};

/// Cells needed to format any value: `"-32768"` plus terminator.
pub const FORMAT_CELLS: usize = 7;

/// Place values of the five decimal digits a cell can need.
const DIVISORS: [i16; 5] = [10000, 1000, 100, 10, 1];

const MIN_TEXT: [Cell; 6] = ascii_cells(b"-32768");
const ZERO_TEXT: [Cell; 1] = ascii_cells(b"0");

const SPACE: Cell = cell(b' ');
const TAB: Cell = cell(b'\t');
const PLUS: Cell = cell(b'+');
const MINUS: Cell = cell(b'-');
const DIGIT_0: Cell = cell(b'0');
const DIGIT_9: Cell = cell(b'9');

/// Write the canonical decimal text of `n` into `dst`, NUL-terminated.
///
/// Returns the index of the terminator (one past the last character).
/// No leading zeros are written except for `n == 0` itself.
///
/// # Errors
/// Returns `Trap::OutOfBounds` if `dst` cannot hold the text and its
/// terminator; `dst` is left untouched. [`FORMAT_CELLS`] cells always suffice.
#[inline(never)]
pub fn sputn(dst: &mut [Cell], n: i16) -> MinicResult<usize> {
    let mut scratch = [NUL; FORMAT_CELLS];
    format_into(&mut scratch, n)?;
    strcpy(dst, &scratch)
}

fn format_into(out: &mut [Cell; FORMAT_CELLS], n: i16) -> MinicResult<()> {
    if n == i16::MIN {
        strcpy(out, &MIN_TEXT)?;
        return Ok(());
    }
    if n == 0 {
        strcpy(out, &ZERO_TEXT)?;
        return Ok(());
    }

    let mut pos = 0;
    let mut n = n;
    if n < 0 {
        put(out, &mut pos, MINUS)?;
        // i16::MIN was handled above
        n = -n;
    }

    let mut leading = true;
    for d in DIVISORS {
        let ch = div(n, d)?;
        if ch != 0 {
            leading = false;
        }
        if !leading {
            put(out, &mut pos, DIGIT_0 + ch)?;
        }
        n -= mul(d, ch)?;
    }
    Ok(())
}

#[inline(always)]
fn put(out: &mut [Cell], pos: &mut usize, c: Cell) -> MinicResult<()> {
    *out.get_mut(*pos).ok_or(Trap::OutOfBounds)? = c;
    *pos += 1;
    Ok(())
}

/// Parse an optionally signed decimal integer from a cell string.
///
/// Leading spaces and tabs are skipped, one `+` or `-` is accepted, then
/// digits are consumed until the first non-digit or the terminator. Input
/// without digits parses as `0`.
///
/// # Errors
/// Returns `Trap::IntegerOverflow` if the value lies outside [-32768, 32767].
#[inline(never)]
pub fn atoi(s: &[Cell]) -> MinicResult<i16> {
    let mut cells = s.iter().copied().take_while(|&c| c != NUL).peekable();

    // SKIP_SPACE
    while cells.next_if(|&c| c == SPACE || c == TAB).is_some() {}

    // SIGN
    let negative = match cells.peek() {
        Some(&MINUS) => {
            cells.next();
            true
        }
        Some(&PLUS) => {
            cells.next();
            false
        }
        _ => false,
    };

    // DIGITS
    let mut magnitude = 0u32;
    while let Some(c) = cells.next_if(|c| (DIGIT_0..=DIGIT_9).contains(c)) {
        let digit = u32::from(c.unsigned_abs() - DIGIT_0.unsigned_abs());
        magnitude = mul_magnitude(magnitude, 10)? + digit;
        if magnitude > MAX_MAGNITUDE {
            return Err(Trap::IntegerOverflow);
        }
    }

    // DONE
    apply_sign(negative, magnitude)
}


#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: `atoi` never panics on short arbitrary input.
    #[kani::proof]
    #[kani::unwind(12)]
    fn atoi_never_panics() {
        let s: [Cell; 4] = kani::any();
        let _ = atoi(&s);
    }
}
