//! Sample drivers: the Fibonacci table and the number echo.
//!
//! Both talk to the host only through `Console`, the same way a compiled
//! minic program does.

use minic_runtime::{CharPort, Console, MinicResult, Trap};

/// Values printed by `fib` when no count is given.
pub const FIB_COUNT: i16 = 16;

/// Recursive Fibonacci: `-1` for negative `n`, else `fib(n-1) + fib(n-2)`.
///
/// # Errors
/// `Trap::IntegerOverflow` from `fib(24)` on; `fib(23) == 28657` is the
/// largest value that fits a cell.
pub fn fib(n: i16) -> MinicResult<i16> {
    match n {
        n if n < 0 => Ok(-1),
        0 => Ok(0),
        1 => Ok(1),
        n => fib(n - 1)?
            .checked_add(fib(n - 2)?)
            .ok_or(Trap::IntegerOverflow),
    }
}

/// `putn(fib(i))` for `i` in `0..count`. Returns the number of lines written.
pub fn run_fib<P: CharPort>(console: &mut Console<P>, count: i16) -> MinicResult<usize> {
    let mut lines = 0;
    for i in 0..count {
        console.putn(fib(i)?)?;
        lines += 1;
    }
    Ok(lines)
}

/// Read numbers until end of input and write each back with `putn`.
///
/// Lines without digits echo as `0`. Returns the number of lines written.
pub fn run_echo<P: CharPort>(console: &mut Console<P>) -> MinicResult<usize> {
    let mut lines = 0;
    loop {
        let n = match console.getn() {
            Ok(n) => n,
            Err(Trap::EndOfInput) => return Ok(lines),
            Err(trap) => return Err(trap),
        };
        console.putn(n)?;
        lines += 1;
    }
}
