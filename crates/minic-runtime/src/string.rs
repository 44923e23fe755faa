//! NUL-terminated string primitives over integer cells.
//!
//! A string is the prefix of a cell slice up to its first `NUL`. If a slice
//! holds no `NUL`, the slice end is the terminator, so reads never run past
//! the caller's buffer.

use crate::{Cell, MinicResult, Trap, NUL};

/// Number of cells before the first terminator.
#[inline(never)]
pub fn strlen(s: &[Cell]) -> usize {
    s.iter().position(|&c| c == NUL).unwrap_or(s.len())
}

/// Copy `src` (up to its terminator) into `dst` and terminate it.
///
/// Returns the index of the terminator written into `dst`, i.e. one past the
/// last copied character, so callers can keep appending from there.
///
/// # Errors
/// Returns `Trap::OutOfBounds` if `dst` has fewer than `strlen(src) + 1`
/// cells. `dst` is left untouched in that case.
#[inline(never)]
pub fn strcpy(dst: &mut [Cell], src: &[Cell]) -> MinicResult<usize> {
    let len = strlen(src);
    let end = len.checked_add(1).ok_or(Trap::OutOfBounds)?;
    let target = dst.get_mut(..end).ok_or(Trap::OutOfBounds)?;
    let (terminator, body) = target.split_last_mut().ok_or(Trap::OutOfBounds)?;
    body.copy_from_slice(src.get(..len).ok_or(Trap::OutOfBounds)?);
    *terminator = NUL;
    Ok(len)
}


#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: `strcpy` never panics and only writes within `dst`.
    #[kani::proof]
    #[kani::unwind(6)]
    fn strcpy_never_panics() {
        let src: [Cell; 4] = kani::any();
        let mut dst = [NUL; 3];
        match strcpy(&mut dst, &src) {
            Ok(end) => kani::assert(end < dst.len() && dst[end] == NUL, "terminator in dst"),
            Err(trap) => kani::assert(trap == Trap::OutOfBounds, "only capacity traps"),
        }
    }
}
