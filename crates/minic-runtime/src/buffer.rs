//! Fixed-capacity string storage — `CellBuffer<const CAP: usize>`.
//!
//! The backing array is `[Cell; CAP]` and is fully pre-allocated. The buffer
//! always holds a NUL-terminated string: `cells[len] == NUL` and
//! `len < CAP`, so at most `CAP - 1` characters fit. Raw routines write
//! through `fill_with`, which restores that invariant afterwards.

use core::fmt;

use crate::string::strlen;
use crate::{cell, Cell, ConstructionError, MinicResult, Trap, NUL};

/// Caller-owned string buffer with a compile-time capacity.
#[derive(Clone)]
pub struct CellBuffer<const CAP: usize> {
    /// Backing storage. Cells past the terminator are unspecified.
    cells: [Cell; CAP],
    /// Characters before the terminator.
    len: usize,
}

impl<const CAP: usize> CellBuffer<CAP> {
    const HAS_TERMINATOR_CELL: () = assert!(CAP > 0, "CellBuffer needs room for a terminator");

    /// Create an empty buffer.
    pub const fn new() -> Self {
        let () = Self::HAS_TERMINATOR_CELL;
        Self {
            cells: [NUL; CAP],
            len: 0,
        }
    }

    /// Create a buffer holding `text`.
    ///
    /// # Errors
    /// Returns `ConstructionError::TextExceedsCapacity` if `text` needs more
    /// than `CAP - 1` cells, `ConstructionError::NonAsciiText` if it contains
    /// a non-ASCII byte or an embedded NUL.
    pub fn try_from_str(text: &str) -> Result<Self, ConstructionError> {
        let mut buf = Self::new();
        if text.len() >= CAP {
            return Err(ConstructionError::TextExceedsCapacity {
                len: text.len(),
                capacity: CAP,
            });
        }
        for (index, byte) in text.bytes().enumerate() {
            if !byte.is_ascii() || byte == 0 {
                return Err(ConstructionError::NonAsciiText { index });
            }
            buf.cells[index] = cell(byte);
        }
        buf.len = text.len();
        Ok(buf)
    }

    /// Total cells, terminator included.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Characters before the terminator (`strlen`).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The string's characters, without the terminator.
    #[inline(always)]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells[..self.len]
    }

    /// The string's characters followed by its terminator.
    #[inline(always)]
    pub fn as_terminated(&self) -> &[Cell] {
        &self.cells[..=self.len]
    }

    /// Reset to the empty string.
    pub fn clear(&mut self) {
        self.len = 0;
        self.cells[0] = NUL;
    }

    /// Append one character.
    ///
    /// # Errors
    /// `Trap::OutOfBounds` when the buffer is full, `Trap::InvalidCharacter`
    /// for `NUL` (it would silently truncate the string).
    pub fn push(&mut self, c: Cell) -> MinicResult<()> {
        if c == NUL {
            return Err(Trap::InvalidCharacter);
        }
        let next = self.len + 1;
        if next >= CAP {
            return Err(Trap::OutOfBounds);
        }
        self.cells[self.len] = c;
        self.cells[next] = NUL;
        self.len = next;
        Ok(())
    }

    /// Let a raw cell routine (`strcpy`, `sputn`, a port's `_in`) write the
    /// buffer contents.
    ///
    /// `write` receives all `CAP` cells and returns how many characters it
    /// produced. The buffer then re-terminates itself at the first `NUL`
    /// within that count and returns the new length. If `write` fails, the
    /// buffer is re-terminated within its previous length.
    ///
    /// # Errors
    /// Any trap from `write`. `Trap::OutOfBounds` if `write` filled every
    /// cell without leaving a terminator; the buffer then keeps the first
    /// `CAP - 1` characters.
    pub fn fill_with<F>(&mut self, write: F) -> MinicResult<usize>
    where
        F: FnOnce(&mut [Cell]) -> MinicResult<usize>,
    {
        let written = write(self.cells.as_mut_slice());
        let limit = match written {
            Ok(produced) => produced.min(CAP),
            Err(_) => self.len,
        };
        let len = strlen(&self.cells[..limit]);
        if len == CAP {
            let last = CAP - 1;
            self.cells[last] = NUL;
            self.len = last;
            return Err(Trap::OutOfBounds);
        }
        self.len = len;
        self.cells[len] = NUL;
        written.map(|_| len)
    }
}

/// Buffers compare by string contents; cells past the terminator are ignored.
impl<const CAP: usize> PartialEq for CellBuffer<CAP> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const CAP: usize> Eq for CellBuffer<CAP> {}

impl<const CAP: usize> Default for CellBuffer<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders ASCII cells as text; anything else becomes U+FFFD.
impl<const CAP: usize> fmt::Display for CellBuffer<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.as_slice() {
            let ch = u8::try_from(c)
                .ok()
                .filter(u8::is_ascii)
                .map_or(char::REPLACEMENT_CHARACTER, char::from);
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

impl<const CAP: usize> fmt::Debug for CellBuffer<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellBuffer")
            .field("capacity", &CAP)
            .field("cells", &self.as_slice())
            .finish()
    }
}
