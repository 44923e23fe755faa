//! `minic-runtime` — Support library for minic programs.
//!
//! minic has no multiply/divide instruction and no string formatting, so
//! programs link against these routines instead. This crate is `#![no_std]`
//! and provides:
//! - `mul` / `div` over the 16-bit signed domain ([`ops`])
//! - `strlen` / `strcpy` over integer-cell strings ([`string`])
//! - `sputn` / `atoi` decimal encoding and decoding ([`codec`])
//! - `CellBuffer<const CAP: usize>` for fixed-capacity string storage
//! - `Console<P>` and the `CharPort` trait for the `puts`/`gets`/`putn` layer

#![no_std]

/// One character cell. minic strings store each character in a full
/// integer cell, not a byte.
pub type Cell = i16;

/// String terminator cell (`'\0'`).
pub const NUL: Cell = 0;

/// Convert an ASCII byte to a cell.
#[inline(always)]
pub const fn cell(byte: u8) -> Cell {
    byte as Cell
}

/// Convert ASCII text to cells at compile time. The result is not
/// terminated; the slice end acts as the terminator.
pub const fn ascii_cells<const N: usize>(text: &[u8; N]) -> [Cell; N] {
    let mut cells = [NUL; N];
    let mut i = 0;
    while i < N {
        cells[i] = text[i] as Cell;
        i += 1;
    }
    cells
}

pub mod codec;
pub mod ops;
pub mod string;

mod buffer;
pub use buffer::CellBuffer;

mod console;
pub use console::{CharPort, Console, IO_BUFFER_CELLS};

pub use codec::{atoi, sputn};
pub use ops::{div, mul};
pub use string::{strcpy, strlen};

/// Runtime failures — no panics, no unwinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trap {
    /// Integer division by zero.
    DivisionByZero,
    /// Result outside [-32768, 32767].
    IntegerOverflow,
    /// Destination buffer too small for the write.
    OutOfBounds,
    /// Cell cannot be represented as a byte on the console.
    InvalidCharacter,
    /// Input stream exhausted.
    EndOfInput,
    /// Underlying byte stream failed.
    Io,
}

impl core::fmt::Display for Trap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Trap::DivisionByZero => "integer division by zero",
            Trap::IntegerOverflow => "integer overflow",
            Trap::OutOfBounds => "buffer access out of bounds",
            Trap::InvalidCharacter => "cell is not a byte character",
            Trap::EndOfInput => "end of input",
            Trap::Io => "i/o error on character port",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Trap {}

/// Result type for runtime operations — `Result<T, Trap>`.
pub type MinicResult<T> = Result<T, Trap>;

/// Errors that occur while building a `CellBuffer` from text.
///
/// These are caller mistakes detected up front, not runtime traps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// Text plus terminator does not fit the buffer capacity.
    TextExceedsCapacity { len: usize, capacity: usize },
    /// Text contains a non-ASCII character (or an embedded NUL) at `index`.
    NonAsciiText { index: usize },
}

impl core::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConstructionError::TextExceedsCapacity { len, capacity } => write!(
                f,
                "text of {len} characters does not fit a buffer of {capacity} cells"
            ),
            ConstructionError::NonAsciiText { index } => {
                write!(f, "non-ASCII character at byte {index}")
            }
        }
    }
}

impl core::error::Error for ConstructionError {}

impl From<ConstructionError> for Trap {
    fn from(_: ConstructionError) -> Self {
        Trap::OutOfBounds
    }
}
