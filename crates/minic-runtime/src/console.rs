//! Console layer — `puts`, `gets`, `putn` and `getn` over a `CharPort`.
//!
//! minic programs exchange whole lines with the host through two primitives,
//! `_in` and `_out`, each filling or draining a 256-cell buffer. Here those
//! primitives are the `CharPort` trait, and the buffers (`ibuf`/`obuf`, with
//! their fill lengths `ilen`/`olen`) are owned by a `Console` value instead
//! of living in program-wide globals.

use crate::buffer::CellBuffer;
use crate::codec::{atoi, sputn};
use crate::string::strcpy;
use crate::{Cell, MinicResult, Trap};

/// Cells in each console buffer, terminator included.
pub const IO_BUFFER_CELLS: usize = 256;

/// Host-side line I/O: the `_in` / `_out` primitives.
pub trait CharPort {
    /// `_in`: read the next input line into `buf`, without its line ending.
    ///
    /// Returns the number of cells written (at most `buf.len()`; longer lines
    /// are truncated). Returns `Trap::EndOfInput` once the input is exhausted.
    fn read_line(&mut self, buf: &mut [Cell]) -> MinicResult<usize>;

    /// `_out`: emit `cells` as one output line.
    fn write_line(&mut self, cells: &[Cell]) -> MinicResult<()>;
}

/// Console state for one running program.
///
/// Owns the port and both line buffers for the lifetime of the program.
pub struct Console<P> {
    port: P,
    ibuf: CellBuffer<IO_BUFFER_CELLS>,
    obuf: CellBuffer<IO_BUFFER_CELLS>,
}

impl<P: CharPort> Console<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            ibuf: CellBuffer::new(),
            obuf: CellBuffer::new(),
        }
    }

    /// Write the string `s` as one line.
    ///
    /// # Errors
    /// `Trap::OutOfBounds` if `s` is longer than 255 cells, or any trap from
    /// the port.
    pub fn puts(&mut self, s: &[Cell]) -> MinicResult<()> {
        self.obuf.fill_with(|cells| strcpy(cells, s))?;
        self.port.write_line(self.obuf.as_slice())
    }

    /// Read one line into `s`, NUL-terminated. Returns the line length.
    ///
    /// # Errors
    /// `Trap::EndOfInput` when input is exhausted, `Trap::OutOfBounds` if the
    /// line does not fit `s`.
    pub fn gets(&mut self, s: &mut [Cell]) -> MinicResult<usize> {
        self.read_ibuf()?;
        strcpy(s, self.ibuf.as_terminated())
    }

    /// Write the decimal text of `n` as one line.
    pub fn putn(&mut self, n: i16) -> MinicResult<()> {
        self.obuf.fill_with(|cells| sputn(cells, n))?;
        self.port.write_line(self.obuf.as_slice())
    }

    /// Read one line and parse it with `atoi`.
    pub fn getn(&mut self) -> MinicResult<i16> {
        self.read_ibuf()?;
        atoi(self.ibuf.as_terminated())
    }

    /// `ilen`: length of the last line read.
    pub fn input_len(&self) -> usize {
        self.ibuf.len()
    }

    /// `olen`: length of the last line written.
    pub fn output_len(&self) -> usize {
        self.obuf.len()
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }

    fn read_ibuf(&mut self) -> MinicResult<usize> {
        let port = &mut self.port;
        self.ibuf.fill_with(|cells| {
            // ibuf[ilen] = '\0' needs one spare cell
            let (_, body) = cells.split_last_mut().ok_or(Trap::OutOfBounds)?;
            port.read_line(body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ascii_cells, cell, NUL};

    /// Port that replays one fixed line and records the last line written.
    struct OneLinePort {
        input: Option<&'static [u8]>,
        last_output: CellBuffer<IO_BUFFER_CELLS>,
        lines_written: usize,
    }

    impl OneLinePort {
        fn new(input: Option<&'static [u8]>) -> Self {
            Self {
                input,
                last_output: CellBuffer::new(),
                lines_written: 0,
            }
        }
    }

    impl CharPort for OneLinePort {
        fn read_line(&mut self, buf: &mut [Cell]) -> MinicResult<usize> {
            let line = self.input.take().ok_or(Trap::EndOfInput)?;
            let n = line.len().min(buf.len());
            for (dst, &b) in buf.iter_mut().zip(line) {
                *dst = cell(b);
            }
            Ok(n)
        }

        fn write_line(&mut self, cells: &[Cell]) -> MinicResult<()> {
            self.lines_written += 1;
            self.last_output.fill_with(|out| strcpy(out, cells))?;
            Ok(())
        }
    }

    #[test]
    fn puts_writes_one_line() {
        let mut console = Console::new(OneLinePort::new(None));
        console.puts(&ascii_cells(b"hello\0")).unwrap();
        assert_eq!(console.output_len(), 5);
        assert_eq!(console.port().lines_written, 1);
        assert_eq!(console.port().last_output.as_slice(), &ascii_cells(b"hello"));
    }

    #[test]
    fn puts_too_long_traps() {
        let mut console = Console::new(OneLinePort::new(None));
        let long = [cell(b'x'); IO_BUFFER_CELLS];
        assert_eq!(console.puts(&long), Err(Trap::OutOfBounds));
        assert_eq!(console.port().lines_written, 0);
    }

    #[test]
    fn putn_formats_number() {
        let mut console = Console::new(OneLinePort::new(None));
        console.putn(-32768).unwrap();
        assert_eq!(console.port().last_output.as_slice(), &ascii_cells(b"-32768"));
        assert_eq!(console.output_len(), 6);
    }

    #[test]
    fn gets_terminates_line() {
        let mut console = Console::new(OneLinePort::new(Some(&b"abc"[..])));
        let mut line = [cell(b'?'); 8];
        assert_eq!(console.gets(&mut line).unwrap(), 3);
        assert_eq!(&line[..4], &ascii_cells(b"abc\0"));
        assert_eq!(console.input_len(), 3);
    }

    #[test]
    fn gets_end_of_input() {
        let mut console = Console::new(OneLinePort::new(None));
        let mut line = [NUL; 8];
        assert_eq!(console.gets(&mut line), Err(Trap::EndOfInput));
    }

    #[test]
    fn gets_line_longer_than_destination() {
        let mut console = Console::new(OneLinePort::new(Some(&b"abcdef"[..])));
        let mut line = [NUL; 4];
        assert_eq!(console.gets(&mut line), Err(Trap::OutOfBounds));
    }

    #[test]
    fn gets_keeps_long_lines_within_ibuf() {
        let long: &'static [u8] = &[b'7'; 300];
        let mut console = Console::new(OneLinePort::new(Some(long)));
        let mut line = [NUL; IO_BUFFER_CELLS];
        assert_eq!(console.gets(&mut line).unwrap(), IO_BUFFER_CELLS - 1);
        assert_eq!(console.input_len(), IO_BUFFER_CELLS - 1);
    }

    #[test]
    fn getn_parses_line() {
        let mut console = Console::new(OneLinePort::new(Some(&b"  -1234 apples"[..])));
        assert_eq!(console.getn().unwrap(), -1234);
    }

    #[test]
    fn getn_overflow() {
        let mut console = Console::new(OneLinePort::new(Some(&b"99999"[..])));
        assert_eq!(console.getn(), Err(Trap::IntegerOverflow));
    }
}
