//! `CharPort` over host byte streams.
//!
//! Each cell maps to one byte. Input lines lose their `\n` (and a preceding
//! `\r`); output lines gain a `\n`.

use std::io::{BufRead, Write};

use minic_runtime::{cell, Cell, CharPort, MinicResult, Trap};

/// `_in`/`_out` over a reader and a writer.
pub struct StdioPort<R, W> {
    reader: R,
    writer: W,
    /// Scratch line reused by both directions.
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> StdioPort<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: Vec::new(),
        }
    }

    /// Flush buffered output to the writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> CharPort for StdioPort<R, W> {
    fn read_line(&mut self, buf: &mut [Cell]) -> MinicResult<usize> {
        self.line.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.line)
            .map_err(|_| Trap::Io)?;
        if read == 0 {
            return Err(Trap::EndOfInput);
        }
        let mut text = self.line.as_slice();
        if let Some(rest) = text.strip_suffix(b"\n") {
            text = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        let n = text.len().min(buf.len());
        for (dst, &byte) in buf.iter_mut().zip(text) {
            *dst = cell(byte);
        }
        Ok(n)
    }

    fn write_line(&mut self, cells: &[Cell]) -> MinicResult<()> {
        self.line.clear();
        for &c in cells {
            let byte = u8::try_from(c).map_err(|_| Trap::InvalidCharacter)?;
            self.line.push(byte);
        }
        self.line.push(b'\n');
        self.writer.write_all(&self.line).map_err(|_| Trap::Io)
    }
}
