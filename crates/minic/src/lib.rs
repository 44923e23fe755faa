//! minic — sample programs for the minic runtime.
//!
//! This crate wires the `no_std` runtime to the host: `StdioPort` provides
//! the `_in`/`_out` primitives over any `BufRead`/`Write` pair, and
//! `programs` holds the sample drivers that run on a `Console`.

pub mod programs;
pub mod stdio;

use std::fmt;

// Re-export key types for convenience
pub use anyhow::{Context, Result};
use minic_runtime::{CharPort, Console};
pub use stdio::StdioPort;

/// Sample program to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Program {
    /// Print the first `count` Fibonacci numbers, one per line.
    Fib,
    /// Read numbers line by line and print each one back in canonical form.
    Echo,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Program::Fib => "fib",
            Program::Echo => "echo",
        })
    }
}

/// Configuration options for a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Which sample program to run
    pub program: Program,
    /// Number of Fibonacci values printed by `fib`
    pub count: i16,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            program: Program::Fib,
            count: programs::FIB_COUNT,
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Lines written by the program
    pub lines: usize,
}

/// Run a sample program on `port`, returning the port and a run summary.
///
/// The port is handed back so callers can flush or inspect it.
pub fn run<P: CharPort>(options: &RunOptions, port: P) -> Result<(P, RunReport)> {
    let mut console = Console::new(port);
    let lines = match options.program {
        Program::Fib => programs::run_fib(&mut console, options.count)
            .with_context(|| format!("fib failed for count {}", options.count))?,
        Program::Echo => programs::run_echo(&mut console).context("echo failed")?,
    };
    Ok((console.into_port(), RunReport { lines }))
}
