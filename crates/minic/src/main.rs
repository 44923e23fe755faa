use anyhow::{Context, Result};
use clap::Parser;
use minic::{run, Program, RunOptions, StdioPort};
use std::io;

/// minic — run the sample programs of the minic runtime over stdin/stdout.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Sample program to run
    #[arg(value_enum, default_value_t = Program::Fib)]
    program: Program,

    /// Number of Fibonacci values to print (fib only)
    #[arg(long, short, default_value_t = minic::programs::FIB_COUNT,
          value_parser = clap::value_parser!(i16).range(0..))]
    count: i16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = RunOptions {
        program: cli.program,
        count: cli.count,
    };

    match options.program {
        Program::Fib => eprintln!("minic: running fib ({} values)", options.count),
        Program::Echo => eprintln!("minic: running echo (reading stdin)"),
    }

    let port = StdioPort::new(io::stdin().lock(), io::stdout().lock());
    let (mut port, report) = run(&options, port)
        .with_context(|| format!("program {} trapped", options.program))?;
    port.flush().context("failed to flush stdout")?;

    eprintln!("minic: {} finished, {} lines written", options.program, report.lines);
    Ok(())
}
