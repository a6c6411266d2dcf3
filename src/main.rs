//! N-Queens Counter and Solver
//!
//! Places N queens on an NxN board so that none attack each other. In
//! counter mode, reports how many queen placements the exhaustive search made
//! and how many solutions it found. In solver mode, prints every solution as
//! the 1-indexed row of the queen in each column.

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use queens::board::format_board;
use queens::validate_size;

/// Counts or lists the solutions of the N-Queens problem.
#[derive(Parser, Debug)]
#[command(name = "queens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size.
    #[arg(
        short = 'N',
        long = "size",
        default_value_t = 4,
        allow_negative_numbers = true
    )]
    size: i64,

    /// What to compute.
    #[arg(short = 't', long = "type", value_enum, default_value_t = Mode::Counter)]
    mode: Mode,

    /// Stop after this many solutions (solver only).
    #[arg(short, long)]
    limit: Option<usize>,

    /// Draw each solution as a board (solver only).
    #[arg(short, long)]
    board: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Count queen placements and solutions.
    Counter,
    /// Print every solution.
    Solver,
}

fn main() -> ExitCode {
    if std::env::var("QUEENS_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("QUEENS_LOG")
            .write_style("QUEENS_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let cli = Cli::parse();

    // reject bad sizes before any search work starts
    let n = match validate_size(cli.size) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("running {:?} for n={}", cli.mode, n);

    let start = Instant::now();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let outcome = run(&cli, &mut out).and_then(|()| out.flush().map_err(Into::into));

    match outcome {
        Ok(()) => {
            log::info!("finished in {:?}", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected engine and writes its output.
fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    match cli.mode {
        Mode::Counter => {
            let result = queens::count(cli.size)?;
            writeln!(out, "{}", result)?;
        }
        Mode::Solver => {
            let solutions = queens::enumerate(cli.size)?;
            for solution in solutions.take(cli.limit.unwrap_or(usize::MAX)) {
                if cli.board {
                    writeln!(out, "{}", format_board(&solution))?;
                } else {
                    writeln!(out, "{}", solution)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> String {
        let cli = Cli::parse_from(std::iter::once("queens").chain(args.iter().copied()));
        let mut output = Vec::new();
        run(&cli, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_defaults_count_four_queens() {
        assert_eq!(
            run_args(&[]),
            "The 4-Queens problem required 16 queen placements to find all 2 solutions\n"
        );
    }

    #[test]
    fn test_solver_lines() {
        assert_eq!(run_args(&["--type", "solver"]), "2 4 1 3 \n3 1 4 2 \n");
    }

    #[test]
    fn test_solver_limit() {
        assert_eq!(
            run_args(&["-N", "8", "-t", "solver", "--limit", "2"]),
            "1 5 8 6 3 7 2 4 \n1 6 8 3 7 4 2 5 \n"
        );
    }

    #[test]
    fn test_negative_size_parses_and_is_rejected() {
        let cli = Cli::parse_from(["queens", "-N", "-1"]);
        assert_eq!(cli.size, -1);
        assert!(validate_size(cli.size).is_err());

        let mut output = Vec::new();
        assert!(run(&cli, &mut output).is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_counter_snapshot() {
        let mut output = String::new();
        for n in 1..=8 {
            output.push_str(&run_args(&["-N", &n.to_string()]));
        }

        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_board_snapshot() {
        let output = run_args(&["-N", "6", "--type", "solver", "--board"]);

        insta::assert_snapshot!(output);
    }
}
