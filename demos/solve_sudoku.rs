//! Loads a Sudoku puzzle from a file (or stdin) and prints the solved grid.
//!
//! ```text
//! cargo run --example solve_sudoku -- puzzle.txt --stats
//! ```
//!
//! The puzzle format is 81 cells in row-major order, digits for givens and
//! `0` or `.` for blanks; whitespace is ignored.

use std::io::Read;

use clap::Parser;
use solvo::{
    grid,
    solver::{engine::SolverEngine, stats::render_stats_table},
};

#[derive(Parser)]
#[command(about = "Solve a Sudoku puzzle with AC-3 propagation and backtracking search")]
struct Args {
    /// Path to the puzzle file, or `-` to read from stdin.
    puzzle: String,

    /// Print propagation and search statistics after solving.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let input = if args.puzzle == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.puzzle)?
    };

    let mut model = grid::parse_puzzle(&input)?;
    match SolverEngine::new().solve(&mut model) {
        Ok((assignment, stats)) => {
            println!("{}", grid::render(&assignment));
            if args.stats {
                println!("{}", render_stats_table(&stats));
            }
        }
        Err(reason) => {
            eprintln!("puzzle is unsatisfiable: {reason}");
            std::process::exit(1);
        }
    }

    Ok(())
}
