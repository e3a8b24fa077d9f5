//! Solvo is a Sudoku solver built on finite-domain constraint satisfaction:
//! AC-3 arc-consistency propagation followed, when needed, by heuristic
//! backtracking search.
//!
//! The core is problem-shaped but puzzle-agnostic in its data: a
//! [`PuzzleModel`](solver::model::PuzzleModel) holds one domain of candidate
//! values per variable and a fixed symmetric graph of binary not-equal
//! constraints. Two components consume it in a fixed order:
//!
//! - **[`propagation`](solver::propagation)** runs the AC-3 worklist
//!   algorithm once, pruning every value that has no support in some
//!   neighbouring domain and detecting immediate unsatisfiability.
//! - **[`search`](solver::search)** extends the propagated state to a total
//!   assignment by depth-first search, picking the most constrained variable
//!   first (MRV), trying its least constraining values first (LCV), forward
//!   checking after every tentative assignment, and restoring domains
//!   exactly on backtrack.
//!
//! [`SolverEngine`](solver::engine::SolverEngine) composes the two, and
//! [`grid`] supplies the Sudoku frontend: parsing, the 9×9 topology, and
//! rendering.
//!
//! # Example
//!
//! ```
//! use solvo::grid;
//! use solvo::solver::engine::SolverEngine;
//!
//! let puzzle = "\
//!     53..7....\
//!     6..195...\
//!     .98....6.\
//!     8...6...3\
//!     4..8.3..1\
//!     7...2...6\
//!     .6....28.\
//!     ...419..5\
//!     ....8..79";
//!
//! let mut model = grid::parse_puzzle(puzzle).unwrap();
//! let (assignment, _stats) = SolverEngine::new().solve(&mut model).unwrap();
//!
//! assert!(assignment.is_total());
//! // The top-left cell was a given.
//! assert_eq!(assignment.get(0), Some(5));
//! println!("{}", grid::render(&assignment));
//! ```

pub mod error;
pub mod grid;
pub mod solver;
