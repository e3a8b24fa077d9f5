//! The Sudoku-specific collaborators around the core solver: parsing a
//! textual puzzle into a [`PuzzleModel`], building the fixed 9×9 constraint
//! topology, and rendering a solved assignment back to text.
//!
//! All input validation happens here; the solver core only ever sees a
//! well-formed model.

use crate::solver::{
    model::{Domain, PuzzleModel, Value, VariableId},
    search::Assignment,
};

pub const GRID_SIZE: usize = 9;
pub const BOX_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("expected {CELL_COUNT} cells, found {0}")]
    WrongCellCount(usize),
    /// `offset` is the character position in the caller's input, counting
    /// whitespace, so it lines up with what the user sees in their file.
    #[error("invalid character {found:?} at input offset {offset}")]
    InvalidCell { offset: usize, found: char },
}

/// Parses a puzzle into a model with the full Sudoku constraint topology.
///
/// The input is 81 cells in row-major order: digits `1`-`9` for givens, `0`
/// or `.` for blanks. All whitespace is ignored, so both single-line strings
/// and formatted multi-line grids are accepted. Givens become singleton
/// domains, blanks the full 1..=9 domain.
pub fn parse_puzzle(input: &str) -> Result<PuzzleModel, GridError> {
    let cells: Vec<(usize, char)> = input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();
    if cells.len() != CELL_COUNT {
        return Err(GridError::WrongCellCount(cells.len()));
    }

    let mut domains = Vec::with_capacity(CELL_COUNT);
    for &(offset, cell) in &cells {
        let domain = match cell {
            '.' | '0' => Domain::new((1..=GRID_SIZE as Value).collect()),
            '1'..='9' => Domain::singleton(cell as Value - b'0'),
            found => return Err(GridError::InvalidCell { offset, found }),
        };
        domains.push(domain);
    }

    Ok(PuzzleModel::new(domains, &edges()))
}

/// The not-equal edges of the 9×9 grid: every pair of cells sharing a row,
/// column or box. [`PuzzleModel::new`] symmetrises and deduplicates, so a
/// cell in the same row *and* box still yields a single constraint.
fn edges() -> Vec<(VariableId, VariableId)> {
    let cell = |row: usize, col: usize| (row * GRID_SIZE + col) as VariableId;
    let mut edges = Vec::new();

    let mut all_different = |unit: &[VariableId]| {
        for (position, &a) in unit.iter().enumerate() {
            for &b in &unit[position + 1..] {
                edges.push((a, b));
            }
        }
    };

    for i in 0..GRID_SIZE {
        let row: Vec<_> = (0..GRID_SIZE).map(|col| cell(i, col)).collect();
        all_different(&row);
        let column: Vec<_> = (0..GRID_SIZE).map(|r| cell(r, i)).collect();
        all_different(&column);
    }
    for band in 0..BOX_SIZE {
        for stack in 0..BOX_SIZE {
            let cells: Vec<_> = (0..BOX_SIZE)
                .flat_map(|r| {
                    (0..BOX_SIZE).map(move |c| cell(band * BOX_SIZE + r, stack * BOX_SIZE + c))
                })
                .collect();
            all_different(&cells);
        }
    }

    edges
}

/// Renders a total assignment as a grid with box separators.
pub fn render(assignment: &Assignment) -> String {
    let mut output = String::new();
    for row in 0..GRID_SIZE {
        if row % BOX_SIZE == 0 && row != 0 {
            output.push_str("- - - + - - - + - - -\n");
        }
        for col in 0..GRID_SIZE {
            if col % BOX_SIZE == 0 && col != 0 {
                output.push_str("| ");
            }
            let variable = (row * GRID_SIZE + col) as VariableId;
            match assignment.get(variable) {
                Some(value) => output.push_str(&value.to_string()),
                None => output.push('.'),
            }
            if col != GRID_SIZE - 1 {
                output.push(' ');
            }
        }
        output.push('\n');
    }
    output
}
