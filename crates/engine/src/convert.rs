// Cell text to numbers
//
// The engine does not trust the readiness gate: every cell is parsed again
// here and the first failure aborts the solve before any step is logged.

use crate::config::SolverConfig;
use crate::error::{InputError, InputResult};
use crate::matrix::Matrix;

/// Value of one cell: a decimal, or `p/q` with `q != 0`.
pub fn parse_number(text: &str) -> Option<f64> {
    parser::parse_cell(text).ok().and_then(|cell| cell.value())
}

/// Parse a grid of cell text into an augmented matrix.
///
/// Shape problems are reported before cell problems; cells are checked in
/// row-major order and the first bad one is named with 1-based indices.
pub fn parse_matrix<S: AsRef<str>>(cells: &[Vec<S>]) -> InputResult<Matrix> {
    let cols = match cells.first() {
        Some(first) => first.len(),
        None => return Err(InputError::EmptyMatrix),
    };
    if let Some((r, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(InputError::RaggedRow {
            row: r + 1,
            expected: cols,
            found: row.len(),
        });
    }

    let rows = cells
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, text)| {
                    let text = text.as_ref();
                    parse_number(text).ok_or_else(|| InputError::InvalidCell {
                        row: r + 1,
                        col: c + 1,
                        text: text.to_string(),
                    })
                })
                .collect::<InputResult<Vec<f64>>>()
        })
        .collect::<InputResult<Vec<Vec<f64>>>>()?;

    Matrix::from_rows(rows)
}

/// Reject systems outside the configured number of equations/unknowns.
pub fn check_dimensions(matrix: &Matrix, config: &SolverConfig) -> InputResult<()> {
    let bounds = config.min_size..=config.max_size;
    for (what, value) in [("equations", matrix.rows()), ("unknowns", matrix.unknowns())] {
        if !bounds.contains(&value) {
            return Err(InputError::DimensionOutOfRange {
                what,
                value,
                min: config.min_size,
                max: config.max_size,
            });
        }
    }
    Ok(())
}
