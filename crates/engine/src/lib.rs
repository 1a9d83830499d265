// Gaussian elimination engine
//
// solve() turns a grid of cell text into a step-by-step elimination log and
// a classification of the system. Pure and synchronous: every call owns its
// own scratch matrix, so independent calls can run on any thread.

mod backsub;
mod classify;
mod config;
mod convert;
mod eliminator;
mod error;
mod error_report;
mod format;
mod forward;
mod matrix;
mod outcome;
mod step;

pub use config::{SolverConfig, DEFAULT_DISPLAY_DIGITS, EPS, INPUT_EPS, MAX_SIZE, MIN_SIZE};
pub use convert::{check_dimensions, parse_matrix, parse_number};
pub use error::{InputError, InputResult};
pub use error_report::report_input_error;
pub use format::format_smart;
pub use matrix::Matrix;
pub use outcome::{Solution, SolveOutcome};
pub use step::{PivotPosition, StepKind, StepRecord};

use eliminator::Eliminator;

#[cfg(test)]
mod tests;

/// Solve with the default configuration.
pub fn solve<S: AsRef<str>>(cells: &[Vec<S>]) -> InputResult<Solution> {
    solve_with(cells, &SolverConfig::default())
}

/// Parse every cell, check the dimensions, then eliminate.
///
/// Fails before any step runs if a cell is not a number or the grid is not
/// a rectangle within the configured size. Inconsistent and
/// underdetermined systems are not errors; see `SolveOutcome`.
pub fn solve_with<S: AsRef<str>>(cells: &[Vec<S>], config: &SolverConfig) -> InputResult<Solution> {
    let matrix = parse_matrix(cells)?;
    check_dimensions(&matrix, config)?;
    Ok(solve_matrix(&matrix, config))
}

/// Eliminate on a private copy of `matrix`; the caller's matrix is untouched.
pub fn solve_matrix(matrix: &Matrix, config: &SolverConfig) -> Solution {
    Eliminator::new(matrix.clone(), config).run()
}
