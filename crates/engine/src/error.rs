// Error handling for the solver
//
// Only input problems are errors. Inconsistent and underdetermined systems
// are outcomes, see `SolveOutcome`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A cell is neither a decimal nor a `p/q` fraction with `q != 0`
    #[error("Row {row}, Col {col} invalid input: '{text}'")]
    InvalidCell {
        /// 1-based row
        row: usize,
        /// 1-based column
        col: usize,
        text: String,
    },

    #[error("Matrix is empty")]
    EmptyMatrix,

    /// Fewer than two columns leaves no room for a coefficient and `b`
    #[error("Matrix needs at least one coefficient column and a right-hand side, found {cols} column(s)")]
    TooFewColumns { cols: usize },

    #[error("Row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Number of {what} must be between {min} and {max}, found {value}")]
    DimensionOutOfRange {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl InputError {
    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::InvalidCell { .. } => 101,
            InputError::EmptyMatrix => 102,
            InputError::TooFewColumns { .. } => 103,
            InputError::RaggedRow { .. } => 104,
            InputError::DimensionOutOfRange { .. } => 105,
        }
    }
}

/// Convenient Result type for input conversion
pub type InputResult<T> = Result<T, InputError>;
