// Matrix readiness check
//
// Advisory gate a front-end can use to enable or disable its solve action.
// Never mutates anything; the engine re-checks every cell on its own.

use crate::cell::CellValue;
use crate::parser::parse_cell;
use std::fmt;

/// Why a single cell is not ready.
#[derive(Debug, Clone, PartialEq)]
pub enum NotReadyReason {
    /// "", "-" or "-."
    Incomplete(CellValue),
    ZeroDenominator,
    /// `p/q` whose quotient does not fit in an f64
    OutOfRange,
    /// Not a decimal and not a `p/q` fraction
    Malformed,
}

impl fmt::Display for NotReadyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotReadyReason::Incomplete(value) => write!(f, "incomplete input ({})", value),
            NotReadyReason::ZeroDenominator => write!(f, "fraction has a zero denominator"),
            NotReadyReason::OutOfRange => write!(f, "fraction is out of range"),
            NotReadyReason::Malformed => write!(f, "not a decimal number or p/q fraction"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Readiness {
    Ready,
    /// No rows, or rows without cells
    Empty,
    /// Row length differs from the first row (1-based row)
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// First offending cell in row-major order (1-based)
    NotReady {
        row: usize,
        col: usize,
        reason: NotReadyReason,
    },
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Ready => write!(f, "ready"),
            Readiness::Empty => write!(f, "matrix is empty"),
            Readiness::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {} has {} cells, expected {}", row, found, expected),
            Readiness::NotReady { row, col, reason } => {
                write!(f, "row {}, col {}: {}", row, col, reason)
            }
        }
    }
}

/// Value of a ready cell, or the reason it is not ready.
pub fn check_cell(text: &str) -> Result<f64, NotReadyReason> {
    match parse_cell(text) {
        Ok(value) if value.is_incomplete() => Err(NotReadyReason::Incomplete(value)),
        Ok(CellValue::Fraction(_, d)) if d == 0.0 => Err(NotReadyReason::ZeroDenominator),
        Ok(value) => value.value().ok_or(NotReadyReason::OutOfRange),
        Err(_) => Err(NotReadyReason::Malformed),
    }
}

pub fn is_cell_ready(text: &str) -> bool {
    check_cell(text).is_ok()
}

/// Walk the grid row by row and stop at the first problem.
pub fn check_grid<S: AsRef<str>>(cells: &[Vec<S>]) -> Readiness {
    let expected = match cells.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Readiness::Empty,
    };

    for (r, row) in cells.iter().enumerate() {
        if row.len() != expected {
            return Readiness::Ragged {
                row: r + 1,
                expected,
                found: row.len(),
            };
        }
        for (c, text) in row.iter().enumerate() {
            if let Err(reason) = check_cell(text.as_ref()) {
                return Readiness::NotReady {
                    row: r + 1,
                    col: c + 1,
                    reason,
                };
            }
        }
    }

    Readiness::Ready
}

pub fn is_ready<S: AsRef<str>>(cells: &[Vec<S>]) -> bool {
    check_grid(cells).is_ready()
}
