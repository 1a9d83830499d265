// crates/parser/src/cell.rs

use std::fmt;

/// What one matrix cell holds once its text has been parsed.
///
/// The three incomplete shapes are what a keypad produces half-way through
/// typing a negative number; they parse, but never convert to a value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// ""
    Empty,
    /// "-"
    Negative,
    /// "-."
    NegativeDot,
    Number(f64),
    /// Numerator and denominator, kept apart so a zero denominator is visible
    Fraction(f64, f64),
}

impl CellValue {
    /// Numeric value of the cell, `None` for incomplete input, `p/0` or a
    /// quotient that overflows.
    pub fn value(&self) -> Option<f64> {
        match *self {
            CellValue::Number(v) => Some(v),
            CellValue::Fraction(_, d) if d == 0.0 => None,
            CellValue::Fraction(n, d) => Some(n / d).filter(|q| q.is_finite()),
            CellValue::Empty | CellValue::Negative | CellValue::NegativeDot => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            CellValue::Empty | CellValue::Negative | CellValue::NegativeDot
        )
    }

    pub fn is_ready(&self) -> bool {
        self.value().is_some()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, "empty cell"),
            CellValue::Negative => write!(f, "'-'"),
            CellValue::NegativeDot => write!(f, "'-.'"),
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Fraction(n, d) => write!(f, "{}/{}", n, d),
        }
    }
}
