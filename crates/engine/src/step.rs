// Step log
//
// One immutable record per elimination action, with a snapshot of the matrix
// right after it. Row and column indices in `StepKind` are zero-based; the
// rendered descriptions use the 1-based numbering people read (R1, x1).

use crate::format::format_smart;
use crate::matrix::Matrix;

/// `(row, column)` of a chosen pivot, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotPosition {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    Initial,
    /// Largest-magnitude candidate in `col` at or below the pivot slot
    PivotSearch { col: usize, row: usize, value: f64 },
    /// Column has no usable pivot
    SkipColumn { col: usize },
    Swap { pivot_row: usize, with: usize },
    NoSwap { pivot_row: usize },
    /// Pivot row divided by `factor`
    Scale { row: usize, factor: f64 },
    AlreadyUnit { row: usize },
    /// `R[target] -= factor * R[pivot_row]`
    Eliminate {
        target: usize,
        pivot_row: usize,
        factor: f64,
    },
    ForwardComplete,
    /// Equations in display order, first unknown first
    BackSubstitution { equations: Vec<String> },
}

impl StepKind {
    pub fn describe(&self, digits: usize) -> String {
        let num = |v: f64| format_smart(v, digits);
        match self {
            StepKind::Initial => "Initial augmented matrix:".to_string(),
            StepKind::PivotSearch { col, row, value } => format!(
                "Step 1 (Find pivot) - Column {}: candidate row {} (value = {})",
                col + 1,
                row + 1,
                num(*value)
            ),
            StepKind::SkipColumn { col } => format!(
                "Column {}: no valid pivot (column ~ 0), skip column",
                col + 1
            ),
            StepKind::Swap { pivot_row, with } => format!(
                "Step 2 (Swap) - Swap R{} <-> R{}",
                pivot_row + 1,
                with + 1
            ),
            StepKind::NoSwap { pivot_row } => format!(
                "Step 2 (Swap) - No swap needed (R{} is pivot row)",
                pivot_row + 1
            ),
            StepKind::Scale { row, factor } => format!(
                "Step 3 (Scale) - Divide R{} by {} to make leading 1",
                row + 1,
                num(*factor)
            ),
            StepKind::AlreadyUnit { row } => {
                format!("Step 3 (Scale) - Pivot already ~1 in R{}", row + 1)
            }
            StepKind::Eliminate {
                target,
                pivot_row,
                factor,
            } => format!(
                "Step 4 (Eliminate below) - R{t} -> R{t} - ({f}) * R{p}",
                t = target + 1,
                f = num(*factor),
                p = pivot_row + 1
            ),
            StepKind::ForwardComplete => {
                "Final matrix after forward elimination (upper-triangular under pivots):"
                    .to_string()
            }
            StepKind::BackSubstitution { equations } => {
                format!("Back-substitution equations:\n{}", equations.join("\n"))
            }
        }
    }

    /// Forward-elimination result, always worth showing in full
    pub fn is_forward_complete(&self) -> bool {
        matches!(self, StepKind::ForwardComplete)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub kind: StepKind,
    pub description: String,
    pub matrix: Matrix,
}
