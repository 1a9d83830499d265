// Solve results

use crate::format::format_smart;
use crate::step::StepRecord;
use std::fmt;

/// How a system was classified. Exactly one per solve.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// One value per unknown, `values[i]` is `x(i+1)`
    UniqueSolution(Vec<f64>),
    /// Fewer non-zero coefficient rows than unknowns
    InfiniteSolutions { rank: usize, unknowns: usize },
    /// 1-based row that reduced to `0 = residual`
    Inconsistent { row: usize, residual: f64 },
}

impl SolveOutcome {
    pub fn is_unique(&self) -> bool {
        matches!(self, SolveOutcome::UniqueSolution(_))
    }

    pub fn solution(&self) -> Option<&[f64]> {
        match self {
            SolveOutcome::UniqueSolution(values) => Some(values),
            _ => None,
        }
    }

    /// Human-readable result, numbers rendered with `format_smart`
    pub fn summary(&self, digits: usize) -> String {
        match self {
            SolveOutcome::UniqueSolution(values) => {
                let lines: Vec<String> = values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| format!("x{} = {}", i + 1, format_smart(v, digits)))
                    .collect();
                format!(
                    "Unique solution found (by back-substitution):\n{}",
                    lines.join("\n")
                )
            }
            SolveOutcome::InfiniteSolutions { rank, unknowns } => format!(
                "Rank = {}, Unknowns = {} → Infinite solutions (free variables exist).\n\
                 Forward elimination result shown above. Cannot compute unique solution by back-substitution.",
                rank, unknowns
            ),
            SolveOutcome::Inconsistent { row, residual } => format!(
                "Inconsistent system: row {} reduces to 0 = {}",
                row,
                format_smart(*residual, digits)
            ),
        }
    }
}

/// Step log plus classification of one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub steps: Vec<StepRecord>,
    pub outcome: SolveOutcome,
    /// Precision the descriptions were rendered with
    pub digits: usize,
}

impl Solution {
    pub fn summary(&self) -> String {
        self.outcome.summary(self.digits)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
