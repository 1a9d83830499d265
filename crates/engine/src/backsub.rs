// Back-substitution
//
// Walks the recorded pivots from the last column back to the first and
// logs every solved equation in one combined step.

use crate::eliminator::Eliminator;
use crate::format::format_smart;
use crate::step::{PivotPosition, StepKind};
use tracing::trace;

pub(crate) trait BackSubstitution {
    /// Solve for every pivot variable. Unknowns without a pivot stay 0.
    fn back_substitute(&mut self) -> Vec<f64>;
}

impl BackSubstitution for Eliminator<'_> {
    fn back_substitute(&mut self) -> Vec<f64> {
        let unknowns = self.unknowns();
        let eps = self.config.eps;
        let digits = self.config.digits;

        let mut x = vec![0.0; unknowns];
        let mut equations = Vec::with_capacity(self.pivots.len());

        for &PivotPosition { row, col } in self.pivots.iter().rev() {
            let coefficients = self.matrix.row(row);
            let mut sum_known = 0.0;
            let mut terms = Vec::new();

            for j in col + 1..unknowns {
                let coeff = coefficients[j];
                if coeff.abs() < eps {
                    continue;
                }
                terms.push(format!("{}·x{}", format_smart(coeff, digits), j + 1));
                sum_known += coeff * x[j];
            }

            let rhs = coefficients[unknowns];
            x[col] = (rhs - sum_known) / coefficients[col];
            trace!(var = col + 1, value = x[col], "solved");

            let lhs = if terms.is_empty() {
                format!("x{}", col + 1)
            } else {
                format!("x{} + {}", col + 1, terms.join(" + "))
            };
            equations.push(format!("{} = {}", lhs, format_smart(rhs, digits)));
        }

        // Solved from the last variable up; read from x1 down
        equations.reverse();
        self.record(StepKind::BackSubstitution { equations });
        x
    }
}
