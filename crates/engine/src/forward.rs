// Forward elimination with partial pivoting
//
// Column by column: pick the largest-magnitude pivot at or below the next
// free row, swap it up, scale it to 1 and clear the entries below it.
// Every action is logged with a snapshot.

use crate::eliminator::Eliminator;
use crate::step::{PivotPosition, StepKind};
use tracing::{debug, trace};

pub(crate) trait ForwardElimination {
    /// Run the column loop and log the final forward-eliminated matrix.
    fn forward_eliminate(&mut self);

    /// Row in `from..rows` with the largest `|a[row][col]|`; the first one
    /// wins a tie.
    fn find_pivot(&self, col: usize, from: usize) -> usize;

    /// Divide `row` from `col` onwards by its pivot unless it is already ~1.
    fn normalize_row(&mut self, row: usize, col: usize);

    /// Subtract multiples of `pivot_row` from every row below it.
    fn eliminate_below(&mut self, pivot_row: usize, col: usize);
}

fn snap(value: f64, eps: f64) -> f64 {
    if value.abs() < eps { 0.0 } else { value }
}

impl ForwardElimination for Eliminator<'_> {
    fn forward_eliminate(&mut self) {
        let rows = self.matrix.rows();
        let eps = self.config.eps;
        let mut pivot_row = 0;

        for col in 0..self.unknowns() {
            if pivot_row >= rows {
                break;
            }

            let candidate = self.find_pivot(col, pivot_row);
            let value = self.matrix[(candidate, col)];
            self.record(StepKind::PivotSearch {
                col,
                row: candidate,
                value,
            });

            // Column is rank-deficient from here down; same pivot slot, next column
            if value.abs() < eps {
                debug!(col = col + 1, "no usable pivot, skipping column");
                self.record(StepKind::SkipColumn { col });
                continue;
            }

            if candidate != pivot_row {
                self.matrix.swap_rows(pivot_row, candidate);
                self.record(StepKind::Swap {
                    pivot_row,
                    with: candidate,
                });
            } else {
                self.record(StepKind::NoSwap { pivot_row });
            }

            self.normalize_row(pivot_row, col);
            self.eliminate_below(pivot_row, col);

            debug!(row = pivot_row + 1, col = col + 1, "pivot recorded");
            self.pivots.push(PivotPosition {
                row: pivot_row,
                col,
            });
            pivot_row += 1;
        }

        self.record(StepKind::ForwardComplete);
    }

    fn find_pivot(&self, col: usize, from: usize) -> usize {
        (from + 1..self.matrix.rows()).fold(from, |best, r| {
            if self.matrix[(r, col)].abs() > self.matrix[(best, col)].abs() {
                r
            } else {
                best
            }
        })
    }

    fn normalize_row(&mut self, row: usize, col: usize) {
        let eps = self.config.eps;
        let pivot = self.matrix[(row, col)];

        if (pivot - 1.0).abs() > eps {
            for value in &mut self.matrix.row_mut(row)[col..] {
                *value = snap(*value / pivot, eps);
            }
            self.record(StepKind::Scale { row, factor: pivot });
        } else {
            self.record(StepKind::AlreadyUnit { row });
        }
    }

    fn eliminate_below(&mut self, pivot_row: usize, col: usize) {
        let eps = self.config.eps;
        let pivot: Vec<f64> = self.matrix.row(pivot_row)[col..].to_vec();

        for target in pivot_row + 1..self.matrix.rows() {
            let factor = self.matrix[(target, col)];
            if factor.abs() < eps {
                continue;
            }

            for (value, p) in self.matrix.row_mut(target)[col..].iter_mut().zip(&pivot) {
                *value = snap(*value - factor * p, eps);
            }
            trace!(target = target + 1, pivot_row = pivot_row + 1, factor, "row eliminated");
            self.record(StepKind::Eliminate {
                target,
                pivot_row,
                factor,
            });
        }
    }
}
