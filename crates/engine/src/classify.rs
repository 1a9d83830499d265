// Classification after forward elimination
//
// "Rank" here is the number of rows that still have a coefficient above
// `eps`. It is a row count, not a rank computation, and can differ from the
// true rank of the coefficient matrix.

use crate::eliminator::Eliminator;

pub(crate) trait Classification {
    /// True when every coefficient in row `r` is within `eps` of zero.
    fn is_zero_row(&self, r: usize) -> bool;

    /// First zero coefficient row whose right-hand side exceeds `input_eps`,
    /// as `(zero-based row, rhs)`.
    fn find_inconsistency(&self) -> Option<(usize, f64)>;

    fn rank(&self) -> usize;
}

impl Classification for Eliminator<'_> {
    fn is_zero_row(&self, r: usize) -> bool {
        let eps = self.config.eps;
        self.matrix.coefficients(r).iter().all(|v| v.abs() <= eps)
    }

    fn find_inconsistency(&self) -> Option<(usize, f64)> {
        (0..self.matrix.rows())
            .find(|&r| self.is_zero_row(r) && self.matrix.rhs(r).abs() > self.config.input_eps)
            .map(|r| (r, self.matrix.rhs(r)))
    }

    fn rank(&self) -> usize {
        (0..self.matrix.rows())
            .filter(|&r| !self.is_zero_row(r))
            .count()
    }
}
