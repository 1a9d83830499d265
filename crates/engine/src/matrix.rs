// Dense augmented matrix
//
// Row-major storage for `[A | b]`. The last column is the right-hand side.

use crate::error::{InputError, InputResult};
use crate::format::format_smart;
use crate::config::DEFAULT_DISPLAY_DIGITS;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build from nested rows. Every row must have the same length, and
    /// there must be at least one coefficient column besides `b`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> InputResult<Self> {
        let cols = match rows.first() {
            Some(first) => first.len(),
            None => return Err(InputError::EmptyMatrix),
        };
        if cols < 2 {
            return Err(InputError::TooFewColumns { cols });
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(InputError::RaggedRow {
                    row: r + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of unknowns, i.e. coefficient columns
    pub fn unknowns(&self) -> usize {
        self.cols - 1
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let cols = self.cols;
        &mut self.data[r * cols..(r + 1) * cols]
    }

    /// Coefficient part of a row (without `b`)
    pub fn coefficients(&self, r: usize) -> &[f64] {
        &self.row(r)[..self.cols - 1]
    }

    pub fn rhs(&self, r: usize) -> f64 {
        self[(r, self.cols - 1)]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Entry-wise comparison within `tol`. Different shapes are never equal.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// `A·x − b` for each row, or `None` unless `x` has one entry per unknown.
    pub fn residuals(&self, x: &[f64]) -> Option<Vec<f64>> {
        if x.len() != self.unknowns() {
            return None;
        }
        let residuals = (0..self.rows)
            .map(|r| {
                let ax: f64 = self.coefficients(r).iter().zip(x).map(|(a, v)| a * v).sum();
                ax - self.rhs(r)
            })
            .collect();
        Some(residuals)
    }

    /// Text rendering with entries formatted to `digits` fractional digits.
    ///
    /// ```text
    /// [ 1  0.5 | 2 ]
    /// [ 0    1 | 3 ]
    /// ```
    pub fn render(&self, digits: usize) -> String {
        let cells: Vec<Vec<String>> = (0..self.rows)
            .map(|r| self.row(r).iter().map(|&v| format_smart(v, digits)).collect())
            .collect();

        let widths: Vec<usize> = (0..self.cols)
            .map(|c| {
                cells
                    .iter()
                    .map(|row| row[c].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for row in &cells {
            out.push('[');
            for (c, text) in row.iter().enumerate() {
                if c == self.cols - 1 {
                    out.push_str(" |");
                }
                let pad = widths[c] - text.chars().count();
                out.push(' ');
                out.extend(std::iter::repeat_n(' ', pad));
                out.push_str(text);
            }
            out.push_str(" ]\n");
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        &mut self.data[r * self.cols + c]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_DISPLAY_DIGITS))
    }
}
