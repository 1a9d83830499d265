// Solver configuration
//
// Tolerances, display precision and dimension bounds for one solve call.

/// Structural zero test during elimination (pivots, factors, snapping).
pub const EPS: f64 = 1e-12;

/// A reduced right-hand side above this is "non-zero enough" to make a
/// zero coefficient row inconsistent.
pub const INPUT_EPS: f64 = 1e-9;

pub const DEFAULT_DISPLAY_DIGITS: usize = 4;

/// Bounds on the number of equations and unknowns
pub const MIN_SIZE: usize = 1;
pub const MAX_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub eps: f64,
    pub input_eps: f64,
    /// Fractional digits used in step descriptions and the summary
    pub digits: usize,
    pub min_size: usize,
    pub max_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            eps: EPS,
            input_eps: INPUT_EPS,
            digits: DEFAULT_DISPLAY_DIGITS,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
        }
    }
}

impl SolverConfig {
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }
}
