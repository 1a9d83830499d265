// Per-call solver state
//
// Owns a private copy of the matrix, the step log and the pivot list for a
// single solve. The phases live in their own modules as traits on this
// struct: forward.rs, classify.rs and backsub.rs.

use crate::backsub::BackSubstitution;
use crate::classify::Classification;
use crate::config::SolverConfig;
use crate::forward::ForwardElimination;
use crate::matrix::Matrix;
use crate::outcome::{Solution, SolveOutcome};
use crate::step::{PivotPosition, StepKind, StepRecord};
use tracing::debug;

pub(crate) struct Eliminator<'c> {
    pub matrix: Matrix,
    pub steps: Vec<StepRecord>,
    pub pivots: Vec<PivotPosition>,
    pub config: &'c SolverConfig,
}

impl<'c> Eliminator<'c> {
    pub fn new(matrix: Matrix, config: &'c SolverConfig) -> Self {
        Self {
            matrix,
            steps: Vec::new(),
            pivots: Vec::new(),
            config,
        }
    }

    pub fn unknowns(&self) -> usize {
        self.matrix.unknowns()
    }

    /// Append a step with a snapshot of the matrix as it is now
    pub fn record(&mut self, kind: StepKind) {
        let description = kind.describe(self.config.digits);
        self.steps.push(StepRecord {
            kind,
            description,
            matrix: self.matrix.clone(),
        });
    }

    /// Forward elimination, classification, then back-substitution when
    /// the system has a unique solution.
    pub fn run(mut self) -> Solution {
        debug!(
            rows = self.matrix.rows(),
            unknowns = self.unknowns(),
            "starting elimination"
        );
        self.record(StepKind::Initial);
        self.forward_eliminate();

        let outcome = if let Some((row, residual)) = self.find_inconsistency() {
            debug!(row = row + 1, residual, "inconsistent row");
            SolveOutcome::Inconsistent {
                row: row + 1,
                residual,
            }
        } else {
            let rank = self.rank();
            let unknowns = self.unknowns();
            if rank < unknowns {
                debug!(rank, unknowns, "free variables, skipping back-substitution");
                SolveOutcome::InfiniteSolutions { rank, unknowns }
            } else {
                SolveOutcome::UniqueSolution(self.back_substitute())
            }
        };

        Solution {
            steps: self.steps,
            outcome,
            digits: self.config.digits,
        }
    }
}
