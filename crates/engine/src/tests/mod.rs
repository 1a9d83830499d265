// Engine Test Modules

mod backsub_tests;
mod convert_tests;
mod format_tests;

use crate::{solve_matrix, Matrix, Solution, SolverConfig, StepKind};

/// Solve a numeric augmented matrix with the default configuration.
fn solve_rows(rows: &[&[f64]]) -> Solution {
    let matrix = Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect())
        .expect("test matrix should be rectangular");
    solve_matrix(&matrix, &SolverConfig::default())
}

/// Step kinds without their payloads, for comparing step sequences.
fn kind_names(solution: &Solution) -> Vec<&'static str> {
    solution
        .steps
        .iter()
        .map(|step| match step.kind {
            StepKind::Initial => "initial",
            StepKind::PivotSearch { .. } => "pivot",
            StepKind::SkipColumn { .. } => "skip",
            StepKind::Swap { .. } => "swap",
            StepKind::NoSwap { .. } => "no-swap",
            StepKind::Scale { .. } => "scale",
            StepKind::AlreadyUnit { .. } => "unit",
            StepKind::Eliminate { .. } => "eliminate",
            StepKind::ForwardComplete => "forward-complete",
            StepKind::BackSubstitution { .. } => "back-sub",
        })
        .collect()
}
