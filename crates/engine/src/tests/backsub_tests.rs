// Back-Substitution Tests

use super::solve_rows;
use crate::{SolveOutcome, StepKind};
use approx::assert_abs_diff_eq;

fn equations(solution: &crate::Solution) -> Vec<String> {
    match &solution.steps.last().unwrap().kind {
        StepKind::BackSubstitution { equations } => equations.clone(),
        other => panic!("expected back-substitution step, got {:?}", other),
    }
}

// ==================== VALUES ====================

#[test]
fn test_single_variable() {
    let solution = solve_rows(&[&[2.0, 4.0]]);
    assert_eq!(solution.outcome, SolveOutcome::UniqueSolution(vec![2.0]));
}

#[test]
fn test_two_by_two_after_swap() {
    let solution = solve_rows(&[&[0.0, 2.0, 4.0], &[1.0, 1.0, 3.0]]);
    assert_eq!(solution.outcome, SolveOutcome::UniqueSolution(vec![1.0, 2.0]));
}

#[test]
fn test_three_by_three() {
    // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
    let solution = solve_rows(&[
        &[2.0, 1.0, -1.0, 8.0],
        &[-3.0, -1.0, 2.0, -11.0],
        &[-2.0, 1.0, 2.0, -3.0],
    ]);
    let x = solution.outcome.solution().unwrap();
    assert_abs_diff_eq!(x[0], 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x[1], 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x[2], -1.0, epsilon = 1e-9);
}

#[test]
fn test_overdetermined_consistent() {
    // x + y = 3, x - y = 1, 2x + y = 5
    let solution = solve_rows(&[&[1.0, 1.0, 3.0], &[1.0, -1.0, 1.0], &[2.0, 1.0, 5.0]]);
    let x = solution.outcome.solution().unwrap();
    assert_abs_diff_eq!(x[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(x[1], 1.0, epsilon = 1e-12);
}

// ==================== NARRATIVE ====================

#[test]
fn test_equations_read_from_x1() {
    let solution = solve_rows(&[&[0.0, 2.0, 4.0], &[1.0, 1.0, 3.0]]);
    assert_eq!(equations(&solution), vec!["x1 + 1·x2 = 3", "x2 = 2"]);
}

#[test]
fn test_zero_coefficients_omitted() {
    let solution = solve_rows(&[&[1.0, 0.0, 5.0], &[0.0, 1.0, 7.0]]);
    assert_eq!(equations(&solution), vec!["x1 = 5", "x2 = 7"]);
}

#[test]
fn test_back_substitution_step_description() {
    let solution = solve_rows(&[&[1.0, 0.0, 5.0], &[0.0, 1.0, 7.0]]);
    assert_eq!(
        solution.steps.last().unwrap().description,
        "Back-substitution equations:\nx1 = 5\nx2 = 7"
    );
}

#[test]
fn test_one_equation_per_pivot() {
    let solution = solve_rows(&[
        &[2.0, 1.0, -1.0, 8.0],
        &[-3.0, -1.0, 2.0, -11.0],
        &[-2.0, 1.0, 2.0, -3.0],
    ]);
    let eqs = equations(&solution);
    assert_eq!(eqs.len(), 3);
    assert!(eqs[0].starts_with("x1 + "));
    assert!(eqs[2].starts_with("x3 = "));
}

// ==================== SUMMARY ====================

#[test]
fn test_unique_summary() {
    let solution = solve_rows(&[&[0.0, 2.0, 4.0], &[1.0, 1.0, 3.0]]);
    assert_eq!(
        solution.summary(),
        "Unique solution found (by back-substitution):\nx1 = 1\nx2 = 2"
    );
}

#[test]
fn test_summary_rounds_like_the_log() {
    // x = 1/3
    let solution = solve_rows(&[&[3.0, 1.0]]);
    assert!(solution.summary().ends_with("x1 = 0.3333"));
}
