// Cell Conversion Tests

use crate::{check_dimensions, parse_matrix, parse_number, InputError, SolverConfig};

// ==================== SINGLE CELLS ====================

#[test]
fn test_parse_number_decimal() {
    assert_eq!(parse_number("-2.5"), Some(-2.5));
}

#[test]
fn test_parse_number_fraction() {
    assert_eq!(parse_number("3/4"), Some(0.75));
    assert_eq!(parse_number("-1/8"), Some(-0.125));
}

#[test]
fn test_parse_number_rejects_sentinels() {
    assert_eq!(parse_number("-"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("-."), None);
}

#[test]
fn test_parse_number_rejects_zero_denominator() {
    assert_eq!(parse_number("1/0"), None);
}

#[test]
fn test_parse_number_rejects_malformed_fraction() {
    assert_eq!(parse_number("1/2/3"), None);
    assert_eq!(parse_number("1/"), None);
}

#[test]
fn test_parse_number_rejects_overflow() {
    assert_eq!(parse_number("1e400"), None);
    assert_eq!(parse_number("1e300/1e-300"), None);
    assert_eq!(parse_number("1e308"), Some(1e308));
}

// ==================== GRIDS ====================

#[test]
fn test_parse_matrix() {
    let m = parse_matrix(&[vec!["1", "1/2", "3"], vec!["-4", "5.", ".5"]]).unwrap();
    assert_eq!(m.to_rows(), vec![vec![1.0, 0.5, 3.0], vec![-4.0, 5.0, 0.5]]);
}

#[test]
fn test_invalid_cell_named_one_based() {
    let err = parse_matrix(&[vec!["1", "2", "3"], vec!["4", "5", "-"]]).unwrap_err();
    assert_eq!(
        err,
        InputError::InvalidCell {
            row: 2,
            col: 3,
            text: "-".to_string()
        }
    );
    assert_eq!(err.to_string(), "Row 2, Col 3 invalid input: '-'");
}

#[test]
fn test_overflowing_cell_is_invalid() {
    let err = crate::solve(&[vec!["1e400", "1"]]).unwrap_err();
    assert_eq!(
        err,
        InputError::InvalidCell {
            row: 1,
            col: 1,
            text: "1e400".to_string()
        }
    );
}

#[test]
fn test_first_invalid_cell_in_row_major_order() {
    let err = parse_matrix(&[vec!["1", "x", "3"], vec!["y", "5", "6"]]).unwrap_err();
    assert!(matches!(err, InputError::InvalidCell { row: 1, col: 2, .. }));
}

#[test]
fn test_empty_grid() {
    let cells: Vec<Vec<&str>> = vec![];
    assert_eq!(parse_matrix(&cells), Err(InputError::EmptyMatrix));
}

#[test]
fn test_ragged_grid_reported_before_cells() {
    let err = parse_matrix(&[vec!["1", "2"], vec!["bad"]]).unwrap_err();
    assert_eq!(
        err,
        InputError::RaggedRow {
            row: 2,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_missing_rhs_column() {
    let err = parse_matrix(&[vec!["1"]]).unwrap_err();
    assert_eq!(err, InputError::TooFewColumns { cols: 1 });
}

// ==================== DIMENSIONS ====================

#[test]
fn test_dimensions_within_bounds() {
    let m = parse_matrix(&[vec!["1", "2"]]).unwrap();
    assert_eq!(check_dimensions(&m, &SolverConfig::default()), Ok(()));
}

#[test]
fn test_too_many_equations() {
    let cells: Vec<Vec<&str>> = (0..13).map(|_| vec!["1", "1"]).collect();
    let m = parse_matrix(&cells).unwrap();
    assert_eq!(
        check_dimensions(&m, &SolverConfig::default()),
        Err(InputError::DimensionOutOfRange {
            what: "equations",
            value: 13,
            min: 1,
            max: 12
        })
    );
}

#[test]
fn test_too_many_unknowns_for_custom_bound() {
    let m = parse_matrix(&[vec!["1", "1", "1", "1"]]).unwrap();
    let config = SolverConfig::default().with_max_size(2);
    assert!(matches!(
        check_dimensions(&m, &config),
        Err(InputError::DimensionOutOfRange {
            what: "unknowns",
            value: 3,
            ..
        })
    ));
}

#[test]
fn test_exit_codes_are_distinct() {
    let errors = [
        InputError::InvalidCell {
            row: 1,
            col: 1,
            text: String::new(),
        },
        InputError::EmptyMatrix,
        InputError::TooFewColumns { cols: 1 },
        InputError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1,
        },
        InputError::DimensionOutOfRange {
            what: "equations",
            value: 0,
            min: 1,
            max: 12,
        },
    ];
    let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
    codes.dedup();
    assert_eq!(codes, vec![101, 102, 103, 104, 105]);
}
