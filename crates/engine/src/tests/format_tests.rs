// Number Formatting Tests

use crate::format_smart;

// ==================== ROUNDING ====================

#[test]
fn test_rounds_away_tiny_fraction() {
    assert_eq!(format_smart(2.00004, 4), "2");
}

#[test]
fn test_one_third() {
    assert_eq!(format_smart(1.0 / 3.0, 4), "0.3333");
}

#[test]
fn test_half_up() {
    assert_eq!(format_smart(0.00005, 4), "0.0001");
    assert_eq!(format_smart(-1.23456, 4), "-1.2346");
}

#[test]
fn test_half_up_uses_shortest_decimal_text() {
    // 2.675 is stored as 2.67499999..., but reads as 2.675
    assert_eq!(format_smart(2.675, 2), "2.68");
}

#[test]
fn test_carry_into_integer_part() {
    assert_eq!(format_smart(0.99995, 4), "1");
    assert_eq!(format_smart(99.99995, 4), "100");
    assert_eq!(format_smart(-9.99999, 4), "-10");
}

#[test]
fn test_zero_digits() {
    assert_eq!(format_smart(2.5, 0), "3");
    assert_eq!(format_smart(2.4, 0), "2");
}

#[test]
fn test_more_digits() {
    assert_eq!(format_smart(1.0 / 3.0, 6), "0.333333");
}

// ==================== TRAILING ZEROS ====================

#[test]
fn test_integers_have_no_point() {
    assert_eq!(format_smart(100.0, 4), "100");
    assert_eq!(format_smart(-7.0, 4), "-7");
}

#[test]
fn test_trailing_zeros_stripped() {
    assert_eq!(format_smart(2.5, 4), "2.5");
    assert_eq!(format_smart(0.1 + 0.2, 4), "0.3");
}

#[test]
fn test_large_values_stay_plain() {
    assert_eq!(format_smart(123456789.0, 4), "123456789");
    assert_eq!(format_smart(1e21, 4), "1000000000000000000000");
}

// ==================== ZERO AND SIGN ====================

#[test]
fn test_zero() {
    assert_eq!(format_smart(0.0, 4), "0");
}

#[test]
fn test_negative_zero() {
    assert_eq!(format_smart(-0.0, 4), "0");
}

#[test]
fn test_small_negative_rounds_to_plain_zero() {
    assert_eq!(format_smart(-0.00001, 4), "0");
    assert_eq!(format_smart(1e-7, 4), "0");
}

// ==================== SPECIAL VALUES ====================

#[test]
fn test_nan() {
    assert_eq!(format_smart(f64::NAN, 4), "NaN");
}

#[test]
fn test_infinities() {
    assert_eq!(format_smart(f64::INFINITY, 4), "∞");
    assert_eq!(format_smart(f64::NEG_INFINITY, 4), "-∞");
}
