//! Unit tests for candidate validation.

use super::is_valid;

#[test]
fn three_digit_code_is_valid() {
    assert!(is_valid("118"));
}

#[test]
fn two_digit_code_is_too_short() {
    assert!(!is_valid("12"));
}

#[test]
fn boundary_is_exactly_three_digits() {
    assert!(!is_valid("99"));
    assert!(is_valid("100"));
}

#[test]
fn subcode_suffix_is_valid() {
    assert!(is_valid("118.01"));
}

#[test]
fn short_integer_part_with_long_subcode_is_invalid() {
    // Length rule applies to the part before the first period only.
    assert!(!is_valid("18.0123"));
}

#[test]
fn non_digit_residue_is_invalid() {
    assert!(!is_valid("118a"));
    assert!(!is_valid("1 18"));
}

#[test]
fn lone_period_is_invalid() {
    assert!(!is_valid("."));
}

#[test]
fn long_codes_are_valid() {
    assert!(is_valid("1180"));
    assert!(is_valid("118.01.02"));
}
