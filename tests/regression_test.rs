//! Cross-checks of the jump-based range counter against an integer-by-integer
//! scan, plus well-known card numbers.

use luhnix::{
    count_range, count_range_exhaustive, generate_check_digit, is_valid_luhn, NumberRange,
};

/// Helper: asserts the jump count equals the exhaustive count.
fn assert_matches_exhaustive(start: &str, end: &str) {
    let range = NumberRange::parse(start, end).expect("range should parse");
    let expected = count_range_exhaustive(&range);
    let actual = count_range(start, end).expect("count_range should not fail");
    assert_eq!(
        actual, expected,
        "count_range({start}, {end}) = {actual}, exhaustive scan found {expected}"
    );
}

// ---------- Known cards ----------

#[test]
fn known_test_card_range() {
    assert!(is_valid_luhn("4111111111111111").unwrap());
    assert_eq!(count_range("4111111111111110", "4111111111111120").unwrap(), 1);
    assert_matches_exhaustive("4111111111111110", "4111111111111120");
}

#[test]
fn known_check_digit() {
    let digit = generate_check_digit("453201511283036").unwrap();
    assert_eq!(digit, 6);
    assert!(is_valid_luhn(&format!("453201511283036{digit}")).unwrap());
}

#[test]
fn well_known_valid_numbers() {
    for number in [
        "79927398713",
        "4532015112830366",
        "6011111111111117",
        "5555555555554444",
        "378282246310005",
        "3530 1113 3330 0000",
    ] {
        assert!(is_valid_luhn(number).unwrap(), "{number} should be valid");
    }
}

// ---------- Small ranges ----------

#[test]
fn card_ranges_match_exhaustive() {
    for (start, end) in [
        ("4111111111111000", "4111111111111999"),
        ("5555555555554400", "5555555555554500"),
        ("6011000000000000", "6011000000000321"),
        ("378282246310000", "378282246310777"),
        ("79927398700", "79927398799"),
    ] {
        assert_matches_exhaustive(start, end);
    }
}

#[test]
fn every_small_range_matches_exhaustive() {
    for start in 0..300u32 {
        for end in (start + 1)..(start + 60) {
            assert_matches_exhaustive(&start.to_string(), &end.to_string());
        }
    }
}

#[test]
fn ranges_crossing_length_boundaries_match_exhaustive() {
    for (start, end) in [
        ("0", "9"),
        ("5", "25"),
        ("90", "130"),
        ("950", "1050"),
        ("9990", "10020"),
        ("99999999999990", "100000000000100"),
    ] {
        assert_matches_exhaustive(start, end);
    }
}

#[test]
fn leading_zeros_match_exhaustive() {
    assert_matches_exhaustive("0005", "0100");
    assert_matches_exhaustive("0990", "1010");
}
