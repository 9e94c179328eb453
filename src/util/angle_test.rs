use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// rad_to_deg
// =============================================================

#[test]
fn rad_to_deg_known_angles() {
    assert_eq!(rad_to_deg(0.0), 0.0);
    assert!(close(rad_to_deg(PI), 180.0));
    assert!(close(rad_to_deg(FRAC_PI_2), 90.0));
    assert!(close(rad_to_deg(-PI), -180.0));
}

#[test]
fn rad_to_deg_propagates_nan() {
    assert!(rad_to_deg(f64::NAN).is_nan());
}

// =============================================================
// Value::to_text
// =============================================================

#[test]
fn to_text_uses_runtime_spellings_for_special_values() {
    assert_eq!(Value::from(f64::NAN).to_text(), "NaN");
    assert_eq!(Value::from(f64::INFINITY).to_text(), "Infinity");
    assert_eq!(Value::from(f64::NEG_INFINITY).to_text(), "-Infinity");
    assert_eq!(Value::from(-0.0).to_text(), "0");
}

#[test]
fn to_text_finite_numbers_round_trip() {
    for n in [1.0, -2.5, 3.14, 1e-7, 1e21, f64::MAX, f64::MIN_POSITIVE, PI] {
        assert_eq!(parse_float(&Value::from(n).to_text()), n, "value {n}");
    }
}

#[test]
fn to_text_passes_text_through() {
    assert_eq!(Value::from("  12abc").to_text(), "  12abc");
    assert_eq!(Value::from(7).to_text(), "7");
}

// =============================================================
// parse_float
// =============================================================

#[test]
fn parse_float_plain_decimals() {
    assert_eq!(parse_float("3.14"), 3.14);
    assert_eq!(parse_float("-42"), -42.0);
    assert_eq!(parse_float("+0.5"), 0.5);
    assert_eq!(parse_float(".5"), 0.5);
    assert_eq!(parse_float("5."), 5.0);
}

#[test]
fn parse_float_skips_leading_whitespace_and_trailing_garbage() {
    assert_eq!(parse_float("  \t\n2.5rad"), 2.5);
    assert_eq!(parse_float("1.2.3"), 1.2);
    assert_eq!(parse_float("10px"), 10.0);
}

#[test]
fn parse_float_skips_bom_and_unicode_spaces() {
    assert_eq!(parse_float("\u{FEFF}3.14"), 3.14);
    assert_eq!(parse_float("\u{00A0}\u{2003}\u{3000}1.5"), 1.5);
    assert_eq!(parse_float("\u{2028}\u{2029}\u{000B}\u{000C}-2"), -2.0);
}

#[test]
fn parse_float_does_not_skip_next_line_or_zero_width_space() {
    assert!(parse_float("\u{0085}3.14").is_nan());
    assert!(parse_float("\u{200B}3.14").is_nan());
    assert!(parse_float("\u{180E}3.14").is_nan());
}

#[test]
fn runtime_whitespace_set() {
    for c in ['\t', '\n', '\r', ' ', '\u{00A0}', '\u{FEFF}', '\u{1680}', '\u{200A}', '\u{202F}'] {
        assert!(is_runtime_whitespace(c), "char {:?}", c);
    }
    for c in ['\u{0085}', '\u{200B}', 'x', '0'] {
        assert!(!is_runtime_whitespace(c), "char {:?}", c);
    }
}

#[test]
fn parse_float_exponents() {
    assert_eq!(parse_float("1e3"), 1000.0);
    assert_eq!(parse_float("2.5E-2"), 0.025);
    assert_eq!(parse_float("7e"), 7.0);
    assert_eq!(parse_float("7e+"), 7.0);
    assert_eq!(parse_float("7ex"), 7.0);
}

#[test]
fn parse_float_infinity() {
    assert_eq!(parse_float("Infinity"), f64::INFINITY);
    assert_eq!(parse_float("-Infinityish"), f64::NEG_INFINITY);
    assert!(parse_float("inf").is_nan());
}

#[test]
fn parse_float_nan_when_no_prefix_parses() {
    for text in ["", "   ", "abc", "not-a-number", "-", ".", "NaN", "e5", "+.e1"] {
        assert!(parse_float(text).is_nan(), "input {text:?}");
    }
}

// =============================================================
// deg_to_cardinal
// =============================================================

#[test]
fn deg_to_cardinal_centres() {
    let expected = [
        (0.0, CardinalDirection::N),
        (45.0, CardinalDirection::NE),
        (90.0, CardinalDirection::E),
        (135.0, CardinalDirection::SE),
        (180.0, CardinalDirection::S),
        (225.0, CardinalDirection::SW),
        (270.0, CardinalDirection::W),
        (315.0, CardinalDirection::NW),
    ];
    for (deg, dir) in expected {
        assert_eq!(deg_to_cardinal(deg), dir, "bearing {deg}");
    }
}

#[test]
fn deg_to_cardinal_sector_edges() {
    assert_eq!(deg_to_cardinal(22.5), CardinalDirection::N);
    assert_eq!(deg_to_cardinal(22.6), CardinalDirection::NE);
    assert_eq!(deg_to_cardinal(337.5), CardinalDirection::NW);
    assert_eq!(deg_to_cardinal(337.6), CardinalDirection::N);
    assert_eq!(deg_to_cardinal(359.9), CardinalDirection::N);
}

#[test]
fn deg_to_cardinal_wraps_out_of_range_bearings() {
    assert_eq!(deg_to_cardinal(-90.0), CardinalDirection::W);
    assert_eq!(deg_to_cardinal(360.0), CardinalDirection::N);
    assert_eq!(deg_to_cardinal(450.0), CardinalDirection::E);
}

#[test]
fn cardinal_direction_display() {
    assert_eq!(CardinalDirection::SW.to_string(), "SW");
    assert_eq!(CardinalDirection::from(0).to_string(), "N");
}
