//! Angle conversion and loose numeric coercion.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Input accepted by the coercing helpers: a number or its text form.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Text form as a dynamic runtime would print it: `NaN`, `Infinity`,
    /// `-Infinity`, `0` for either zero, otherwise the shortest decimal
    /// that round-trips.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) if n.is_nan() => "NaN".to_owned(),
            Self::Number(n) if n.is_infinite() => {
                if n.is_sign_negative() { "-Infinity".to_owned() } else { "Infinity".to_owned() }
            }
            Self::Number(n) if *n == 0.0 => "0".to_owned(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Parse the longest leading decimal literal of `text`.
///
/// Leading whitespace (see [`is_runtime_whitespace`]) is skipped. Accepts
/// an optional sign followed by `Infinity` or digits with an optional
/// fraction and exponent. Trailing garbage is ignored. Returns NaN when no prefix parses.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start_matches(is_runtime_whitespace);
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Whitespace and line terminators skipped before a number: TAB, VT, FF,
/// space, NBSP, BOM, the other `Zs` spaces, LF, CR, LS and PS. NEL (U+0085)
/// is not included.
pub fn is_runtime_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

pub fn rad_to_deg(rad: f64) -> f64 {
    (180.0 / PI) * rad
}

/// One of the eight compass points.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl From<u8> for CardinalDirection {
    /// Sector index, 1 = N through 8 = NW. Anything else is N.
    fn from(sector: u8) -> Self {
        match sector {
            2 => Self::NE,
            3 => Self::E,
            4 => Self::SE,
            5 => Self::S,
            6 => Self::SW,
            7 => Self::W,
            8 => Self::NW,
            _ => Self::N,
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };
        f.write_str(label)
    }
}

/// Compass point for a bearing in degrees, using 45-degree sectors centred
/// on each point. Upper sector edges belong to the sector.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn deg_to_cardinal(deg: f64) -> CardinalDirection {
    let mut shifted = deg.rem_euclid(360.0) + 22.5;
    if shifted > 360.0 {
        shifted -= 360.0;
    }
    CardinalDirection::from((shifted / 45.0).ceil() as u8)
}
