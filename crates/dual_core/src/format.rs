//! Textual forms of a dual number.
//!
//! `Display` / `FromStr` use the canonical form `<x>±<y>ε` (for example
//! `1+2ε` or `3.5-0.25ε`): the sign of `y` is always written and there is no
//! whitespace. Components are printed with the shortest digits that parse back
//! to the same `f64`, switching to exponent notation (`1e+300`, `2.5e-07`) when
//! the decimal exponent falls outside `[-4, 16)`. The form round-trips exactly.
//!
//! `Debug` uses the diagnostic form `<dual:1.000+2.000ε>`, four significant
//! digits per component. It is not meant to be parsed.

use crate::dual::Dual;
use crate::error::DualError;
use std::fmt;
use std::str::FromStr;

/// Marker written after the indeterminate part.
pub const INDETERMINATE: char = 'ε';

const DEBUG_DIGITS: usize = 4;

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            format_shortest(self.x),
            imaginary_sign(self.y),
            format_shortest(self.y),
            INDETERMINATE
        )
    }
}

impl fmt::Debug for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = imaginary_sign(self.y);
        write!(
            f,
            "<dual:{}{}{}{}>",
            format_significant(self.x, DEBUG_DIGITS),
            sign,
            format_significant(self.y, DEBUG_DIGITS),
            INDETERMINATE
        )
    }
}

impl FromStr for Dual {
    type Err = DualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let body = text.strip_suffix(INDETERMINATE).ok_or_else(|| {
            DualError::construction(format!("{text:?} does not end with '{INDETERMINATE}'"))
        })?;

        let split = split_index(body).ok_or_else(|| {
            DualError::construction(format!(
                "{text:?} is not of the form <x>±<y>{INDETERMINATE}"
            ))
        })?;
        let (re, im) = body.split_at(split);

        let x = re
            .parse::<f64>()
            .map_err(|e| DualError::construction(format!("real part {re:?}: {e}")))?;
        let y = im
            .parse::<f64>()
            .map_err(|e| DualError::construction(format!("indeterminate part {im:?}: {e}")))?;
        Ok(Dual::new(x, y))
    }
}

impl TryFrom<&str> for Dual {
    type Error = DualError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Byte index of the sign that starts the indeterminate part: the last `+`/`-`
/// that neither leads the string nor belongs to an exponent.
fn split_index(body: &str) -> Option<usize> {
    let mut prev: Option<char> = None;
    let mut found = None;
    for (i, c) in body.char_indices() {
        if (c == '+' || c == '-') && i > 0 && !matches!(prev, Some('e') | Some('E')) {
            found = Some(i);
        }
        prev = Some(c);
    }
    found
}

/// Separator written before `y`. NaN carries no usable sign and always gets `+`.
fn imaginary_sign(y: f64) -> &'static str {
    if y.is_sign_negative() && !y.is_nan() {
        ""
    } else {
        "+"
    }
}

/// Shortest round-trip digits, in exponent notation when the decimal exponent
/// is below -4 or at least 16.
pub(crate) fn format_shortest(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_finite() && value != 0.0 {
        let sci = format!("{value:e}");
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                if !(-4..16).contains(&exp) {
                    let sign = if exp < 0 { '-' } else { '+' };
                    return format!("{mantissa}e{sign}{:02}", exp.abs());
                }
            }
        }
    }
    format!("{value}")
}

/// `%#.Ng`-style formatting: `digits` significant digits, trailing zeros kept,
/// scientific notation outside `1e-4 <= |v| < 10^digits`.
pub(crate) fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if !value.is_finite() {
        return format!("{value}");
    }
    if value == 0.0 {
        return format!("{:.*}", digits - 1, value);
    }

    // Round first so the exponent reflects carries such as 9.9996 -> 1.000e1.
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_shortest, format_significant};
    use crate::dual::Dual;
    use crate::error::DualError;

    #[test]
    fn display_writes_canonical_form() {
        assert_eq!(Dual::new(1.0, 2.0).to_string(), "1+2ε");
        assert_eq!(Dual::new(3.5, -0.25).to_string(), "3.5-0.25ε");
        assert_eq!(Dual::new(-1.0, 0.0).to_string(), "-1+0ε");
        assert_eq!(Dual::new(0.0, f64::NAN).to_string(), "0+NaNε");
        assert_eq!(Dual::new(0.0, -f64::NAN).to_string(), "0+NaNε");
    }

    #[test]
    fn display_switches_to_exponent_notation() {
        let big_small = Dual::new(1e300, 1e-300);
        assert_eq!(big_small.to_string(), "1e+300+1e-300ε");
        assert_eq!(
            big_small.to_string().parse::<Dual>().expect("parse"),
            big_small
        );
        assert_eq!(Dual::new(-2.5e-7, -6.02e23).to_string(), "-2.5e-07-6.02e+23ε");
        assert_eq!(Dual::new(1e16, 0.0001).to_string(), "1e+16+0.0001ε");
        assert_eq!(Dual::new(1e15, 0.00001).to_string(), "1000000000000000+1e-05ε");
    }

    #[test]
    fn shortest_formatting_keeps_plain_range_and_specials() {
        assert_eq!(format_shortest(0.1), "0.1");
        assert_eq!(format_shortest(-0.0), "-0");
        assert_eq!(format_shortest(123.456), "123.456");
        assert_eq!(format_shortest(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_shortest(f64::NAN), "NaN");
    }

    #[test]
    fn parse_reads_canonical_form() {
        assert_eq!("1+2ε".parse::<Dual>().expect("parse"), Dual::new(1.0, 2.0));
        assert_eq!(
            "3.5-0.25ε".parse::<Dual>().expect("parse"),
            Dual::new(3.5, -0.25)
        );
        assert_eq!(
            "-4-5ε".parse::<Dual>().expect("parse"),
            Dual::new(-4.0, -5.0)
        );
        assert_eq!(
            "1e-3+2E+2ε".parse::<Dual>().expect("parse"),
            Dual::new(0.001, 200.0)
        );
        assert_eq!(
            Dual::try_from(" 2-1ε ").expect("parse"),
            Dual::new(2.0, -1.0)
        );
    }

    #[test]
    fn canonical_form_round_trips_exactly() {
        for value in [
            Dual::new(0.1, 1.0 / 3.0),
            Dual::new(-1e-12, 6.02e23),
            Dual::new(f64::MAX, -f64::MIN_POSITIVE),
        ] {
            let parsed: Dual = value.to_string().parse().expect("round trip");
            assert_eq!(parsed.x.to_bits(), value.x.to_bits());
            assert_eq!(parsed.y.to_bits(), value.y.to_bits());
        }
        let inf: Dual = Dual::new(f64::INFINITY, f64::NEG_INFINITY)
            .to_string()
            .parse()
            .expect("infinities");
        assert!(inf.x.is_infinite() && inf.y.is_infinite() && inf.y < 0.0);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in ["1+2", "1ε", "-1ε", "+ε", "a+bε", "1+2εε", ""] {
            match text.parse::<Dual>() {
                Err(DualError::InvalidConstruction(_)) => {}
                other => panic!("expected construction error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn debug_uses_four_significant_digits() {
        assert_eq!(format!("{:?}", Dual::new(1.0, 2.0)), "<dual:1.000+2.000ε>");
        assert_eq!(
            format!("{:?}", Dual::new(1.0 / 3.0, -2.0 / 9.0)),
            "<dual:0.3333-0.2222ε>"
        );
        assert_eq!(
            format!("{:?}", Dual::new(123456.0, 0.0)),
            "<dual:1.235e+05+0.000ε>"
        );
    }

    #[test]
    fn debug_writes_nan_with_separator() {
        assert_eq!(
            format!("{:?}", Dual::new(f64::NAN, -f64::NAN)),
            "<dual:NaN+NaNε>"
        );
        assert_eq!(format!("{:?}", Dual::new(1.0, f64::NAN)), "<dual:1.000+NaNε>");
    }

    #[test]
    fn significant_formatting_handles_carries_and_small_values() {
        assert_eq!(format_significant(9.99996, 4), "10.00");
        assert_eq!(format_significant(0.000012344, 4), "1.234e-05");
        assert_eq!(format_significant(-0.5, 4), "-0.5000");
        assert_eq!(format_significant(f64::INFINITY, 4), "inf");
    }
}
