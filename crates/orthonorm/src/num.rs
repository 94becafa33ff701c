//! Number formatting for the session output.

use std::fmt;

/// Displays an [`f64`] with a fixed number of decimal places.
///
/// Values that round to zero are always displayed without a sign, so that `-0.0` and tiny
/// negative rounding residue show up as `0.0000` instead of `-0.0000`.
///
/// `NaN` is displayed as `nan`.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64, pub usize);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }
        let s = format!("{:.*}", self.1, self.0);
        match s.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => f.write_str(rest),
            _ => f.write_str(&s),
        }
    }
}

/// Displays an [`f64`] in scientific notation with a fixed number of decimal places.
///
/// The exponent is always signed and has at least two digits (`1.500000e-07`, `0.000000e+00`),
/// which keeps columns of dot products aligned. `NaN` is displayed as `nan`.
#[derive(Debug, Clone, Copy)]
pub struct Sci(pub f64, pub usize);

impl fmt::Display for Sci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }
        let s = format!("{:.*e}", self.1, self.0);
        let Some((mantissa, exponent)) = s.split_once('e') else {
            // infinities
            return f.write_str(&s);
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed() {
        assert_eq!(Fixed(0.70710678, 4).to_string(), "0.7071");
        assert_eq!(Fixed(-0.40824829, 4).to_string(), "-0.4082");
        assert_eq!(Fixed(1.0, 6).to_string(), "1.000000");
        assert_eq!(Fixed(0.0, 4).to_string(), "0.0000");
        assert_eq!(Fixed(f64::NAN, 6).to_string(), "nan");
    }

    #[test]
    fn fixed_negative_zero() {
        assert_eq!(Fixed(-0.0, 4).to_string(), "0.0000");
        assert_eq!(Fixed(-1e-17, 4).to_string(), "0.0000");
        assert_eq!(Fixed(-0.00004, 4).to_string(), "0.0000");
        assert_eq!(Fixed(-0.00006, 4).to_string(), "-0.0001");
    }

    #[test]
    fn sci() {
        assert_eq!(Sci(0.0, 6).to_string(), "0.000000e+00");
        assert_eq!(Sci(1.5e-7, 6).to_string(), "1.500000e-07");
        assert_eq!(Sci(-2.5e3, 6).to_string(), "-2.500000e+03");
        assert_eq!(Sci(1.23456789e-17, 6).to_string(), "1.234568e-17");
        assert_eq!(Sci(1e100, 2).to_string(), "1.00e+100");
    }

    #[test]
    fn sci_non_finite() {
        assert_eq!(Sci(f64::NAN, 6).to_string(), "nan");
        assert_eq!(Sci(-f64::NAN, 6).to_string(), "nan");
        assert_eq!(Sci(f64::INFINITY, 6).to_string(), "inf");
        assert_eq!(Sci(f64::NEG_INFINITY, 6).to_string(), "-inf");
    }
}
