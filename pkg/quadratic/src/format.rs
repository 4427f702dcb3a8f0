//! Human readable rendering of solver values.
//!
//! Numbers are printed like C's "%g" conversion: at most 6 significant digits
//! with trailing zeros removed, switching to scientific notation for very
//! large or very small magnitudes.

use crate::complex::ComplexNumber;

/// Number of significant digits retained when formatting.
const SIGNIFICANT_DIGITS: usize = 6;

pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Also catches -0.0
    if value == 0.0 {
        return "0".to_string();
    }

    // Rounding to the retained digits may bump the exponent (e.g. 999999.5), so
    // the exponent must be read back from the rounded representation.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strips trailing zeros after the decimal point (and the point itself if
/// nothing is left after it).
fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }

    s.trim_end_matches('0').trim_end_matches('.')
}

/// Formats a complex number, omitting the imaginary part if it is
/// approximately zero.
///
/// e.g. "1", "-0.4 + 0.2i", "0 - 0.774597i"
pub fn format_complex(number: &ComplexNumber, epsilon: f64) -> String {
    if number.is_real(epsilon) {
        format_general(number.real)
    } else if number.imaginary > 0.0 {
        format!(
            "{} + {}i",
            format_general(number.real),
            format_general(number.imaginary)
        )
    } else {
        format!(
            "{} - {}i",
            format_general(number.real),
            format_general(-number.imaginary)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::PRECISION;

    #[test]
    fn general_fixed_notation() {
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(-2.0), "-2");
        assert_eq!(format_general(-0.6), "-0.6");
        assert_eq!(format_general(0.6f64.sqrt()), "0.774597");
        assert_eq!(format_general(100000.0), "100000");
        assert_eq!(format_general(123456.4), "123456");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(1.5), "1.5");
        assert_eq!(format_general(-1.0 / 3.0), "-0.333333");
    }

    #[test]
    fn general_scientific_notation() {
        assert_eq!(format_general(1e6), "1e+06");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(1e20), "1e+20");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(-2.5e-7), "-2.5e-07");
        assert_eq!(format_general(1e300), "1e+300");
    }

    #[test]
    fn general_rounding_carries_into_exponent() {
        assert_eq!(format_general(999999.5), "1e+06");
        assert_eq!(format_general(9.999999), "10");
    }

    #[test]
    fn general_special_values() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(-0.0), "0");
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn complex_forms() {
        assert_eq!(format_complex(&ComplexNumber::real(1.0), PRECISION), "1");
        assert_eq!(
            format_complex(&ComplexNumber::new(-0.4, 0.2), PRECISION),
            "-0.4 + 0.2i"
        );
        assert_eq!(
            format_complex(&ComplexNumber::new(-0.4, -0.2), PRECISION),
            "-0.4 - 0.2i"
        );
        assert_eq!(
            format_complex(&ComplexNumber::new(0.0, -(0.6f64.sqrt())), PRECISION),
            "0 - 0.774597i"
        );
        // Imaginary noise is not printed.
        assert_eq!(format_complex(&ComplexNumber::new(3.0, 1e-9), PRECISION), "3");
    }

    #[test]
    fn display_uses_default_precision() {
        assert_eq!(ComplexNumber::new(1.0, -1.0).to_string(), "1 - 1i");
    }
}
