use std::fmt;

use approx::AbsDiffEq;

use crate::format::format_complex;
use crate::precision::{is_approx_equal, snap_to, PRECISION};

/// A number of the form 'real + imaginary * i'.
///
/// NOTE: PartialEq is exact. Solver results should instead be compared with
/// the approx traits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexNumber {
    pub real: f64,
    pub imaginary: f64,
}

impl ComplexNumber {
    pub const ZERO: Self = Self {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Creates a number with no imaginary component.
    pub fn real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    pub fn conj(&self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Absolute value |z|.
    pub fn norm(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    pub fn is_real(&self, epsilon: f64) -> bool {
        is_approx_equal(self.imaginary, 0.0, epsilon)
    }

    /// Replaces any component within 'epsilon' of zero with exactly +0.0.
    pub fn snap_zeros(&self, epsilon: f64) -> Self {
        Self::new(
            snap_to(self.real, 0.0, epsilon),
            snap_to(self.imaginary, 0.0, epsilon),
        )
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::real(real)
    }
}

impl_op_ex!(+ |lhs: &ComplexNumber, rhs: &ComplexNumber| -> ComplexNumber {
    ComplexNumber::new(lhs.real + rhs.real, lhs.imaginary + rhs.imaginary)
});

impl_op_ex!(-|lhs: &ComplexNumber, rhs: &ComplexNumber| -> ComplexNumber {
    ComplexNumber::new(lhs.real - rhs.real, lhs.imaginary - rhs.imaginary)
});

impl_op_ex!(*|lhs: &ComplexNumber, rhs: &ComplexNumber| -> ComplexNumber {
    ComplexNumber::new(
        lhs.real * rhs.real - lhs.imaginary * rhs.imaginary,
        lhs.real * rhs.imaginary + lhs.imaginary * rhs.real,
    )
});

impl_op_ex_commutative!(*|lhs: &ComplexNumber, rhs: f64| -> ComplexNumber {
    ComplexNumber::new(lhs.real * rhs, lhs.imaginary * rhs)
});

impl_op_ex!(-|v: &ComplexNumber| -> ComplexNumber { ComplexNumber::new(-v.real, -v.imaginary) });

impl AbsDiffEq for ComplexNumber {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        PRECISION
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.real, &other.real, epsilon)
            && f64::abs_diff_eq(&self.imaginary, &other.imaginary, epsilon)
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_complex(self, PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = ComplexNumber::new(3.0, 4.0);
        let b = ComplexNumber::new(1.0, -2.0);

        assert_eq!(a + b, ComplexNumber::new(4.0, 2.0));
        assert_eq!(&a - &b, ComplexNumber::new(2.0, 6.0));
        assert_eq!(a * b, ComplexNumber::new(11.0, -2.0));
        assert_eq!(a * 2.0, ComplexNumber::new(6.0, 8.0));
        assert_eq!(2.0 * a, ComplexNumber::new(6.0, 8.0));
        assert_eq!(-a, ComplexNumber::new(-3.0, -4.0));
    }

    #[test]
    fn conjugate_product_is_real() {
        let z = ComplexNumber::new(-0.4, 0.2);
        let p = z * z.conj();
        assert_abs_diff_eq!(p, ComplexNumber::real(0.2), epsilon = 1e-12);
        assert!(p.is_real(PRECISION));
        assert_abs_diff_eq!(ComplexNumber::new(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn snap_zeros_clears_signs() {
        let z = ComplexNumber::new(-0.0, -1e-9).snap_zeros(PRECISION);
        assert!(z.real.is_sign_positive());
        assert!(z.imaginary.is_sign_positive());
        assert_eq!(z, ComplexNumber::ZERO);

        let z = ComplexNumber::new(-1.0, 1e-9).snap_zeros(PRECISION);
        assert_eq!(z, ComplexNumber::real(-1.0));
    }

    #[test]
    fn approx_equality_is_component_wise() {
        let a = ComplexNumber::new(1.0, 1.0);
        assert!(a.abs_diff_eq(&ComplexNumber::new(1.0 + 1e-7, 1.0 - 1e-7), PRECISION));
        assert!(!a.abs_diff_eq(&ComplexNumber::new(1.0, 1.1), PRECISION));
    }
}
