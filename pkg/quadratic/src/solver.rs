use std::fmt;

use crate::complex::ComplexNumber;
use crate::format::format_general;
use crate::precision::{is_approx_equal, PRECISION};

/// Which kind of solution set an equation has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolutionCount {
    NoSolution,
    /// A single root (possibly a repeated one).
    OneSolution,
    /// Two distinct roots: either both real or a complex conjugate pair.
    TwoSolutions,
    /// Every number is a solution (0 = 0).
    InfiniteSolutions,
}

impl SolutionCount {
    /// Number of roots stored in a QuadraticSolution with this count or None
    /// if the solution set is unbounded.
    pub fn num_roots(&self) -> Option<usize> {
        match self {
            SolutionCount::NoSolution => Some(0),
            SolutionCount::OneSolution => Some(1),
            SolutionCount::TwoSolutions => Some(2),
            SolutionCount::InfiniteSolutions => None,
        }
    }
}

/// Coefficients of the equation 'a*x^2 + b*x + c = 0'.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Multiplies every coefficient by 'k'. For k != 0, this describes the
    /// same equation.
    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.a * k, self.b * k, self.c * k)
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}) * x2 + ({}) * x + ({}) = 0",
            format_general(self.a),
            format_general(self.b),
            format_general(self.c)
        )
    }
}

/// Result of solving a single equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticSolution {
    pub count: SolutionCount,

    /// Ordered so that roots[0] <= roots[1] (by real part and then by
    /// imaginary part).
    ///
    /// For OneSolution both entries hold the same root. For NoSolution and
    /// InfiniteSolutions both are zero.
    pub roots: [ComplexNumber; 2],
}

impl QuadraticSolution {
    fn none() -> Self {
        Self {
            count: SolutionCount::NoSolution,
            roots: [ComplexNumber::ZERO; 2],
        }
    }

    fn infinite() -> Self {
        Self {
            count: SolutionCount::InfiniteSolutions,
            roots: [ComplexNumber::ZERO; 2],
        }
    }

    fn one(root: ComplexNumber) -> Self {
        Self {
            count: SolutionCount::OneSolution,
            roots: [root, root],
        }
    }

    fn two(first: ComplexNumber, second: ComplexNumber) -> Self {
        Self {
            count: SolutionCount::TwoSolutions,
            roots: [first, second],
        }
    }

    pub fn first(&self) -> &ComplexNumber {
        &self.roots[0]
    }

    pub fn second(&self) -> &ComplexNumber {
        &self.roots[1]
    }

    /// The roots which are actually meaningful given the count.
    pub fn roots(&self) -> &[ComplexNumber] {
        let n = self.count.num_roots().unwrap_or(0);
        &self.roots[0..n]
    }
}

/// Classifies and solves quadratic equations.
///
/// All comparisons against zero (and between roots when ordering them) are
/// approximate with respect to 'precision'.
#[derive(Clone, Copy, Debug)]
pub struct Solver {
    precision: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::with_precision(PRECISION)
    }

    pub fn with_precision(precision: f64) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    fn is_zero(&self, value: f64) -> bool {
        is_approx_equal(value, 0.0, self.precision)
    }

    /// Never fails: every triple maps to exactly one SolutionCount. Non-finite
    /// coefficients fall through to the quadratic case and produce NaN/inf
    /// roots rather than panicking.
    pub fn solve(&self, coefficients: &Coefficients) -> QuadraticSolution {
        let Coefficients { a, b, c } = *coefficients;
        let (a_zero, b_zero, c_zero) = (self.is_zero(a), self.is_zero(b), self.is_zero(c));

        // First matching case wins. The division in the linear case is guarded
        // by !b_zero and the quadratic case is only reached when !a_zero.
        match (a_zero, b_zero, c_zero) {
            (true, true, true) => {
                trace!("{}: identity", coefficients);
                QuadraticSolution::infinite()
            }
            (true, true, false) => {
                trace!("{}: contradiction", coefficients);
                QuadraticSolution::none()
            }
            (true, false, true) | (false, true, true) => {
                trace!("{}: single zero root", coefficients);
                QuadraticSolution::one(ComplexNumber::ZERO)
            }
            (true, false, false) => {
                trace!("{}: linear", coefficients);
                QuadraticSolution::one(ComplexNumber::real(-c / b))
            }
            (false, _, _) => self.solve_quadratic(a, b, c),
        }
    }

    /// Solves the equation assuming 'a' is not approximately zero.
    fn solve_quadratic(&self, a: f64, b: f64, c: f64) -> QuadraticSolution {
        let discriminant = b * b - 4.0 * a * c;
        let sqrt_d = discriminant.abs().sqrt();
        let inverse_double_a = 1.0 / (2.0 * a);

        trace!(
            "quadratic: discriminant = {}, 1/2a = {}",
            discriminant,
            inverse_double_a
        );

        let solution = if self.is_zero(sqrt_d) {
            QuadraticSolution::one(ComplexNumber::real(-b * inverse_double_a))
        } else if discriminant < 0.0 {
            let real = -b * inverse_double_a;
            let imaginary = sqrt_d * inverse_double_a;
            QuadraticSolution::two(
                ComplexNumber::new(real, imaginary),
                ComplexNumber::new(real, -imaginary),
            )
        } else {
            QuadraticSolution::two(
                ComplexNumber::real((-b - sqrt_d) * inverse_double_a),
                ComplexNumber::real((-b + sqrt_d) * inverse_double_a),
            )
        };

        self.normalize(solution)
    }

    /// Removes near-zero residues from the roots and puts them in canonical
    /// order.
    fn normalize(&self, mut solution: QuadraticSolution) -> QuadraticSolution {
        let [mut x1, mut x2] = solution.roots;
        x1 = x1.snap_zeros(self.precision);
        x2 = x2.snap_zeros(self.precision);

        if is_approx_equal(x1.real, x2.real, self.precision) {
            x2.real = x1.real;
            if x1.imaginary > x2.imaginary {
                std::mem::swap(&mut x1, &mut x2);
            }
        } else if x1.real > x2.real {
            std::mem::swap(&mut x1, &mut x2);
        }

        solution.roots = [x1, x2];
        solution
    }
}

/// Solves 'a*x^2 + b*x + c = 0' using the default PRECISION.
pub fn solve(a: f64, b: f64, c: f64) -> QuadraticSolution {
    Solver::new().solve(&Coefficients::new(a, b, c))
}

/// Evaluates 'a*x^2 + b*x + c' at a (possibly complex) point.
pub fn evaluate(coefficients: &Coefficients, x: &ComplexNumber) -> ComplexNumber {
    let Coefficients { a, b, c } = *coefficients;
    // Horner's form: (a*x + b)*x + c
    (x * a + ComplexNumber::real(b)) * x + ComplexNumber::real(c)
}
