//! Solver for quadratic equations of the form `ax^2 + bx + c = 0` over the
//! complex numbers.
//!
//! ```
//! use quadratic::SolutionCount;
//!
//! let solution = quadratic::solve(1.0, 1.0, -2.0);
//! assert_eq!(solution.count, SolutionCount::TwoSolutions);
//! assert_eq!(
//!     quadratic::report::describe(&solution),
//!     "Solution: x = -2 OR x = 1"
//! );
//! ```

extern crate failure;
#[macro_use]
extern crate auto_ops;
#[cfg_attr(test, macro_use)]
extern crate approx;
#[macro_use]
extern crate tracing;

pub mod complex;
pub mod errors;
pub mod format;
pub mod input;
pub mod precision;
pub mod report;
pub mod solver;

pub use complex::ComplexNumber;
pub use precision::{is_approx_equal, is_approximately, PRECISION};
pub use solver::{solve, Coefficients, QuadraticSolution, SolutionCount, Solver};
