//! Text shown to users of the interactive solver.

use crate::format::format_general;
use crate::solver::{QuadraticSolution, SolutionCount};

pub const TITLE: &str = "=== Quadratic equation solver ===";
pub const SUBTITLE: &str = "=== Equation ax2 + bx + c = 0 ===";
pub const PROMPT: &str = "Enter the coefficients in the following format \"a b c\": ";

/// Header printed before reading coefficients. Does not end with a newline so
/// that the user types on the prompt line.
pub fn banner() -> String {
    format!("{}\n{}\n{}", TITLE, SUBTITLE, PROMPT)
}

/// Single line (without a trailing newline) describing the solution set.
pub fn describe(solution: &QuadraticSolution) -> String {
    match solution.count {
        SolutionCount::NoSolution => "No solution".to_string(),
        SolutionCount::OneSolution => {
            format!("Solution: x = {}", format_general(solution.first().real))
        }
        SolutionCount::TwoSolutions => format!(
            "Solution: x = {} OR x = {}",
            solution.first(),
            solution.second()
        ),
        SolutionCount::InfiniteSolutions => "Solution is any number".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn describes_every_outcome() {
        assert_eq!(describe(&solve(0.0, 0.0, 0.0)), "Solution is any number");
        assert_eq!(describe(&solve(0.0, 0.0, 5.0)), "No solution");
        assert_eq!(describe(&solve(0.0, 5.0, 0.0)), "Solution: x = 0");
        assert_eq!(describe(&solve(0.0, 5.0, 3.0)), "Solution: x = -0.6");
        assert_eq!(describe(&solve(1.0, 2.0, 1.0)), "Solution: x = -1");
        assert_eq!(describe(&solve(1.0, 1.0, -2.0)), "Solution: x = -2 OR x = 1");
    }

    #[test]
    fn describes_complex_pairs() {
        assert_eq!(
            describe(&solve(5.0, 4.0, 1.0)),
            "Solution: x = -0.4 - 0.2i OR x = -0.4 + 0.2i"
        );
        assert_eq!(
            describe(&solve(5.0, 0.0, 3.0)),
            "Solution: x = 0 - 0.774597i OR x = 0 + 0.774597i"
        );
        assert_eq!(
            describe(&solve(5.0, 0.0, -3.0)),
            "Solution: x = -0.774597 OR x = 0.774597"
        );
    }

    #[test]
    fn banner_ends_with_prompt() {
        let b = banner();
        assert!(b.starts_with(TITLE));
        assert!(b.ends_with("\"a b c\": "));
        assert_eq!(b.lines().count(), 3);
    }
}
