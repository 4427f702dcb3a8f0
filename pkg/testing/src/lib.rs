//! Composable assertions for tests.
//!
//! Usage:
//! assert_that(&roots, elements_near(&[x1, x2], 1e-5));

use std::cmp::PartialEq;
use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;

use approx::AbsDiffEq;

pub struct MatchResult {
    pub matches: bool,
    pub explanation: String,
}

impl MatchResult {
    fn ok() -> Self {
        Self {
            matches: true,
            explanation: String::new(),
        }
    }

    fn fail(explanation: String) -> Self {
        Self {
            matches: false,
            explanation,
        }
    }
}

pub trait Matcher<T> {
    fn check(&self, value: &T) -> MatchResult;
}

pub fn assert_that<T, M: Matcher<T>>(value: &T, matcher: M) {
    let r = matcher.check(value);
    if !r.matches {
        panic!("{}", r.explanation);
    }
}

pub fn eq<T: Debug + PartialEq>(expected_value: T) -> impl Matcher<T> {
    EqualMatcher { expected_value }
}

struct EqualMatcher<T> {
    expected_value: T,
}

impl<T: Debug + PartialEq> Matcher<T> for EqualMatcher<T> {
    fn check(&self, value: &T) -> MatchResult {
        if *value != self.expected_value {
            return MatchResult::fail(format!(
                "left: {:?}\nright:{:?}\n",
                value, self.expected_value
            ));
        }

        MatchResult::ok()
    }
}

/// Matches a value which is within 'epsilon' of the expected value (in the
/// AbsDiffEq sense).
pub fn near<T: Debug + AbsDiffEq>(expected_value: T, epsilon: T::Epsilon) -> impl Matcher<T>
where
    T::Epsilon: Copy + Debug,
{
    NearMatcher {
        expected_value,
        epsilon,
    }
}

struct NearMatcher<T: AbsDiffEq> {
    expected_value: T,
    epsilon: T::Epsilon,
}

impl<T: Debug + AbsDiffEq> Matcher<T> for NearMatcher<T>
where
    T::Epsilon: Copy + Debug,
{
    fn check(&self, value: &T) -> MatchResult {
        if !value.abs_diff_eq(&self.expected_value, self.epsilon) {
            return MatchResult::fail(format!(
                "left: {:?}\nright:{:?}\n(epsilon: {:?})\n",
                value, self.expected_value, self.epsilon
            ));
        }

        MatchResult::ok()
    }
}

/// Matches a sequence whose elements are each near the element at the same
/// position in 'expected_values'.
pub fn elements_near<'a, T: 'a + Debug + AbsDiffEq, Ts: AsRef<[T]>>(
    expected_values: &'a [T],
    epsilon: T::Epsilon,
) -> impl Matcher<Ts> + 'a
where
    T::Epsilon: Copy + Debug,
{
    ElementsNearMatcher {
        expected_values,
        epsilon,
    }
}

struct ElementsNearMatcher<'a, T: AbsDiffEq> {
    expected_values: &'a [T],
    epsilon: T::Epsilon,
}

impl<'a, T: Debug + AbsDiffEq, Ts: AsRef<[T]>> Matcher<Ts> for ElementsNearMatcher<'a, T>
where
    T::Epsilon: Copy + Debug,
{
    fn check(&self, value: &Ts) -> MatchResult {
        let values = value.as_ref();

        if values.len() != self.expected_values.len() {
            return MatchResult::fail(format!(
                "Length. Expected: {}. Actual {}",
                self.expected_values.len(),
                values.len()
            ));
        }

        let mismatches = values
            .iter()
            .zip(self.expected_values.iter())
            .enumerate()
            .filter(|(_, (v, e))| !v.abs_diff_eq(e, self.epsilon))
            .map(|(i, (v, e))| format!("[{}] left: {:?}\n[{}] right:{:?}", i, v, i, e))
            .collect::<Vec<_>>();

        if !mismatches.is_empty() {
            return MatchResult::fail(format!(
                "{}\n(epsilon: {:?})\n",
                mismatches.join("\n"),
                self.epsilon
            ));
        }

        MatchResult::ok()
    }
}

pub fn unordered_elements_are<'a, T: 'a + Debug, Ts: AsRef<[T]>, M: Matcher<T>>(
    element_matchers: &'a [M],
) -> impl Matcher<Ts> + 'a {
    UnorderedElementsAreMatcher {
        element_matchers,
        element_type: PhantomData,
    }
}

struct UnorderedElementsAreMatcher<'a, M, T> {
    element_matchers: &'a [M],
    element_type: PhantomData<T>,
}

impl<'a, T: Debug, Ts: AsRef<[T]>, M: Matcher<T>> Matcher<Ts>
    for UnorderedElementsAreMatcher<'a, M, T>
{
    fn check(&self, value: &Ts) -> MatchResult {
        let values = value.as_ref();

        if values.len() != self.element_matchers.len() {
            return MatchResult::fail(format!(
                "Length. Expected: {}. Actual {}",
                self.element_matchers.len(),
                values.len()
            ));
        }

        // Indices in 'values' which we have found corresponding matches for.
        let mut matched_values = HashSet::new();

        // Indices of matchers which have been paired with a value.
        let mut matched_matchers = HashSet::new();

        for i in 0..self.element_matchers.len() {
            for j in 0..values.len() {
                if matched_values.contains(&j) || matched_matchers.contains(&i) {
                    continue;
                }

                let r = self.element_matchers[i].check(&values[j]);
                if r.matches {
                    matched_matchers.insert(i);
                    matched_values.insert(j);
                }
            }
        }

        if matched_values.len() != values.len()
            || matched_matchers.len() != self.element_matchers.len()
        {
            let mut explanation = vec!["Only on left:".to_string()];
            for (i, v) in values.iter().enumerate() {
                if !matched_values.contains(&i) {
                    explanation.push(format!("{:#?}", v));
                }
            }

            explanation.push("Only on right:".to_string());
            explanation.push(format!(
                "- num: {}",
                self.element_matchers.len() - matched_matchers.len()
            ));

            return MatchResult::fail(explanation.join("\n"));
        }

        MatchResult::ok()
    }
}
