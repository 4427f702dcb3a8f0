/// Default tolerance below which two floating point values are considered
/// equal.
pub const PRECISION: f64 = 1e-5;

/// Whether or not 'value' is within 'epsilon' of 'target'.
///
/// The comparison is strict so a difference of exactly 'epsilon' is NOT
/// approximately equal. A NaN on either side is never approximately equal to
/// anything.
pub fn is_approx_equal(value: f64, target: f64, epsilon: f64) -> bool {
    (value - target).abs() < epsilon
}

/// Same as is_approx_equal() using the default PRECISION.
pub fn is_approximately(value: f64, target: f64) -> bool {
    is_approx_equal(value, target, PRECISION)
}

/// Replaces 'value' with exactly 'target' if they are approximately equal.
///
/// Used to get rid of tiny residues like -0.0 or 1e-17 left over from floating
/// point subtraction.
pub fn snap_to(value: f64, target: f64, epsilon: f64) -> f64 {
    if is_approx_equal(value, target, epsilon) {
        target
    } else {
        value
    }
}
