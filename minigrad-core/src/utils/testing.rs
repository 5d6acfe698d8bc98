use crate::scalar::Scalar;

/// Checks that a leaf scalar holds an accumulated derivative close to `expected`.
/// Panics if the derivative is missing or differs by more than `tolerance`.
pub fn check_derivative_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let derivative = match actual.derivative() {
        Some(d) => d,
        None => panic!(
            "Scalar {} has no accumulated derivative, expected {:?}",
            actual.id(),
            expected
        ),
    };
    let diff = (derivative - expected).abs();
    if diff > tolerance {
        panic!(
            "Derivative mismatch for scalar {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            derivative,
            expected,
            diff,
            tolerance
        );
    }
}

