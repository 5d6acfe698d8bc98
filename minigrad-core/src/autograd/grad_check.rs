use crate::autograd::grad_mode::{enable_grad, no_grad};
use crate::error::MinigradError;
use crate::scalar::Scalar;
use num_traits::Float;
use thiserror::Error;

/// Default step for [`central_difference`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Approximates the partial derivative of `f` with respect to argument `arg` at `vals`
/// using the symmetric difference `(f(x + ε) - f(x - ε)) / 2ε`, accurate to O(ε²).
///
/// `f` receives the full argument vector with only `vals[arg]` perturbed. Picking an
/// `epsilon` that balances cancellation against truncation error is up to the caller.
///
/// # Panics
/// If `arg >= vals.len()`.
///
/// # Example
/// ```
/// use minigrad_core::autograd::central_difference;
///
/// let f = |v: &[f64]| v[0] * v[0] + v[1];
/// let d = central_difference(f, &[3.0, 2.0], 0, 1e-6);
/// assert!((d - 6.0).abs() < 1e-4);
/// ```
pub fn central_difference<T, F>(f: F, vals: &[T], arg: usize, epsilon: T) -> T
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    let mut perturbed = vals.to_vec();

    perturbed[arg] = vals[arg] + epsilon;
    let f_plus = f(&perturbed);

    perturbed[arg] = vals[arg] - epsilon;
    let f_minus = f(&perturbed);

    let two = T::one() + T::one();
    (f_plus - f_minus) / (two * epsilon)
}

/// Tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Step used for the central difference.
    pub epsilon: f64,
    /// Absolute tolerance on `|analytical - numerical|`.
    pub tolerance: f64,
    /// Relative tolerance, used when the absolute one is exceeded.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: DEFAULT_EPSILON,
            tolerance: 1e-2,
            rel_tolerance: 1e-2,
        }
    }
}

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}: {value:?}")]
    NumericalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Analytical gradient is NaN or infinite for input {input_index}: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(#[from] MinigradError),
}

/// Checks the analytic derivatives of `func` against central differences.
///
/// Builds one leaf [`Scalar`] per entry of `values`, backpropagates from `func`'s output
/// with seed `1.0`, then for each input compares the accumulated derivative with the
/// central difference of `func` evaluated on constants under [`no_grad`]. The analytic
/// pass always records history, regardless of the caller's grad mode. An input that
/// received no derivative is treated as having derivative `0.0`.
pub fn check_grad<F>(func: F, values: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Scalar,
{
    // The analytic graph is recorded even when the caller is inside `no_grad`.
    let (inputs, output) = enable_grad(|| {
        let inputs: Vec<Scalar> = values.iter().map(|&v| Scalar::new(v)).collect();
        let output = func(&inputs);
        (inputs, output)
    });
    output.backward()?;

    let evaluate = |point: &[f64]| {
        no_grad(|| {
            let constants: Vec<Scalar> = point.iter().map(|&v| Scalar::constant(v)).collect();
            func(&constants).value()
        })
    };

    for (i, input) in inputs.iter().enumerate() {
        let analytical_grad = input.derivative().unwrap_or(0.0);
        let numerical_grad = central_difference(&evaluate, values, i, config.epsilon);
        log::trace!(
            "check_grad input {}: analytical={:?} numerical={:?}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value: numerical_grad,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
