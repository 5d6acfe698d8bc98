use crate::autograd::{is_grad_enabled, Context, Variable};
use crate::error::MinigradError;
use crate::scalar::scalar_data::{NodeKind, ScalarData};
use crate::scalar::Scalar;
use std::fmt::Debug;
use std::rc::Rc;

/// Forward formula and local derivative rule of a scalar operation.
///
/// `forward` may stash intermediates in the context; `backward` receives the same
/// context and the derivative of the output, and returns one local derivative per
/// input, in input order.
pub trait ScalarFunction: Debug {
    /// Name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64;

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError>;
}

/// Applies `op` to `inputs`, recording history when gradients are needed.
///
/// History is recorded if grad mode is enabled and at least one input is tracked.
/// Otherwise the context is created with `no_grad` and the result is a constant.
pub fn apply(op: Rc<dyn ScalarFunction>, inputs: &[&Scalar]) -> Scalar {
    let need_grad = is_grad_enabled() && inputs.iter().any(|s| !s.is_constant());
    let values: Vec<f64> = inputs.iter().map(|s| s.value()).collect();

    let mut ctx = Context::new(!need_grad);
    let value = op.forward(&mut ctx, &values);

    let kind = if need_grad {
        NodeKind::Computed {
            op,
            ctx,
            inputs: inputs.iter().map(|s| (*s).clone()).collect(),
        }
    } else {
        NodeKind::Constant
    };
    Scalar::from_data(ScalarData::new(value, kind))
}

/// Reads exactly `N` saved values from `ctx`, failing if the forward pass saved none.
pub(crate) fn saved_values<const N: usize>(
    ctx: &Context<f64>,
    operation: &str,
) -> Result<[f64; N], MinigradError> {
    let saved = ctx.saved_tensors();
    if saved.is_empty() {
        return Err(MinigradError::MissingSavedValues {
            operation: operation.to_string(),
            expected: N,
        });
    }
    <[f64; N]>::try_from(saved).map_err(|_| {
        MinigradError::InternalError(format!(
            "{} saved {} values, expected {}",
            operation,
            saved.len(),
            N
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_values_reads_exact_count() -> Result<(), MinigradError> {
        let mut ctx = Context::new(false);
        ctx.save_for_backward([1.0, 2.0]);
        assert_eq!(saved_values::<2>(&ctx, "mul")?, [1.0, 2.0]);
        Ok(())
    }

    #[test]
    fn test_saved_values_wrong_count_is_internal_error() {
        let mut ctx = Context::new(false);
        ctx.save_for_backward([1.0]);
        match saved_values::<2>(&ctx, "mul") {
            Err(MinigradError::InternalError(msg)) => {
                assert_eq!(msg, "mul saved 1 values, expected 2")
            }
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }

    #[test]
    fn test_saved_values_empty_context() {
        let ctx = Context::new(true);
        assert_eq!(
            saved_values::<1>(&ctx, "ln"),
            Err(MinigradError::MissingSavedValues {
                operation: "ln".to_string(),
                expected: 1
            })
        );
    }
}
