use crate::autograd::Context;
use crate::error::MinigradError;
use crate::scalar::function::saved_values;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// `1 / a`. Saves `a`.
#[derive(Debug)]
pub struct InvFn;

impl ScalarFunction for InvFn {
    fn name(&self) -> &'static str {
        "inv"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        ctx.save_for_backward([inputs[0]]);
        1.0 / inputs[0]
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let [a] = saved_values::<1>(ctx, self.name())?;
        Ok(vec![-d_output / (a * a)])
    }
}

pub fn inv_op(a: &Scalar) -> Scalar {
    apply(Rc::new(InvFn), &[a])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
    use approx::assert_relative_eq;

    #[test]
    fn test_inv_forward() {
        assert_relative_eq!(inv_op(&Scalar::new(4.0)).value(), 0.25);
    }

    #[test]
    fn test_inv_backward() -> Result<(), MinigradError> {
        let a = Scalar::new(2.0);
        inv_op(&a).backward()?;
        assert_relative_eq!(a.derivative().unwrap_or_default(), -0.25);
        Ok(())
    }

    #[test]
    fn test_inv_grad_check() -> Result<(), GradCheckError> {
        check_grad(|x| inv_op(&x[0]), &[-1.7], &GradCheckConfig::default())
    }
}
