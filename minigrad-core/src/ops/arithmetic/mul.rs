use crate::autograd::Context;
use crate::error::MinigradError;
use crate::ops::arithmetic::inv_op;
use crate::scalar::function::saved_values;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// `a * b`. Saves both operands.
#[derive(Debug)]
pub struct MulFn;

impl ScalarFunction for MulFn {
    fn name(&self) -> &'static str {
        "mul"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let (a, b) = (inputs[0], inputs[1]);
        ctx.save_for_backward([a, b]);
        a * b
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let [a, b] = saved_values::<2>(ctx, self.name())?;
        Ok(vec![d_output * b, d_output * a])
    }
}

pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Rc::new(MulFn), &[a, b])
}

/// `a / b`, built as `a * inv(b)`.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    mul_op(a, &inv_op(b))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
