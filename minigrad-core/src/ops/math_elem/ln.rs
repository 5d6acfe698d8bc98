use crate::autograd::Context;
use crate::error::MinigradError;
use crate::scalar::function::saved_values;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// Natural logarithm. Saves the input; the derivative is `d / a`.
#[derive(Debug)]
pub struct LnFn;

impl ScalarFunction for LnFn {
    fn name(&self) -> &'static str {
        "ln"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        ctx.save_for_backward([inputs[0]]);
        inputs[0].ln()
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let [a] = saved_values::<1>(ctx, self.name())?;
        Ok(vec![d_output / a])
    }
}

pub fn ln_op(a: &Scalar) -> Scalar {
    apply(Rc::new(LnFn), &[a])
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
