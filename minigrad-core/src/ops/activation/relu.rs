use crate::autograd::Context;
use crate::error::MinigradError;
use crate::scalar::function::saved_values;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// `max(a, 0)`. The derivative at exactly zero is taken as zero.
#[derive(Debug)]
pub struct ReluFn;

impl ScalarFunction for ReluFn {
    fn name(&self) -> &'static str {
        "relu"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        ctx.save_for_backward([inputs[0]]);
        if inputs[0] > 0.0 {
            inputs[0]
        } else {
            0.0
        }
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let [a] = saved_values::<1>(ctx, self.name())?;
        Ok(vec![if a > 0.0 { d_output } else { 0.0 }])
    }
}

pub fn relu_op(a: &Scalar) -> Scalar {
    apply(Rc::new(ReluFn), &[a])
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
