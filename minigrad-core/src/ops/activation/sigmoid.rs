use crate::autograd::Context;
use crate::error::MinigradError;
use crate::scalar::function::saved_values;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// Logistic sigmoid, computed without overflow for large negative inputs.
/// Saves the output `s`; the derivative is `d * s * (1 - s)`.
#[derive(Debug)]
pub struct SigmoidFn;

fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

impl ScalarFunction for SigmoidFn {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let out = sigmoid(inputs[0]);
        ctx.save_for_backward([out]);
        out
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let [s] = saved_values::<1>(ctx, self.name())?;
        Ok(vec![d_output * s * (1.0 - s)])
    }
}

pub fn sigmoid_op(a: &Scalar) -> Scalar {
    apply(Rc::new(SigmoidFn), &[a])
}
