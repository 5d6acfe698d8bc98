use crate::autograd::Context;
use crate::error::MinigradError;
use crate::ops::arithmetic::neg_op;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// `a + b`. Needs nothing from the forward pass.
#[derive(Debug)]
pub struct AddFn;

impl ScalarFunction for AddFn {
    fn name(&self) -> &'static str {
        "add"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        inputs[0] + inputs[1]
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        Ok(vec![d_output, d_output])
    }
}

pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Rc::new(AddFn), &[a, b])
}

/// `a - b`, built as `a + (-b)`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
