use crate::autograd::Context;
use crate::error::MinigradError;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// `1.0` if `a == b`, else `0.0`.
#[derive(Debug)]
pub struct EqFn;

impl ScalarFunction for EqFn {
    fn name(&self) -> &'static str {
        "eq"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        if inputs[0] == inputs[1] {
            1.0
        } else {
            0.0
        }
    }

    fn backward(&self, _ctx: &Context<f64>, _d_output: f64) -> Result<Vec<f64>, MinigradError> {
        Ok(vec![0.0, 0.0])
    }
}

pub fn eq_op(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Rc::new(EqFn), &[a, b])
}
