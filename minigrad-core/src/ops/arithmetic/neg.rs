use crate::autograd::Context;
use crate::error::MinigradError;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// `-a`.
#[derive(Debug)]
pub struct NegFn;

impl ScalarFunction for NegFn {
    fn name(&self) -> &'static str {
        "neg"
    }

    fn forward(&self, _ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        -inputs[0]
    }

    fn backward(&self, _ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        Ok(vec![-d_output])
    }
}

pub fn neg_op(a: &Scalar) -> Scalar {
    apply(Rc::new(NegFn), &[a])
}
