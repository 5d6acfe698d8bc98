use crate::autograd::Context;
use crate::error::MinigradError;
use crate::scalar::function::saved_values;
use crate::scalar::{apply, Scalar, ScalarFunction};
use std::rc::Rc;

/// `e^a`. Saves the output, which is also the derivative.
#[derive(Debug)]
pub struct ExpFn;

impl ScalarFunction for ExpFn {
    fn name(&self) -> &'static str {
        "exp"
    }

    fn forward(&self, ctx: &mut Context<f64>, inputs: &[f64]) -> f64 {
        let out = inputs[0].exp();
        ctx.save_for_backward([out]);
        out
    }

    fn backward(&self, ctx: &Context<f64>, d_output: f64) -> Result<Vec<f64>, MinigradError> {
        let [out] = saved_values::<1>(ctx, self.name())?;
        Ok(vec![d_output * out])
    }
}

pub fn exp_op(a: &Scalar) -> Scalar {
    apply(Rc::new(ExpFn), &[a])
}
