//! # Reference scalar value layer
//!
//! [`Scalar`] is a concrete [`Variable`]: a shared handle to a single `f64` value plus
//! the history needed to differentiate it. Operations from [`crate::ops`] build
//! new scalars through [`function::apply`], which records the inputs and a fresh
//! [`Context`](crate::autograd::Context) on the result.

pub mod function;
mod operators;
pub mod scalar_data;

use crate::autograd::{backpropagate, NodeId, Variable};
use crate::error::MinigradError;
use crate::ops;
use scalar_data::{NodeKind, ScalarData};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

pub use function::{apply, ScalarFunction};

/// Cheaply cloneable handle to a node of a scalar computation graph.
///
/// Cloning shares the node: derivatives accumulated through one clone are visible
/// through every other.
#[derive(Clone)]
pub struct Scalar(pub(crate) Rc<RefCell<ScalarData>>);

impl Scalar {
    /// Creates a leaf parameter that accumulates derivatives.
    pub fn new(value: f64) -> Self {
        Self::from_data(ScalarData::new(value, NodeKind::Parameter))
    }

    /// Creates a constant, excluded from differentiation.
    pub fn constant(value: f64) -> Self {
        Self::from_data(ScalarData::new(value, NodeKind::Constant))
    }

    pub(crate) fn from_data(data: ScalarData) -> Self {
        Scalar(Rc::new(RefCell::new(data)))
    }

    /// Attaches a human-readable name, shown in `Debug` output.
    pub fn with_name(self, name: &str) -> Self {
        self.0.borrow_mut().name = Some(name.to_string());
        self
    }

    fn read_data(&self) -> Ref<'_, ScalarData> {
        self.0.borrow()
    }

    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// The derivative accumulated so far, `None` if nothing has reached this scalar
    /// since creation or the last [`zero_grad`](Scalar::zero_grad).
    pub fn derivative(&self) -> Option<f64> {
        self.read_data().derivative
    }

    pub fn name(&self) -> Option<String> {
        self.read_data().name.clone()
    }

    pub fn id(&self) -> NodeId {
        self.read_data().id
    }

    pub fn requires_grad(&self) -> bool {
        !matches!(self.read_data().kind, NodeKind::Constant)
    }

    /// Name of the operation that produced this scalar, if any.
    pub fn op_name(&self) -> Option<&'static str> {
        match &self.read_data().kind {
            NodeKind::Computed { op, .. } => Some(op.name()),
            _ => None,
        }
    }

    /// Number of values the producing operation saved for its backward pass.
    pub fn saved_value_count(&self) -> usize {
        match &self.read_data().kind {
            NodeKind::Computed { ctx, .. } => ctx.saved_tensors().len(),
            _ => 0,
        }
    }

    /// Resets the accumulated derivative. Backward passes never do this themselves.
    pub fn zero_grad(&self) {
        self.0.borrow_mut().derivative = None;
    }

    /// Returns a constant with the same value, cut off from the graph.
    pub fn detach(&self) -> Scalar {
        Scalar::constant(self.value())
    }

    /// Backpropagates from this scalar with a seed derivative of `1.0`.
    pub fn backward(&self) -> Result<(), MinigradError> {
        self.backward_with(1.0)
    }

    /// Backpropagates from this scalar with the given seed derivative.
    pub fn backward_with(&self, d_output: f64) -> Result<(), MinigradError> {
        backpropagate(self, d_output)
    }

    pub fn ln(&self) -> Scalar {
        ops::math_elem::ln_op(self)
    }

    pub fn exp(&self) -> Scalar {
        ops::math_elem::exp_op(self)
    }

    pub fn inv(&self) -> Scalar {
        ops::arithmetic::inv_op(self)
    }

    pub fn relu(&self) -> Scalar {
        ops::activation::relu_op(self)
    }

    pub fn sigmoid(&self) -> Scalar {
        ops::activation::sigmoid_op(self)
    }

    /// `1.0` if `self < other`, else `0.0`. Has zero derivative.
    pub fn less_than(&self, other: &Scalar) -> Scalar {
        ops::comparison::lt_op(self, other)
    }

    /// `1.0` if `self == other`, else `0.0`. Has zero derivative.
    pub fn equal_to(&self, other: &Scalar) -> Scalar {
        ops::comparison::eq_op(self, other)
    }
}

impl Variable for Scalar {
    type Derivative = f64;

    fn unique_id(&self) -> NodeId {
        self.id()
    }

    fn is_leaf(&self) -> bool {
        matches!(self.read_data().kind, NodeKind::Parameter)
    }

    fn is_constant(&self) -> bool {
        matches!(self.read_data().kind, NodeKind::Constant)
    }

    fn parents(&self) -> Vec<Self> {
        match &self.read_data().kind {
            NodeKind::Computed { inputs, .. } => inputs.clone(),
            _ => Vec::new(),
        }
    }

    fn chain_rule(&self, d_output: &f64) -> Result<Vec<(Self, f64)>, MinigradError> {
        let guard = self.read_data();
        let (op, ctx, inputs) = match &guard.kind {
            NodeKind::Computed { op, ctx, inputs } => (op, ctx, inputs),
            _ => return Ok(Vec::new()),
        };

        let local = op.backward(ctx, *d_output)?;
        if local.len() != inputs.len() {
            return Err(MinigradError::DerivativeCountMismatch {
                operation: op.name().to_string(),
                expected: inputs.len(),
                actual: local.len(),
            });
        }
        let pairs: Vec<(Scalar, f64)> = inputs
            .iter()
            .cloned()
            .zip(local)
            .filter(|(input, _)| !input.is_constant())
            .collect();
        Ok(pairs)
    }

    fn accumulate_derivative(&self, x: f64) -> Result<(), MinigradError> {
        let mut guard = self.0.borrow_mut();
        if !matches!(guard.kind, NodeKind::Parameter) {
            return Err(MinigradError::NotALeaf { node: guard.id });
        }
        guard.derivative = Some(guard.derivative.unwrap_or(0.0) + x);
        Ok(())
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        let mut s = f.debug_struct("Scalar");
        s.field("id", &data.id).field("value", &data.value);
        if let Some(name) = &data.name {
            s.field("name", name);
        }
        s.field("derivative", &data.derivative)
            .field("kind", &data.kind)
            .finish()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.value())
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
