//! Hand-wired graph nodes for exercising the engine independently of `Scalar`.
//!
//! Each edge carries a fixed local derivative, so `chain_rule(d)` returns `d * weight`
//! for every parent. Parents can be added after construction, which allows building
//! graphs with back-edges.

use crate::autograd::{NodeId, Variable};
use crate::error::MinigradError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MockKind {
    Constant,
    Leaf,
    Computed,
}

#[derive(Debug)]
struct MockInner {
    id: NodeId,
    kind: MockKind,
    parents: RefCell<Vec<(MockNode, f64)>>,
    derivative: Cell<f64>,
    accumulate_calls: Cell<usize>,
    failing: Cell<bool>,
    chain_rule_inputs: RefCell<Vec<f64>>,
}

#[derive(Debug, Clone)]
pub(crate) struct MockNode(Rc<MockInner>);

impl MockNode {
    fn with_kind(kind: MockKind) -> Self {
        MockNode(Rc::new(MockInner {
            id: NodeId::next(),
            kind,
            parents: RefCell::new(Vec::new()),
            derivative: Cell::new(0.0),
            accumulate_calls: Cell::new(0),
            failing: Cell::new(false),
            chain_rule_inputs: RefCell::new(Vec::new()),
        }))
    }

    pub(crate) fn leaf() -> Self {
        Self::with_kind(MockKind::Leaf)
    }

    pub(crate) fn constant() -> Self {
        Self::with_kind(MockKind::Constant)
    }

    pub(crate) fn computed(parents: &[(&MockNode, f64)]) -> Self {
        let node = Self::with_kind(MockKind::Computed);
        for (parent, weight) in parents {
            node.add_parent(parent, *weight);
        }
        node
    }

    pub(crate) fn add_parent(&self, parent: &MockNode, weight: f64) {
        self.0.parents.borrow_mut().push((parent.clone(), weight));
    }

    /// Makes every later `chain_rule` call on this node fail.
    pub(crate) fn set_failing(&self) {
        self.0.failing.set(true);
    }

    pub(crate) fn clear_parents(&self) {
        self.0.parents.borrow_mut().clear();
    }

    pub(crate) fn id(&self) -> NodeId {
        self.0.id
    }

    pub(crate) fn derivative(&self) -> f64 {
        self.0.derivative.get()
    }

    pub(crate) fn accumulate_calls(&self) -> usize {
        self.0.accumulate_calls.get()
    }

    /// Every `d_output` this node's `chain_rule` was called with, in call order.
    pub(crate) fn chain_rule_inputs(&self) -> Vec<f64> {
        self.0.chain_rule_inputs.borrow().clone()
    }
}

impl Variable for MockNode {
    type Derivative = f64;

    fn unique_id(&self) -> NodeId {
        self.0.id
    }

    fn is_leaf(&self) -> bool {
        self.0.kind == MockKind::Leaf
    }

    fn is_constant(&self) -> bool {
        self.0.kind == MockKind::Constant
    }

    fn parents(&self) -> Vec<Self> {
        self.0.parents.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    fn chain_rule(&self, d_output: &f64) -> Result<Vec<(Self, f64)>, MinigradError> {
        self.0.chain_rule_inputs.borrow_mut().push(*d_output);
        if self.0.failing.get() {
            return Err(MinigradError::InternalError(format!(
                "chain_rule failed at node {}",
                self.0.id
            )));
        }
        Ok(self
            .0
            .parents
            .borrow()
            .iter()
            .map(|(p, w)| (p.clone(), d_output * w))
            .collect())
    }

    fn accumulate_derivative(&self, x: f64) -> Result<(), MinigradError> {
        if !self.is_leaf() {
            return Err(MinigradError::NotALeaf { node: self.0.id });
        }
        self.0.derivative.set(self.0.derivative.get() + x);
        self.0.accumulate_calls.set(self.0.accumulate_calls.get() + 1);
        Ok(())
    }
}
