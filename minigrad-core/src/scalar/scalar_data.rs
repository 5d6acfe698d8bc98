use crate::autograd::{Context, NodeId};
use crate::scalar::function::ScalarFunction;
use crate::scalar::Scalar;
use std::fmt;
use std::rc::Rc;

/// How a scalar takes part in the computation graph.
#[derive(Clone)]
pub enum NodeKind {
    /// Not tracked. Never sorted, never receives a derivative.
    Constant,
    /// User-supplied leaf that accumulates derivatives.
    Parameter,
    /// Result of an operation applied to `inputs`.
    Computed {
        op: Rc<dyn ScalarFunction>,
        ctx: Context<f64>,
        inputs: Vec<Scalar>,
    },
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Constant => write!(f, "Constant"),
            NodeKind::Parameter => write!(f, "Parameter"),
            NodeKind::Computed { op, inputs, .. } => {
                let ids: Vec<NodeId> = inputs.iter().map(|s| s.id()).collect();
                write!(f, "Computed({}, inputs={:?})", op.name(), ids)
            }
        }
    }
}

/// Internal state behind a [`Scalar`] handle.
#[derive(Debug)]
pub struct ScalarData {
    pub(crate) id: NodeId,
    pub(crate) value: f64,
    /// Accumulated derivative. Only parameters ever hold one.
    pub(crate) derivative: Option<f64>,
    pub(crate) name: Option<String>,
    pub(crate) kind: NodeKind,
}

impl ScalarData {
    pub(crate) fn new(value: f64, kind: NodeKind) -> Self {
        ScalarData {
            id: NodeId::next(),
            value,
            derivative: None,
            name: None,
            kind,
        }
    }
}

impl Drop for ScalarData {
    /// Unlinks the history with an explicit stack, so freeing a long chain never
    /// recurses once per node.
    fn drop(&mut self) {
        let mut pending: Vec<Scalar> = match std::mem::replace(&mut self.kind, NodeKind::Constant) {
            NodeKind::Computed { inputs, .. } => inputs,
            _ => return,
        };
        while let Some(scalar) = pending.pop() {
            // Only the last handle to a node may unlink it; shared nodes stay alive.
            if let Ok(cell) = Rc::try_unwrap(scalar.0) {
                let mut data = cell.into_inner();
                if let NodeKind::Computed { inputs, .. } =
                    std::mem::replace(&mut data.kind, NodeKind::Constant)
                {
                    pending.extend(inputs);
                }
            }
        }
    }
}
