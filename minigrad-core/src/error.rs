use crate::autograd::NodeId;
use thiserror::Error;

/// Custom error type for the minigrad autodiff engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MinigradError {
    /// A node was reached again while it was still being explored: the graph is not a DAG.
    #[error("Cycle detected in the computation graph: node {node} is not part of a DAG.")]
    CycleDetected { node: NodeId },

    #[error("Cannot accumulate a derivative into node {node}: only leaf parameters hold derivatives.")]
    NotALeaf { node: NodeId },

    #[error("Backward of '{operation}' expected {expected} saved values but the context holds none.")]
    MissingSavedValues { operation: String, expected: usize },

    #[error("Backward of '{operation}' returned {actual} derivatives, but the node has {expected} inputs.")]
    DerivativeCountMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}
