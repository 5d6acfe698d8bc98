use crate::error::MinigradError;
use std::fmt::{self, Debug};
use std::ops::AddAssign;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique node IDs.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a node in the computation graph.
///
/// Used as the key for mark sets and derivative accumulation; never for ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocates a fresh identity. Identities are never reused within a process.
    pub fn next() -> Self {
        NodeId(NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capabilities any node of a computation graph must provide to be sorted and
/// differentiated by [`topological_sort`](super::topological_sort) and
/// [`backpropagate`](super::backpropagate).
///
/// Implementors are cheap handles (`Clone` shares the node, it does not copy it).
/// A node is either:
/// * a **constant**: excluded from traversal entirely,
/// * a **leaf**: participates in traversal, has no parents, receives derivatives through
///   [`accumulate_derivative`](Variable::accumulate_derivative),
/// * a **computed** node: has ordered parents and a local derivative rule.
pub trait Variable: Clone {
    /// Type of the derivative flowing through the graph (a float, a tensor, ...).
    /// `AddAssign` is how fan-in contributions are summed.
    type Derivative: Clone + Debug + AddAssign;

    /// Identity, stable for the lifetime of the node.
    fn unique_id(&self) -> NodeId;

    /// True if the node has no recorded inputs (a user-supplied parameter).
    fn is_leaf(&self) -> bool;

    /// True if the node does not take part in gradient tracking at all.
    fn is_constant(&self) -> bool;

    /// The ordered inputs this node was computed from. Empty for leaves and constants.
    fn parents(&self) -> Vec<Self>;

    /// Given `d_output`, the derivative of the final output with respect to this node,
    /// returns the contribution passed to each direct input as `(parent, derivative)` pairs.
    ///
    /// Must only read data captured at forward time.
    fn chain_rule(
        &self,
        d_output: &Self::Derivative,
    ) -> Result<Vec<(Self, Self::Derivative)>, MinigradError>;

    /// Adds `x` to the node's running derivative. Only ever called on leaves.
    fn accumulate_derivative(&self, x: Self::Derivative) -> Result<(), MinigradError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_ids_are_unique() {
        let ids: HashSet<NodeId> = (0..1000).map(|_| NodeId::next()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_node_ids_increase() {
        let a = NodeId::next();
        let b = NodeId::next();
        assert!(b > a);
        assert_eq!(format!("{}", a), format!("#{}", a.as_u64()));
    }
}
