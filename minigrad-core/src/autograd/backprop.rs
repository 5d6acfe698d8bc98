use crate::autograd::graph::topological_sort;
use crate::autograd::variable::{NodeId, Variable};
use crate::error::MinigradError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Runs backpropagation from `variable` down to the leaves of its graph.
///
/// `deriv` is the derivative of some scalar loss with respect to `variable` (usually
/// `1.0` when `variable` is the loss itself). Results are written exclusively through
/// [`Variable::accumulate_derivative`] on the leaves: after a successful call every
/// reachable leaf has been incremented by the sum, over all paths, of the chain-rule
/// products from `variable` to that leaf.
///
/// Derivatives arriving at a non-leaf node from several consumers are summed before the
/// node's own [`chain_rule`](Variable::chain_rule) runs, so each node is expanded exactly
/// once with its complete derivative. Contributions addressed to constants are dropped.
///
/// Leaf accumulators are never reset here. Running a second pass without resetting them
/// adds to the totals of the first.
///
/// # Errors
/// Any error from [`topological_sort`] or from a node's `chain_rule` /
/// `accumulate_derivative` aborts the pass. Leaves accumulated before the failure keep
/// their partial values; there is no rollback.
pub fn backpropagate<V: Variable>(variable: &V, deriv: V::Derivative) -> Result<(), MinigradError> {
    let order = topological_sort(variable)?;
    log::debug!(
        "backpropagate: starting from node {} over {} nodes",
        variable.unique_id(),
        order.len()
    );

    // Key: NodeId, Value: derivative accumulated from all consumers processed so far
    let mut derivatives: HashMap<NodeId, V::Derivative> = HashMap::new();
    derivatives.insert(variable.unique_id(), deriv);

    for node in order {
        if node.is_leaf() {
            if node.unique_id() == variable.unique_id() {
                log::debug!("backpropagate called on leaf node {}. Nothing to propagate.", node.unique_id());
            }
            continue;
        }

        // Every consumer precedes this node in the order, so the entry is complete here.
        let d_output = match derivatives.remove(&node.unique_id()) {
            Some(d) => d,
            None => {
                log::trace!("node {} received no derivative, skipping", node.unique_id());
                continue;
            }
        };

        for (parent, contribution) in node.chain_rule(&d_output)? {
            if parent.is_constant() {
                continue;
            }
            if parent.is_leaf() {
                log::trace!("node {} -> leaf {}: {:?}", node.unique_id(), parent.unique_id(), contribution);
                parent.accumulate_derivative(contribution)?;
                continue;
            }
            match derivatives.entry(parent.unique_id()) {
                Entry::Occupied(mut existing) => *existing.get_mut() += contribution,
                Entry::Vacant(slot) => {
                    slot.insert(contribution);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "backprop_test.rs"]
mod tests;
