use crate::autograd::variable::{NodeId, Variable};
use crate::error::MinigradError;
use std::collections::HashMap;

/// Visit state of a node during the depth-first traversal.
/// Nodes absent from the map are unvisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the active exploration path.
    Temporary,
    /// Finished and placed in the order.
    Permanent,
}

/// One pending node on the explicit work stack.
struct Frame<V> {
    node: V,
    parents: Vec<V>,
    next_parent: usize,
}

/// Computes the topological order of the computation graph ending at `variable`.
///
/// Returns every non-constant node reachable from `variable` through parent links,
/// `variable` first, such that each node appears before all of its ancestors: processing
/// the result front to back visits every consumer of a node before the node itself.
///
/// The traversal is a depth-first search with three-colour marking, driven by an
/// explicit stack instead of recursion so that deep graphs cannot overflow the call
/// stack. Parents are visited in their recorded order, which makes the result
/// deterministic for an unmodified graph.
///
/// # Errors
/// * [`MinigradError::CycleDetected`] if a node is reached again while still on the
///   active exploration path.
pub fn topological_sort<V: Variable>(variable: &V) -> Result<Vec<V>, MinigradError> {
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut post_order: Vec<V> = Vec::new();
    let mut stack: Vec<Frame<V>> = Vec::new();

    if let Some(frame) = enter(variable, &mut marks)? {
        stack.push(frame);
    }

    loop {
        let next = match stack.last_mut() {
            None => break,
            Some(frame) if frame.next_parent < frame.parents.len() => {
                let parent = frame.parents[frame.next_parent].clone();
                frame.next_parent += 1;
                Some(parent)
            }
            Some(_) => None,
        };

        match next {
            Some(parent) => {
                if let Some(frame) = enter(&parent, &mut marks)? {
                    stack.push(frame);
                }
            }
            None => {
                if let Some(done) = stack.pop() {
                    marks.insert(done.node.unique_id(), Mark::Permanent);
                    post_order.push(done.node);
                }
            }
        }
    }

    // Reversed post-order: equivalent to inserting each finished node at the front.
    post_order.reverse();
    log::trace!("topological_sort: {} nodes ordered", post_order.len());
    Ok(post_order)
}

/// Marks `node` as in progress and returns its frame, or `None` if it must not be explored.
fn enter<V: Variable>(
    node: &V,
    marks: &mut HashMap<NodeId, Mark>,
) -> Result<Option<Frame<V>>, MinigradError> {
    if node.is_constant() {
        return Ok(None);
    }
    let id = node.unique_id();
    match marks.get(&id) {
        Some(Mark::Permanent) => return Ok(None),
        Some(Mark::Temporary) => return Err(MinigradError::CycleDetected { node: id }),
        None => {}
    }
    marks.insert(id, Mark::Temporary);

    let parents = if node.is_leaf() {
        Vec::new()
    } else {
        node.parents()
    };
    Ok(Some(Frame {
        node: node.clone(),
        parents,
        next_parent: 0,
    }))
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
