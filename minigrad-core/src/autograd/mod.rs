//! # Automatic Differentiation (`autograd`)
//!
//! - [`variable`]: the [`Variable`] contract and [`NodeId`] identities.
//! - [`graph`]: deterministic topological ordering of a computation graph.
//! - [`backprop`]: the reverse-mode engine driving each node's chain rule.
//! - [`context`]: per-operation storage for forward-pass intermediates.
//! - [`grad_mode`]: thread-local switch for recording history.
//! - [`grad_check`]: central differences and analytic-vs-numeric gradient checks.

pub mod backprop;
pub mod context;
pub mod grad_check;
pub mod grad_mode;
pub mod graph;
pub mod variable;

pub use backprop::backpropagate;
pub use context::Context;
pub use grad_check::{central_difference, check_grad, GradCheckConfig, GradCheckError};
pub use grad_mode::{
    enable_grad, is_grad_enabled, no_grad, set_grad_enabled, EnableGradGuard, NoGradGuard,
};
pub use graph::topological_sort;
pub use variable::{NodeId, Variable};
