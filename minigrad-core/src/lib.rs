//! # minigrad-core
//!
//! Reverse-mode automatic differentiation over a dynamically built computation graph.
//!
//! The [`autograd`] module holds the engine itself: the [`Variable`](autograd::Variable)
//! contract every graph node satisfies, the topological sorter, the backpropagation
//! engine, the per-operation [`Context`](autograd::Context) and the finite-difference
//! gradient checker. [`scalar`] and [`ops`] provide a reference scalar value layer
//! built on top of that contract.

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod scalar;
pub mod utils;

pub mod error;
pub use error::MinigradError;

// Ré-exporte les types principaux pour qu'ils soient accessibles directement via `minigrad_core::...`
pub use autograd::{backpropagate, topological_sort, Context, NodeId, Variable};
pub use scalar::Scalar;
// Re-export traits required by public functions
pub use num_traits;
