//! Comparisons. Their output is piecewise constant, so every input receives a zero derivative.

pub mod eq;
pub mod lt;

pub use eq::{eq_op, EqFn};
pub use lt::{lt_op, LtFn};
