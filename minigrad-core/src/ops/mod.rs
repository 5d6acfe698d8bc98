//! # Scalar Operations Module (`ops`)
//!
//! Concrete differentiable operations on [`Scalar`](crate::scalar::Scalar)s, grouped by
//! kind. Each operation is a unit struct implementing
//! [`ScalarFunction`](crate::scalar::ScalarFunction) (forward formula plus local
//! derivative rule) and an `xxx_op` function that applies it.
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, inv.
//! - [`math_elem`]: ln, exp.
//! - [`activation`]: relu, sigmoid.
//! - [`comparison`]: lt, eq (zero derivative).

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod math_elem;
