pub mod relu;
pub mod sigmoid;

pub use relu::{relu_op, ReluFn};
pub use sigmoid::{sigmoid_op, SigmoidFn};
