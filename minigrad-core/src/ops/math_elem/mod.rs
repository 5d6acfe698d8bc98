pub mod exp;
pub mod ln;

pub use exp::{exp_op, ExpFn};
pub use ln::{ln_op, LnFn};
