pub mod add;
pub mod inv;
pub mod mul;
pub mod neg;

pub use add::{add_op, sub_op, AddFn};
pub use inv::{inv_op, InvFn};
pub use mul::{div_op, mul_op, MulFn};
pub use neg::{neg_op, NegFn};
