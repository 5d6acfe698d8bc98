//! `std::ops` impls for [`Scalar`]. Plain `f64` operands are wrapped as constants.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::scalar::Scalar;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Scalar> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, &Scalar::constant(rhs))
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(&self, &Scalar::constant(rhs))
            }
        }

        impl<'a> $trait<&'a Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &'a Scalar) -> Scalar {
                $op_fn(&Scalar::constant(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}
