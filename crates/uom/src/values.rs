//! Representation specific implementations.
//!
//! Operations with a bare number on the left-hand side cannot be implemented
//! generically over the representation, hence the macro.

use std::ops::{Div, DivAssign, Mul, MulAssign};

use crate::{
    quantity::{Quantity, QuantityValue},
    unit::{Dimension, Reciprocal, UnitDiv},
    units::Dimensionless,
};

macro_rules! impl_value {
    ($type:ty, $zero:expr, $one:expr) => {
        impl QuantityValue for $type {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
            const NAME: &'static str = stringify!($type);

            fn abs(self) -> Self {
                <$type>::abs(self)
            }
        }

        impl<U> Mul<$type> for Quantity<U, $type> {
            type Output = Self;

            fn mul(self, rhs: $type) -> Self {
                Self::new(self.0 * rhs)
            }
        }

        impl<U> Mul<Quantity<U, $type>> for $type {
            type Output = Quantity<U, $type>;

            fn mul(self, rhs: Quantity<U, $type>) -> Quantity<U, $type> {
                Quantity::new(self * rhs.0)
            }
        }

        impl<U> MulAssign<$type> for Quantity<U, $type> {
            fn mul_assign(&mut self, rhs: $type) {
                self.0 *= rhs;
            }
        }

        impl<U> Div<$type> for Quantity<U, $type> {
            type Output = Self;

            fn div(self, rhs: $type) -> Self {
                Self::new(self.0 / rhs)
            }
        }

        impl<U> DivAssign<$type> for Quantity<U, $type> {
            fn div_assign(&mut self, rhs: $type) {
                self.0 /= rhs;
            }
        }

        impl<U> Div<Quantity<U, $type>> for $type
        where
            U: Dimension,
            Dimensionless: UnitDiv<U>,
        {
            type Output = Quantity<Reciprocal<U>, $type>;

            fn div(self, rhs: Quantity<U, $type>) -> Self::Output {
                Quantity::new(self / rhs.0)
            }
        }

        impl From<Quantity<Dimensionless, $type>> for $type {
            fn from(quantity: Quantity<Dimensionless, $type>) -> $type {
                quantity.0
            }
        }
    };
}

impl_value!(f32, 0., 1.);
impl_value!(f64, 0., 1.);
impl_value!(i32, 0, 1);
impl_value!(i64, 0, 1);
