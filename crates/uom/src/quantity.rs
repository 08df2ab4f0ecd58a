use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use thiserror::Error;

use crate::{
    unit::{Dimension, Product, Quotient, UnitDiv, UnitMul},
    units::Dimensionless,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("literal `{literal}` cannot be represented exactly as {representation}")]
    LossyLiteralConversion {
        literal: String,
        representation: &'static str,
    },
}

/// Numeric representation held by a [`Quantity`].
pub trait QuantityValue:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    /// Name of the representation used in error messages.
    const NAME: &'static str;

    fn abs(self) -> Self;
}

/// A quantity with associated units.
///
/// The unit `U` is a [`crate::Unit`] descriptor made of powers of metres,
/// electron-volts and seconds; `V` is the numeric representation. A quantity
/// can only be created with its unit spelled out in the type, there is no
/// conversion from a bare number:
///
/// ```compile_fail
/// use dimq_uom::Metre;
///
/// let length: Metre = 5.0.into();
/// ```
///
/// Addition, subtraction and comparison require identical units:
///
/// ```compile_fail
/// use dimq_uom::{Metre, Second};
///
/// let _ = Metre::new(1.) + Second::new(2.);
/// ```
///
/// ```compile_fail
/// use dimq_uom::{Metre, Second};
///
/// let _ = Metre::new(1.) < Second::new(2.);
/// ```
///
/// Multiplication and division accept any units but the same representation:
///
/// ```compile_fail
/// use dimq_uom::Metre;
///
/// let length: Metre = Metre::new(1.);
/// let _ = length * Metre::<f32>::new(2.);
/// ```
///
/// ```
/// use dimq_uom::{Metre, MetrePerSecond, Second};
///
/// let speed: MetrePerSecond = Metre::new(10.) / Second::new(4.);
/// assert_eq!(speed.to_string(), "2.5ms^-1");
/// ```
pub struct Quantity<U, V = f64>(pub(crate) V, PhantomData<U>);

impl<U, V> Quantity<U, V> {
    /// Creates a new quantity of unit `U`.
    pub const fn new(value: V) -> Self {
        Self(value, PhantomData)
    }

    pub const fn inner(&self) -> V
    where
        V: Copy,
    {
        self.0
    }
}

impl<U, V: QuantityValue> Quantity<U, V> {
    pub const ZERO: Self = Quantity::new(V::ZERO);
    pub const ONE: Self = Quantity::new(V::ONE);

    /// Returns a new quantity with absolute value of `self`.
    pub fn abs(&self) -> Self {
        Self::new(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

impl<V> Quantity<Dimensionless, V> {
    /// Strips the (empty) unit off a dimensionless quantity.
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<U, V: Clone> Clone for Quantity<U, V> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<U, V: Copy> Copy for Quantity<U, V> {}

impl<U: Dimension, V: fmt::Debug> fmt::Debug for Quantity<U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({:?}", self.0)?;
        let exponents = U::exponents();
        if !exponents.is_dimensionless() {
            write!(f, " {exponents}")?;
        }
        f.write_str(")")
    }
}

impl<U, V: PartialEq> PartialEq for Quantity<U, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U, V: Eq> Eq for Quantity<U, V> {}

impl<U, V: PartialOrd> PartialOrd for Quantity<U, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<U, V: Ord> Ord for Quantity<U, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<U, V: Hash> Hash for Quantity<U, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<U, V: QuantityValue> Neg for Quantity<U, V> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U, V: QuantityValue> Add for Quantity<U, V> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl<U, V: QuantityValue> Sub for Quantity<U, V> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl<U, V: QuantityValue> AddAssign for Quantity<U, V> {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0 + other.0;
    }
}

impl<U, V: QuantityValue> SubAssign for Quantity<U, V> {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0 - other.0;
    }
}

impl<U1, U2, V> Mul<Quantity<U2, V>> for Quantity<U1, V>
where
    U1: UnitMul<U2>,
    U2: Dimension,
    V: QuantityValue,
{
    type Output = Quantity<Product<U1, U2>, V>;

    fn mul(self, rhs: Quantity<U2, V>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<U1, U2, V> Div<Quantity<U2, V>> for Quantity<U1, V>
where
    U1: UnitDiv<U2>,
    U2: Dimension,
    V: QuantityValue,
{
    type Output = Quantity<Quotient<U1, U2>, V>;

    fn div(self, rhs: Quantity<U2, V>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<U, V: QuantityValue> Sum for Quantity<U, V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, item| acc + item)
    }
}

impl<'a, U, V: QuantityValue> Sum<&'a Quantity<U, V>> for Quantity<U, V> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, item| acc + *item)
    }
}
