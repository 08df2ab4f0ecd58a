//! Unit descriptors and the algebra deriving units of products and quotients.
//!
//! A unit is a pure type: the powers of metres, electron-volts and seconds are
//! encoded as `typenum` integers, so two units are the same type exactly when
//! all three powers and the scale ratio match. Nothing here exists at run time.

use std::{
    marker::PhantomData,
    ops::{Add, Sub},
};

use typenum::{Diff, Integer, Sum};

/// Compile-time unit descriptor.
///
/// `L`, `E` and `T` are the (possibly negative) powers of metres,
/// electron-volts and seconds. `R` is the scale ratio of each base dimension.
///
/// The type is never instantiated, it only tags [`crate::Quantity`].
pub struct Unit<L, E, T, R = UnitRatio> {
    _marker: PhantomData<(L, E, T, R)>,
}

/// Scale of a single base dimension relative to metre, electron-volt or
/// second respectively.
pub struct Ratio<const NUM: i64 = 1, const DEN: i64 = 1>;

/// Scale ratios of all three base dimensions. Defaults to identity.
pub struct UnitRatio<L = Ratio, E = Ratio, T = Ratio> {
    _marker: PhantomData<(L, E, T)>,
}

pub trait ScaleFactor {
    const NUM: i64;
    const DEN: i64;

    fn is_identity() -> bool {
        Self::NUM == Self::DEN
    }
}

impl<const N: i64, const D: i64> ScaleFactor for Ratio<N, D> {
    const NUM: i64 = N;
    const DEN: i64 = D;
}

/// Per-dimension scale of a unit.
///
/// Only the identity scale is used by arithmetic at the moment. Units with a
/// different scale are distinct types but no conversion between them exists.
pub trait ScaleRatio {
    type Metres: ScaleFactor;
    type ElectronVolts: ScaleFactor;
    type Seconds: ScaleFactor;

    fn is_identity() -> bool {
        Self::Metres::is_identity()
            && Self::ElectronVolts::is_identity()
            && Self::Seconds::is_identity()
    }
}

impl<L: ScaleFactor, E: ScaleFactor, T: ScaleFactor> ScaleRatio for UnitRatio<L, E, T> {
    type Metres = L;
    type ElectronVolts = E;
    type Seconds = T;
}

/// Run-time view of unit powers, used for formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exponents {
    pub length: i32,
    pub energy: i32,
    pub time: i32,
}

impl Exponents {
    pub const fn new(length: i32, energy: i32, time: i32) -> Self {
        Self {
            length,
            energy,
            time,
        }
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.length == 0 && self.energy == 0 && self.time == 0
    }
}

pub trait Dimension {
    /// Power of metres.
    type Metres: Integer;
    /// Power of electron-volts.
    type ElectronVolts: Integer;
    /// Power of seconds.
    type Seconds: Integer;
    type Ratio: ScaleRatio;

    fn exponents() -> Exponents {
        Exponents::new(
            Self::Metres::to_i32(),
            Self::ElectronVolts::to_i32(),
            Self::Seconds::to_i32(),
        )
    }
}

impl<L, E, T, R> Dimension for Unit<L, E, T, R>
where
    L: Integer,
    E: Integer,
    T: Integer,
    R: ScaleRatio,
{
    type Metres = L;
    type ElectronVolts = E;
    type Seconds = T;
    type Ratio = R;
}

/// Unit of a product of two quantities: powers are added.
pub trait UnitMul<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// Unit of a quotient of two quantities: powers are subtracted.
pub trait UnitDiv<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

// Units with different scales cannot be combined until conversions exist.
impl<L1, E1, T1, L2, E2, T2, R> UnitMul<Unit<L2, E2, T2, R>> for Unit<L1, E1, T1, R>
where
    L1: Integer + Add<L2>,
    E1: Integer + Add<E2>,
    T1: Integer + Add<T2>,
    L2: Integer,
    E2: Integer,
    T2: Integer,
    Sum<L1, L2>: Integer,
    Sum<E1, E2>: Integer,
    Sum<T1, T2>: Integer,
    R: ScaleRatio,
{
    type Output = Unit<Sum<L1, L2>, Sum<E1, E2>, Sum<T1, T2>, R>;
}

impl<L1, E1, T1, L2, E2, T2, R> UnitDiv<Unit<L2, E2, T2, R>> for Unit<L1, E1, T1, R>
where
    L1: Integer + Sub<L2>,
    E1: Integer + Sub<E2>,
    T1: Integer + Sub<T2>,
    L2: Integer,
    E2: Integer,
    T2: Integer,
    Diff<L1, L2>: Integer,
    Diff<E1, E2>: Integer,
    Diff<T1, T2>: Integer,
    R: ScaleRatio,
{
    type Output = Unit<Diff<L1, L2>, Diff<E1, E2>, Diff<T1, T2>, R>;
}

pub type Product<A, B> = <A as UnitMul<B>>::Output;
pub type Quotient<A, B> = <A as UnitDiv<B>>::Output;
pub type Reciprocal<A> = Quotient<crate::units::Dimensionless, A>;

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use typenum::{P1, Z0};

    use super::*;
    use crate::units::*;

    fn same_unit<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_exponents() {
        assert_eq!(Length::exponents(), Exponents::new(1, 0, 0));
        assert_eq!(Energy::exponents(), Exponents::new(0, 1, 0));
        assert_eq!(Time::exponents(), Exponents::new(0, 0, 1));
        assert!(Dimensionless::exponents().is_dimensionless());
        assert!(!Velocity::exponents().is_dimensionless());
    }

    #[test]
    fn test_product() {
        assert_eq!(
            <Product<Length, Length>>::exponents(),
            Exponents::new(2, 0, 0)
        );
        assert!(same_unit::<Product<Length, Length>, Area>());
        assert!(same_unit::<Product<Energy, Time>, Action>());
        assert!(same_unit::<Product<Length, InverseLength>, Dimensionless>());
    }

    #[test]
    fn test_quotient() {
        assert_eq!(
            <Quotient<Length, Time>>::exponents(),
            Exponents::new(1, 0, -1)
        );
        assert!(same_unit::<Quotient<Length, Time>, Velocity>());
        assert!(same_unit::<Quotient<Velocity, Time>, Acceleration>());
        assert!(same_unit::<Quotient<Energy, Energy>, Dimensionless>());
        assert!(same_unit::<Reciprocal<Time>, Frequency>());
    }

    #[test]
    fn test_ratio() {
        type NanoRatio = UnitRatio<Ratio<1, 1_000_000_000>>;
        type Nanometre = Unit<P1, Z0, Z0, NanoRatio>;

        assert!(<Length as Dimension>::Ratio::is_identity());
        assert!(!<Nanometre as Dimension>::Ratio::is_identity());
        assert_eq!(<NanoRatio as ScaleRatio>::Metres::NUM, 1);
        assert_eq!(<NanoRatio as ScaleRatio>::Metres::DEN, 1_000_000_000);
        assert!(!same_unit::<Nanometre, Length>());
        assert_eq!(Nanometre::exponents(), Length::exponents());
        assert!(same_unit::<UnitRatio<Ratio<1, 1>>, UnitRatio>());
    }
}
