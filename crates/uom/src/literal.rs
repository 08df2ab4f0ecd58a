//! Construction of quantities from numeric literals with a unit suffix.
//!
//! Rust has no user-defined literal suffixes, the suffix becomes either the
//! function name (`metres(200)`) or a token of the [`qty!`](crate::qty) macro
//! (`qty!(200 m)`). Every literal is checked to be exactly representable in
//! the quantity's representation before it is converted.

use std::fmt;

use tracing::debug;

use crate::{
    quantity::{Quantity, QuantityError, QuantityValue},
    units::{ElectronVolt, Metre, Second},
};

/// Lossless conversion from a literal of type `L`.
///
/// Implemented for literals of all primitive integer types up to 64 bits,
/// `u128`, `f32` and `f64`, converted into the `f32`, `f64`, `i32` and `i64`
/// representations.
pub trait ExactFrom<L>: Sized {
    /// Returns `None` if `literal` is out of range of `Self` or would lose
    /// precision.
    fn exact_from(literal: L) -> Option<Self>;
}

/// Checks that an integer magnitude fits into a float mantissa of `digits`
/// bits. Exponent range is never the limit for integers up to 128 bits.
fn fits_mantissa(magnitude: u128, digits: u32) -> bool {
    magnitude == 0 || 128 - magnitude.leading_zeros() - magnitude.trailing_zeros() <= digits
}

macro_rules! impl_float_from_unsigned {
    ($float:ty, $($int:ty),+) => {
        $(
            impl ExactFrom<$int> for $float {
                fn exact_from(literal: $int) -> Option<Self> {
                    fits_mantissa(literal as u128, <$float>::MANTISSA_DIGITS)
                        .then_some(literal as $float)
                }
            }
        )+
    };
}

macro_rules! impl_float_from_signed {
    ($float:ty, $($int:ty),+) => {
        $(
            impl ExactFrom<$int> for $float {
                fn exact_from(literal: $int) -> Option<Self> {
                    fits_mantissa(literal.unsigned_abs() as u128, <$float>::MANTISSA_DIGITS)
                        .then_some(literal as $float)
                }
            }
        )+
    };
}

macro_rules! impl_int_from_int {
    ($target:ty, $($int:ty),+) => {
        $(
            impl ExactFrom<$int> for $target {
                fn exact_from(literal: $int) -> Option<Self> {
                    <$target>::try_from(literal).ok()
                }
            }
        )+
    };
}

macro_rules! impl_int_from_float {
    ($target:ty, $($float:ty),+) => {
        $(
            impl ExactFrom<$float> for $target {
                fn exact_from(literal: $float) -> Option<Self> {
                    // MIN is a power of two, hence exact in every float type.
                    let min = <$target>::MIN as $float;
                    let integral = literal.fract() == 0.;
                    (integral && literal >= min && literal < -min).then_some(literal as $target)
                }
            }
        )+
    };
}

impl_float_from_unsigned!(f64, u8, u16, u32, u64, u128);
impl_float_from_unsigned!(f32, u8, u16, u32, u64, u128);
impl_float_from_signed!(f64, i8, i16, i32, i64);
impl_float_from_signed!(f32, i8, i16, i32, i64);
impl_int_from_int!(i64, u8, u16, u32, u64, u128, i8, i16, i32, i64);
impl_int_from_int!(i32, u8, u16, u32, u64, u128, i8, i16, i32, i64);
impl_int_from_float!(i64, f32, f64);
impl_int_from_float!(i32, f32, f64);

impl ExactFrom<f64> for f64 {
    fn exact_from(literal: f64) -> Option<Self> {
        Some(literal)
    }
}

impl ExactFrom<f32> for f64 {
    fn exact_from(literal: f32) -> Option<Self> {
        Some(literal.into())
    }
}

impl ExactFrom<f32> for f32 {
    fn exact_from(literal: f32) -> Option<Self> {
        Some(literal)
    }
}

impl ExactFrom<f64> for f32 {
    fn exact_from(literal: f64) -> Option<Self> {
        let narrowed = literal as f32;
        (literal.is_nan() || f64::from(narrowed) == literal).then_some(narrowed)
    }
}

impl<U, V: QuantityValue> Quantity<U, V> {
    /// Creates a quantity from a literal, failing instead of silently
    /// truncating when the literal does not fit `V` exactly.
    pub fn from_literal<L>(literal: L) -> Result<Self, QuantityError>
    where
        V: ExactFrom<L>,
        L: Copy + fmt::Display,
    {
        match V::exact_from(literal) {
            Some(value) => Ok(Self::new(value)),
            None => {
                debug!(%literal, representation = V::NAME, "Rejecting lossy literal.");
                Err(QuantityError::LossyLiteralConversion {
                    literal: literal.to_string(),
                    representation: V::NAME,
                })
            }
        }
    }
}

/// `literal` metres.
pub fn metres<L>(literal: L) -> Result<Metre, QuantityError>
where
    f64: ExactFrom<L>,
    L: Copy + fmt::Display,
{
    Metre::from_literal(literal)
}

/// `literal` electron-volts.
pub fn electron_volts<L>(literal: L) -> Result<ElectronVolt, QuantityError>
where
    f64: ExactFrom<L>,
    L: Copy + fmt::Display,
{
    ElectronVolt::from_literal(literal)
}

/// `literal` seconds.
pub fn seconds<L>(literal: L) -> Result<Second, QuantityError>
where
    f64: ExactFrom<L>,
    L: Copy + fmt::Display,
{
    Second::from_literal(literal)
}

/// Unit suffix notation for literals.
///
/// Accepted suffixes are `m`, `eV` and `s`. Evaluates to
/// `Result<Quantity<_, f64>, QuantityError>`.
///
/// ```
/// use dimq_uom::{qty, Metre};
///
/// let length = qty!(200 m).unwrap();
/// assert_eq!(length, Metre::new(200.));
/// assert!(qty!(9_007_199_254_740_993u64 eV).is_err());
/// ```
#[macro_export]
macro_rules! qty {
    ($value:literal m) => {
        $crate::metres($value)
    };
    ($value:literal eV) => {
        $crate::electron_volts($value)
    };
    ($value:literal s) => {
        $crate::seconds($value)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(metres(5).unwrap(), Metre::new(5.));
        assert_eq!(electron_volts(5).unwrap(), ElectronVolt::new(5.));
        assert_eq!(seconds(5).unwrap(), Second::new(5.));
        assert_eq!(metres(2.5).unwrap(), Metre::new(2.5));
        assert_eq!(seconds(5u64).unwrap(), Second::new(5.));
    }

    #[test]
    fn test_small_integer_literals() {
        assert_eq!(metres(5u8).unwrap(), Metre::new(5.));
        assert_eq!(seconds(65_535u16).unwrap(), Second::new(65_535.));
        assert_eq!(electron_volts(-128i8).unwrap(), ElectronVolt::new(-128.));
        assert_eq!(metres(i16::MIN).unwrap(), Metre::new(-32_768.));
        assert_eq!(Second::<i32>::from_literal(200u8).unwrap().inner(), 200);
        assert_eq!(Second::<f32>::from_literal(-7i16).unwrap().inner(), -7.);
    }

    #[test]
    fn test_macro() {
        assert_eq!(crate::qty!(5 m).unwrap(), Metre::new(5.));
        assert_eq!(crate::qty!(2.5 eV).unwrap(), ElectronVolt::new(2.5));
        assert_eq!(crate::qty!(-3 s).unwrap(), Second::new(-3.));
    }

    #[test]
    fn test_lossy_integer() {
        let exact = 9_007_199_254_740_992u64;
        assert_eq!(metres(exact).unwrap().inner(), 9_007_199_254_740_992.);

        let lossy = 9_007_199_254_740_993u64;
        assert_eq!(
            metres(lossy).unwrap_err(),
            QuantityError::LossyLiteralConversion {
                literal: "9007199254740993".to_string(),
                representation: "f64",
            }
        );
        assert!(seconds(u64::MAX).is_err());
        assert!(electron_volts(u128::MAX).is_err());
        // Large powers of two are exact.
        assert!(metres(1u128 << 100).is_ok());
        assert!(metres(-(1i64 << 62)).is_ok());
    }

    #[test]
    fn test_f32_representation() {
        assert_eq!(
            Metre::<f32>::from_literal(16_777_216u32).unwrap().inner(),
            16_777_216.
        );
        assert!(Metre::<f32>::from_literal(16_777_217u32).is_err());
        assert!(Metre::<f32>::from_literal(0.5).is_ok());
        assert!(Metre::<f32>::from_literal(0.1).is_err());
        assert!(Metre::<f32>::from_literal(1e300).is_err());
        assert!(Metre::<f32>::from_literal(f64::INFINITY).is_ok());
        assert!(Metre::<f32>::from_literal(f64::NAN).unwrap().inner().is_nan());
        assert_eq!(
            Metre::<f32>::from_literal(0.1).unwrap_err().to_string(),
            "literal `0.1` cannot be represented exactly as f32"
        );
    }

    #[test]
    fn test_integer_representation() {
        assert_eq!(Second::<i32>::from_literal(3.0).unwrap().inner(), 3);
        assert_eq!(Second::<i32>::from_literal(-2147483648.0).unwrap().inner(), i32::MIN);
        assert!(Second::<i32>::from_literal(2147483648.0).is_err());
        assert!(Second::<i32>::from_literal(2.5).is_err());
        assert!(Second::<i32>::from_literal(f64::NAN).is_err());
        assert!(Second::<i32>::from_literal(f64::INFINITY).is_err());
        assert!(Second::<i32>::from_literal(u64::MAX).is_err());
        assert_eq!(Second::<i64>::from_literal(u32::MAX).unwrap().inner(), 4_294_967_295);
        assert!(Second::<i64>::from_literal(u64::MAX).is_err());
    }

    #[test]
    fn test_fits_mantissa() {
        assert!(fits_mantissa(0, 53));
        assert!(fits_mantissa(1 << 53, 53));
        assert!(fits_mantissa((1 << 53) - 1, 53));
        assert!(!fits_mantissa((1 << 53) + 1, 53));
        assert!(fits_mantissa(u128::MAX - (u128::MAX >> 24), 24));
    }
}
