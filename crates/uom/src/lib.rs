//! Type-safe units of measurement and compile-time dimensional analysis.
//!
//! Units are built from powers of metres, electron-volts and seconds. Adding,
//! subtracting or comparing quantities of different units does not compile,
//! multiplying or dividing them derives the unit of the result.

pub use display::unit_suffix;
pub use literal::{electron_volts, metres, seconds, ExactFrom};
pub use quantity::{Quantity, QuantityError, QuantityValue};
pub use unit::{
    Dimension, Exponents, Product, Quotient, Ratio, Reciprocal, ScaleFactor, ScaleRatio, Unit,
    UnitDiv, UnitMul, UnitRatio,
};
pub use units::*;

pub mod constants;
mod display;
mod literal;
mod quantity;
mod unit;
mod units;
mod values;
