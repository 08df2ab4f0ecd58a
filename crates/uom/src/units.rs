use typenum::{N1, N2, P1, P2, P3, Z0};

use crate::{quantity::Quantity, unit::Unit};

// Base units
pub type Dimensionless = Unit<Z0, Z0, Z0>;
pub type Length = Unit<P1, Z0, Z0>;
pub type Energy = Unit<Z0, P1, Z0>;
pub type Time = Unit<Z0, Z0, P1>;

// Derived units
pub type Area = Unit<P2, Z0, Z0>;
pub type Volume = Unit<P3, Z0, Z0>;
pub type InverseLength = Unit<N1, Z0, Z0>;
pub type Frequency = Unit<Z0, Z0, N1>;
pub type Velocity = Unit<P1, Z0, N1>;
pub type Acceleration = Unit<P1, Z0, N2>;
pub type Power = Unit<Z0, P1, N1>;
pub type Action = Unit<Z0, P1, P1>;
pub type EnergyPerLength = Unit<N1, P1, Z0>;

pub type Scalar<V = f64> = Quantity<Dimensionless, V>;
pub type Metre<V = f64> = Quantity<Length, V>;
pub type ElectronVolt<V = f64> = Quantity<Energy, V>;
pub type Second<V = f64> = Quantity<Time, V>;
pub type SquareMetre<V = f64> = Quantity<Area, V>;
pub type Hertz<V = f64> = Quantity<Frequency, V>;
pub type MetrePerSecond<V = f64> = Quantity<Velocity, V>;
pub type ElectronVoltPerSecond<V = f64> = Quantity<Power, V>;
pub type ElectronVoltSecond<V = f64> = Quantity<Action, V>;
pub type ElectronVoltPerMetre<V = f64> = Quantity<EnergyPerLength, V>;
