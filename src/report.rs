use std::{io::Write, num::ParseFloatError, str::FromStr};

use anyhow::{Context, Result};
use dimq_uom::{
    constants::{PLANCK_CONSTANT, SPEED_OF_LIGHT},
    ElectronVolt, ElectronVoltPerMetre, ElectronVoltPerSecond, ElectronVoltSecond, Hertz, Metre,
    MetrePerSecond, Quantity, QuantityError, Second, SquareMetre,
};
use tracing::debug;

/// A number given on the command line.
///
/// Plain non-negative integers take the unsigned-integer literal path, anything
/// else is parsed as a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Unsigned(u64),
    Float(f64),
}

impl FromStr for Number {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(value) => Ok(Self::Unsigned(value)),
            Err(_) => s.parse::<f64>().map(Self::Float),
        }
    }
}

impl Number {
    pub(crate) fn to_quantity<U>(self) -> Result<Quantity<U>, QuantityError> {
        match self {
            Self::Unsigned(value) => Quantity::from_literal(value),
            Self::Float(value) => Quantity::from_literal(value),
        }
    }
}

/// Writes the given quantities followed by every quantity derivable from
/// them.
pub(crate) fn describe<W: Write>(
    out: &mut W,
    length: Option<Number>,
    energy: Option<Number>,
    time: Option<Number>,
) -> Result<()> {
    let length: Option<Metre> = length
        .map(Number::to_quantity)
        .transpose()
        .context("Invalid length")?;
    let energy: Option<ElectronVolt> = energy
        .map(Number::to_quantity)
        .transpose()
        .context("Invalid energy")?;
    let time: Option<Second> = time
        .map(Number::to_quantity)
        .transpose()
        .context("Invalid time")?;
    debug!(?length, ?energy, ?time, "Describing quantities.");

    if let Some(length) = length {
        writeln!(out, "length: {length}")?;
        let area: SquareMetre = length * length;
        writeln!(out, "area: {area}")?;
    }
    if let Some(energy) = energy {
        writeln!(out, "energy: {energy}")?;
    }
    if let Some(time) = time {
        writeln!(out, "time: {time}")?;
        let frequency: Hertz = 1. / time;
        writeln!(out, "frequency: {frequency}")?;
    }
    if let (Some(length), Some(time)) = (length, time) {
        let velocity: MetrePerSecond = length / time;
        writeln!(out, "velocity: {velocity}")?;
    }
    if let (Some(energy), Some(time)) = (energy, time) {
        let power: ElectronVoltPerSecond = energy / time;
        writeln!(out, "power: {power}")?;
        let action: ElectronVoltSecond = energy * time;
        writeln!(out, "action: {action}")?;
    }
    if let (Some(energy), Some(length)) = (energy, length) {
        let per_length: ElectronVoltPerMetre = energy / length;
        writeln!(out, "energy per length: {per_length}")?;
    }

    Ok(())
}

/// Writes energy and frequency of a photon of the given wavelength (in
/// metres).
pub(crate) fn photon<W: Write>(out: &mut W, wavelength: Number) -> Result<()> {
    let wavelength: Metre = wavelength.to_quantity().context("Invalid wavelength")?;
    let energy: ElectronVolt = PLANCK_CONSTANT * SPEED_OF_LIGHT / wavelength;
    let frequency: Hertz = SPEED_OF_LIGHT / wavelength;

    writeln!(out, "wavelength: {wavelength}")?;
    writeln!(out, "energy: {energy}")?;
    writeln!(out, "frequency: {frequency}")?;
    Ok(())
}
