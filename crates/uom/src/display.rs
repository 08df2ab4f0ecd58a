use std::fmt;

use crate::{
    quantity::Quantity,
    unit::{Dimension, Exponents},
};

/// Renders a single base unit with its power, e.g. `m`, `m^2` or `s^-1`.
///
/// Returns an empty string for zero power.
pub fn unit_suffix(power: i32, abbrev: &str) -> String {
    let mut suffix = String::new();
    if power != 0 {
        suffix.push_str(abbrev);
        if power != 1 {
            suffix.push('^');
            suffix.push_str(&power.to_string());
        }
    }
    suffix
}

/// Writes the unit suffix in fixed order: length, energy, time.
impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (power, abbrev) in [(self.length, "m"), (self.energy, "eV"), (self.time, "s")] {
            f.write_str(&unit_suffix(power, abbrev))?;
        }
        Ok(())
    }
}

/// Formats the value (respecting precision and width) followed by the unit
/// suffix, e.g. `3m^2s^-1`. Dimensionless quantities print the value only.
impl<U: Dimension, V: fmt::Display> fmt::Display for Quantity<U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        write!(f, "{}", U::exponents())
    }
}
