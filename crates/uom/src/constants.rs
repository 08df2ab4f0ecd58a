//! Physical constants in metre, electron-volt and second units.

use crate::units::{ElectronVoltSecond, MetrePerSecond};

/// Speed of light in vacuum (exact by definition of the metre).
pub const SPEED_OF_LIGHT: MetrePerSecond = MetrePerSecond::new(299_792_458.);

/// Planck constant, h / e with both exact since the 2019 SI redefinition,
/// given to 16 significant digits.
pub const PLANCK_CONSTANT: ElectronVoltSecond =
    ElectronVoltSecond::new(4.135_667_696_923_859e-15);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::{ElectronVolt, Hertz, Metre};

    #[test]
    fn test_planck_constant() {
        // h in J s divided by the elementary charge in C.
        let h_over_e = 6.626_070_15e-34 / 1.602_176_634e-19;
        assert_relative_eq!(PLANCK_CONSTANT.inner(), h_over_e, max_relative = 1e-15);
    }

    #[test]
    fn test_photon_energy() {
        let wavelength: Metre = Metre::new(480e-9);
        let energy: ElectronVolt = PLANCK_CONSTANT * SPEED_OF_LIGHT / wavelength;
        assert_relative_eq!(energy.inner(), 2.583_01, max_relative = 1e-5);

        let frequency: Hertz = SPEED_OF_LIGHT / wavelength;
        assert_relative_eq!(
            (PLANCK_CONSTANT * frequency).inner(),
            energy.inner(),
            max_relative = 1e-12
        );
    }
}
