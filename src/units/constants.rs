use super::dimension::Dimension;
use super::dimension::NONE;
use super::quantity::Quantity;
use super::quantities_and_units::Speed;

/// Speed of light in vacuum.
pub const SPEED_OF_LIGHT: Speed = Speed::meters_per_second(299_792_458.0);

const HBAR_C_DIMENSION: Dimension = Dimension {
    length: 1,
    hep_energy: 1,
    ..NONE
};
/// Reduced Planck constant times the speed of light, expressed in
/// electronvolt-meters. Used to reinterpret a `HepEnergy` as a `Length`
/// (spec §4.1: "an energy inverse may be reinterpreted as a length").
pub const HBAR_C: Quantity<f64, HBAR_C_DIMENSION> = Quantity::new_unchecked(1.973_269_804_4e-7);

const HBAR_T_DIMENSION: Dimension = Dimension {
    time: 1,
    hep_energy: 1,
    ..NONE
};
/// Reduced Planck constant in electronvolt-seconds, the time-domain
/// counterpart of [`HBAR_C`].
pub const HBAR_T: Quantity<f64, HBAR_T_DIMENSION> = Quantity::new_unchecked(6.582_119_569e-16);

/// Boltzmann constant in SI units (J/K). Exposed for material-model code
/// that needs a temperature-to-energy bridge; the cascade engine itself
/// never reads temperature.
pub const BOLTZMANN_CONSTANT_SI: f64 = 1.380_649e-23;

/// Avogadro constant, 1/mol.
pub const AVOGADRO_CONSTANT_SI: f64 = 6.022_140_76e23;

/// Unified atomic mass unit in kilograms.
pub const ATOMIC_MASS_UNIT_KG: f64 = 1.660_539_066_60e-27;

/// Elementary charge in coulombs.
pub const ELEMENTARY_CHARGE_SI: f64 = 1.602_176_634e-19;
