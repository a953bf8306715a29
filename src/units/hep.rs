//! Conversions between the natural-unit `HepEnergy` axis and the SI-based
//! quantities the rest of the crate computes with (spec §4.1, §3
//! `Quantity<Dim, Rep>`).
//!
//! `HepEnergy` is a distinct dimension from `Energy`: a cascade primary's
//! kinetic energy is typically quoted in GeV/TeV/PeV by a caller, but every
//! internal computation (stopping power, grammage, trajectories) runs in SI.
//! These functions are the only bridge; there is no implicit conversion.

use super::constants::HBAR_C;
use super::constants::HBAR_T;
use super::quantities_and_units::Energy;
use super::quantities_and_units::HepEnergy;
use super::quantities_and_units::Length;
use super::quantities_and_units::Time;

const EV_IN_JOULES: f64 = 1.602_176_634e-19;

impl HepEnergy {
    /// This quantity's value re-expressed as an `Energy` (SI joules).
    pub fn to_si_energy(self) -> Energy {
        Energy::joules(self.value_unchecked() * EV_IN_JOULES)
    }

    /// Reinterprets this energy's inverse as a length via `ħc/E`, e.g. the
    /// reduced Compton wavelength of a particle of rest energy `E`.
    pub fn to_length(self) -> Length {
        HBAR_C / self
    }

    /// Reinterprets this energy's inverse as a time via `ħ/E`.
    pub fn to_time(self) -> Time {
        HBAR_T / self
    }
}

impl Energy {
    /// This SI energy re-expressed on the `HepEnergy` axis.
    pub fn to_hep_energy(self) -> HepEnergy {
        HepEnergy::electron_volts(self.value_unchecked() / EV_IN_JOULES)
    }
}
