//! Plain-data configuration structs a consuming binary can deserialize from
//! YAML via `serde_yaml` (SPEC_FULL.md §A.3). The core itself never reads a
//! file; it only promises these shapes round-trip through `serde` and names
//! the section a consumer's configuration file would file them under.

use derive_custom::cascade_parameters;

use crate::units::HepEnergy;

/// Configures an absorbing energy cut: below `threshold_ev`, a particle is
/// removed from the cascade (spec §8 property 7 "absorbing cut").
#[cascade_parameters("energy_cut")]
pub struct EnergyCutParameters {
    pub threshold_ev: f64,
}

impl EnergyCutParameters {
    pub fn threshold(&self) -> HepEnergy {
        HepEnergy::electron_volts(self.threshold_ev)
    }
}

/// Configures a [`crate::process::SwitchProcess`]'s energy threshold (spec
/// §4.6 "SwitchProcess").
#[cascade_parameters("switch_threshold")]
pub struct SwitchThresholdParameters {
    pub threshold_ev: f64,
}

impl SwitchThresholdParameters {
    pub fn threshold(&self) -> HepEnergy {
        HepEnergy::electron_volts(self.threshold_ev)
    }
}
