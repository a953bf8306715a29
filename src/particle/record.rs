use crate::environment::NodeId;
use crate::geometry::Point;
use crate::geometry::Vector;
use crate::particle::species;
use crate::particle::species::SpeciesCode;
use crate::units::HepEnergy;
use crate::units::Time;
use crate::units::HEP_ENERGY;
use crate::units::NONE;
use crate::units::SPEED_OF_LIGHT;

/// A nuclide (mass number, charge number); stored in the stack's nuclear
/// side-table and addressed through [`Particle::nuclear`] when the species
/// is [`species::NUCLEUS`] (spec §3 "Particle record", §4.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nuclide {
    pub mass_number: u16,
    pub charge_number: u16,
}

/// One cascade particle's kinematic state. `energy` and `momentum` live on
/// the natural-unit `HepEnergy` axis (spec §4.1), matching the
/// `energy_ev`-denominated observation record format of spec §6; everything
/// geometric (`position`, `time`) is SI.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub species: SpeciesCode,
    pub energy: HepEnergy,
    pub momentum: Vector<HEP_ENERGY>,
    pub position: Point,
    pub time: Time,
    pub node: NodeId,
}

impl Particle {
    /// Rest mass, consulting `nuclear` when `species` is [`species::NUCLEUS`].
    pub fn mass(&self, nuclear: Option<Nuclide>) -> HepEnergy {
        if species::is_nucleus(self.species) {
            let nuclide = nuclear.expect("nucleus particle is missing its (A, Z) side-table entry");
            species::nucleus_rest_mass(nuclide.mass_number as f64)
        } else {
            species::rest_mass(self.species)
        }
    }

    pub fn charge_number(&self, nuclear: Option<Nuclide>) -> i32 {
        if species::is_nucleus(self.species) {
            let nuclide = nuclear.expect("nucleus particle is missing its (A, Z) side-table entry");
            nuclide.charge_number as i32
        } else {
            species::charge_number(self.species)
        }
    }

    /// Direction of travel: `momentum / energy`, a dimensionless beta vector
    /// (spec §3 "Derived: ... direction = momentum/energy").
    pub fn direction(&self) -> Vector<NONE> {
        self.momentum / self.energy
    }

    /// Lab-frame velocity, `direction() * c`.
    pub fn velocity(&self) -> Vector<crate::units::SPEED> {
        self.direction() * SPEED_OF_LIGHT
    }
}
