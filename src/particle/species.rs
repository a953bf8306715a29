use crate::units::HepEnergy;

/// A PDG-style species code. Negative codes are antiparticles by convention;
/// [`NUCLEUS`] is the sentinel used for any nucleus that is not itself one of
/// the named leptons/hadrons below, whose mass and charge instead come from
/// an (A, Z) pair carried alongside it (spec §3 "Particle record", §4.5
/// "Nuclear extension").
pub type SpeciesCode = i32;

pub const GAMMA: SpeciesCode = 22;
pub const ELECTRON: SpeciesCode = 11;
pub const POSITRON: SpeciesCode = -11;
pub const MUON_MINUS: SpeciesCode = 13;
pub const MUON_PLUS: SpeciesCode = -13;
pub const ELECTRON_NEUTRINO: SpeciesCode = 12;
pub const ELECTRON_ANTINEUTRINO: SpeciesCode = -12;
pub const MUON_NEUTRINO: SpeciesCode = 14;
pub const MUON_ANTINEUTRINO: SpeciesCode = -14;
pub const PROTON: SpeciesCode = 2212;
pub const ANTIPROTON: SpeciesCode = -2212;
pub const NEUTRON: SpeciesCode = 2112;
pub const PI_PLUS: SpeciesCode = 211;
pub const PI_MINUS: SpeciesCode = -211;
pub const PI_ZERO: SpeciesCode = 111;
pub const KAON_PLUS: SpeciesCode = 321;
pub const KAON_MINUS: SpeciesCode = -321;
pub const KAON_LONG: SpeciesCode = 130;
pub const KAON_SHORT: SpeciesCode = 310;
pub const NUCLEUS: SpeciesCode = 1_000_000_000;

const ATOMIC_MASS_UNIT_MEV: f64 = 931.494;

/// `true` iff `species` requires an (A, Z) pair in the stack's nuclear
/// extension (spec §4.5).
pub fn is_nucleus(species: SpeciesCode) -> bool {
    species == NUCLEUS
}

/// Rest mass of a non-nuclear species, looked up by PDG code. Panics on an
/// unknown code or on [`NUCLEUS`] (use [`nucleus_rest_mass`] instead).
pub fn rest_mass(species: SpeciesCode) -> HepEnergy {
    HepEnergy::mega_electron_volts(match species.abs() {
        22 | 12 | 14 | 16 => 0.0,
        11 => 0.510_998_95,
        13 => 105.658_375,
        2212 => 938.272_088,
        2112 => 939.565_420,
        211 => 139.570_39,
        111 => 134.976_8,
        321 => 493.677,
        130 | 310 => 497.611,
        other => panic!("no rest mass tabulated for species code {other}"),
    })
}

/// Rest mass of a nucleus with the given mass number, approximated as
/// `A` atomic mass units (binding energy is not modeled).
pub fn nucleus_rest_mass(mass_number: f64) -> HepEnergy {
    HepEnergy::mega_electron_volts(mass_number * ATOMIC_MASS_UNIT_MEV)
}

/// Charge number (in units of the elementary charge) of a non-nuclear
/// species. Panics on [`NUCLEUS`] (charge comes from `Z` instead).
///
/// Leptons carry the opposite sign convention from hadrons under PDG coding
/// (the positively-coded electron `11` has charge -1), so this cannot be a
/// single sign-times-magnitude rule; each code is listed explicitly.
pub fn charge_number(species: SpeciesCode) -> i32 {
    match species {
        22 | 12 | -12 | 14 | -14 | 16 | -16 | 2112 | -2112 | 111 | 130 | 310 => 0,
        11 => -1,
        -11 => 1,
        13 => -1,
        -13 => 1,
        2212 => 1,
        -2212 => -1,
        211 | 321 => 1,
        -211 | -321 => -1,
        other => panic!("no charge tabulated for species code {other}"),
    }
}
