/// A compile-time exponent vector over the seven SI base dimensions plus an
/// eighth "HEP energy" dimension used to bridge natural (eV-based) units
/// into the SI ones the rest of the crate is built on.
///
/// `Quantity<S, D>` carries one of these as a const generic parameter, so
/// mismatched dimensions are rejected by the type checker rather than at
/// runtime.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub current: i8,
    pub temperature: i8,
    pub amount: i8,
    pub luminous_intensity: i8,
    pub hep_energy: i8,
}

pub const NONE: Dimension = Dimension {
    length: 0,
    mass: 0,
    time: 0,
    current: 0,
    temperature: 0,
    amount: 0,
    luminous_intensity: 0,
    hep_energy: 0,
};

impl Dimension {
    pub const fn dimension_mul(self, rhs: Self) -> Self {
        Self {
            length: self.length + rhs.length,
            mass: self.mass + rhs.mass,
            time: self.time + rhs.time,
            current: self.current + rhs.current,
            temperature: self.temperature + rhs.temperature,
            amount: self.amount + rhs.amount,
            luminous_intensity: self.luminous_intensity + rhs.luminous_intensity,
            hep_energy: self.hep_energy + rhs.hep_energy,
        }
    }

    pub const fn dimension_div(self, rhs: Self) -> Self {
        Self {
            length: self.length - rhs.length,
            mass: self.mass - rhs.mass,
            time: self.time - rhs.time,
            current: self.current - rhs.current,
            temperature: self.temperature - rhs.temperature,
            amount: self.amount - rhs.amount,
            luminous_intensity: self.luminous_intensity - rhs.luminous_intensity,
            hep_energy: self.hep_energy - rhs.hep_energy,
        }
    }

    pub const fn dimension_inv(self) -> Self {
        NONE.dimension_div(self)
    }

    pub const fn dimension_powi(self, n: i8) -> Self {
        Self {
            length: self.length * n,
            mass: self.mass * n,
            time: self.time * n,
            current: self.current * n,
            temperature: self.temperature * n,
            amount: self.amount * n,
            luminous_intensity: self.luminous_intensity * n,
            hep_energy: self.hep_energy * n,
        }
    }
}
