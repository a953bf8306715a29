use glam::DVec3;

use super::dimension::Dimension;
use super::dimension::NONE;
use super::quantity::Quantity;

macro_rules! unit_system {
    ($($const:ident, $quantity:ident, $($dim:ident: $exp:literal),*, {$($unit:ident, $factor:literal),*}),+ $(,)?) => {
        $(
            pub const $const: Dimension = Dimension {
                $($dim: $exp,)*
                ..NONE
            };

            pub type $quantity = Quantity<f64, $const>;

            impl $quantity {
                $(
                    pub const fn $unit(v: f64) -> $quantity {
                        Quantity::new_unchecked(v * $factor)
                    }
                )*
            }

            paste::paste! {
                pub type [<Vec3 $quantity>] = Quantity<DVec3, $const>;

                impl [<Vec3 $quantity>] {
                    $(
                        pub fn $unit(x: f64, y: f64, z: f64) -> [<Vec3 $quantity>] {
                            Quantity::new_unchecked(DVec3::new(x, y, z) * $factor)
                        }
                    )*
                }
            }
        )+
    }
}

#[rustfmt::skip]
unit_system!(
    DIMENSIONLESS, Dimensionless, length: 0,
    {
        dimensionless, 1.0
    },
    LENGTH, Length, length: 1,
    {
        meters, 1.0,
        centimeters, 1e-2,
        kilometers, 1e3
    },
    TIME, Time, time: 1,
    {
        seconds, 1.0,
        nanoseconds, 1e-9
    },
    MASS, Mass, mass: 1,
    {
        kilograms, 1.0,
        grams, 1e-3
    },
    SPEED, Speed, length: 1, time: -1,
    {
        meters_per_second, 1.0
    },
    MOMENTUM, Momentum, mass: 1, length: 1, time: -1,
    {
        kilogram_meters_per_second, 1.0
    },
    ENERGY, Energy, mass: 1, length: 2, time: -2,
    {
        joules, 1.0,
        electron_volts, 1.602176634e-19,
        kilo_electron_volts, 1.602176634e-16,
        mega_electron_volts, 1.602176634e-13,
        giga_electron_volts, 1.602176634e-10,
        tera_electron_volts, 1.602176634e-7,
        peta_electron_volts, 1.602176634e-4
    },
    GRAMMAGE, Grammage, mass: 1, length: -2,
    {
        kilograms_per_square_meter, 1.0,
        grams_per_square_centimeter, 10.0
    },
    CROSS_SECTION, CrossSection, length: 2,
    {
        square_meters, 1.0,
        barn, 1e-28
    },
    INVERSE_GRAMMAGE, InverseGrammage, mass: -1, length: 2,
    {
        square_meters_per_kilogram, 1.0
    },
    INVERSE_TIME, InverseTime, time: -1,
    {
        per_second, 1.0
    },
    MASS_DENSITY, MassDensity, mass: 1, length: -3,
    {
        kilograms_per_cubic_meter, 1.0,
        grams_per_cubic_centimeter, 1e3
    },
    CHARGE, Charge, current: 1, time: 1,
    {
        coulombs, 1.0
    },
    HEP_ENERGY, HepEnergy, hep_energy: 1,
    {
        electron_volts, 1.0,
        mega_electron_volts, 1e6,
        giga_electron_volts, 1e9,
        tera_electron_volts, 1e12,
        peta_electron_volts, 1e15
    },
);

/// `Frequency` shares the dimension of `InverseTime`; decay rates and the
/// continuous/stochastic sampling code read more naturally under one name
/// or the other depending on context.
pub type Frequency = InverseTime;

impl<const D: Dimension> Quantity<f64, D> {
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub fn powi(&self, n: i32) -> Quantity<f64, { dimension_powi_i32(D, n) }>
    where
        Quantity<f64, { dimension_powi_i32(D, n) }>:,
    {
        Quantity(self.0.powi(n))
    }
}

pub const fn dimension_powi_i32(d: Dimension, n: i32) -> Dimension {
    d.dimension_powi(n as i8)
}

impl<const D: Dimension> Quantity<DVec3, D> {
    pub fn new(x: Quantity<f64, D>, y: Quantity<f64, D>, z: Quantity<f64, D>) -> Self {
        Self(DVec3::new(
            x.value_unchecked(),
            y.value_unchecked(),
            z.value_unchecked(),
        ))
    }

    pub const fn zero() -> Self {
        Self(DVec3::ZERO)
    }

    pub fn x(&self) -> Quantity<f64, D> {
        Quantity(self.0.x)
    }

    pub fn y(&self) -> Quantity<f64, D> {
        Quantity(self.0.y)
    }

    pub fn z(&self) -> Quantity<f64, D> {
        Quantity(self.0.z)
    }

    pub fn length(&self) -> Quantity<f64, D> {
        Quantity(self.0.length())
    }

    pub fn length_squared(&self) -> Quantity<f64, { D.dimension_powi(2) }>
    where
        Quantity<f64, { D.dimension_powi(2) }>:,
    {
        Quantity(self.0.length_squared())
    }

    pub fn normalize(&self) -> Quantity<DVec3, NONE> {
        Quantity(self.0.normalize())
    }

    pub fn dot<const D2: Dimension>(
        &self,
        other: Quantity<DVec3, D2>,
    ) -> Quantity<f64, { D.dimension_mul(D2) }>
    where
        Quantity<f64, { D.dimension_mul(D2) }>:,
    {
        Quantity(self.0.dot(other.0))
    }

    pub fn cross<const D2: Dimension>(
        &self,
        other: Quantity<DVec3, D2>,
    ) -> Quantity<DVec3, { D.dimension_mul(D2) }>
    where
        Quantity<DVec3, { D.dimension_mul(D2) }>:,
    {
        Quantity(self.0.cross(other.0))
    }
}

impl std::iter::Sum for Quantity<f64, INVERSE_GRAMMAGE> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}

impl std::iter::Sum for Quantity<f64, INVERSE_TIME> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}
