use std::cmp::Ordering;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use super::dimension::Dimension;
use super::dimension::NONE;

/// A scalar or vector value tagged with a compile-time physical dimension.
///
/// `S` is the representation (`f64` for scalars, `glam::DVec3` for vectors).
/// `D` is the dimension exponent vector. Two quantities of different `D` can
/// never be added, subtracted or compared; multiplication and division
/// combine the exponents and produce a quantity of the resulting dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<S, const D: Dimension>(pub(crate) S);

impl<S, const D: Dimension> Quantity<S, D> {
    pub const fn new_unchecked(value: S) -> Self {
        Self(value)
    }

    /// Unwrap the raw representation, regardless of dimension. The result
    /// depends on the crate's base units (SI, see `units::constants`); use
    /// sparingly and prefer `to_value(unit)` at API boundaries.
    pub fn value_unchecked(&self) -> S
    where
        S: Copy,
    {
        self.0
    }
}

impl<S> Quantity<S, NONE> {
    pub fn value(&self) -> S
    where
        S: Copy,
    {
        self.0
    }
}

impl<S, const D: Dimension> Add for Quantity<S, D>
where
    S: Add<Output = S>,
{
    type Output = Quantity<S, D>;

    fn add(self, rhs: Self) -> Self::Output {
        Quantity(self.0 + rhs.0)
    }
}

impl<S, const D: Dimension> AddAssign for Quantity<S, D>
where
    S: AddAssign<S>,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<S, const D: Dimension> Sub for Quantity<S, D>
where
    S: Sub<Output = S>,
{
    type Output = Quantity<S, D>;

    fn sub(self, rhs: Self) -> Self::Output {
        Quantity(self.0 - rhs.0)
    }
}

impl<S, const D: Dimension> SubAssign for Quantity<S, D>
where
    S: SubAssign<S>,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<S, const D: Dimension> Neg for Quantity<S, D>
where
    S: Neg<Output = S>,
{
    type Output = Quantity<S, D>;

    fn neg(self) -> Self::Output {
        Quantity(-self.0)
    }
}

impl<S, const D: Dimension> Mul<f64> for Quantity<S, D>
where
    S: Mul<f64, Output = S>,
{
    type Output = Quantity<S, D>;

    fn mul(self, rhs: f64) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<S, const D: Dimension> Mul<Quantity<S, D>> for f64
where
    f64: Mul<S, Output = S>,
{
    type Output = Quantity<S, D>;

    fn mul(self, rhs: Quantity<S, D>) -> Self::Output {
        Quantity(self * rhs.0)
    }
}

impl<S, const D: Dimension> Div<f64> for Quantity<S, D>
where
    S: Div<f64, Output = S>,
{
    type Output = Quantity<S, D>;

    fn div(self, rhs: f64) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

impl<SL, SR, const DL: Dimension, const DR: Dimension> Mul<Quantity<SR, DR>> for Quantity<SL, DL>
where
    Quantity<SL, { DL.dimension_mul(DR) }>:,
    SL: Mul<SR, Output = SL>,
{
    type Output = Quantity<SL, { DL.dimension_mul(DR) }>;

    fn mul(self, rhs: Quantity<SR, DR>) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl<SL, SR, const DL: Dimension, const DR: Dimension> Div<Quantity<SR, DR>> for Quantity<SL, DL>
where
    Quantity<SL, { DL.dimension_div(DR) }>:,
    SL: Div<SR, Output = SL>,
{
    type Output = Quantity<SL, { DL.dimension_div(DR) }>;

    fn div(self, rhs: Quantity<SR, DR>) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl<const D: Dimension> PartialOrd for Quantity<f64, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<const D: Dimension> Quantity<f64, D> {
    pub fn min(self, other: Self) -> Self {
        Quantity(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Quantity(self.0.max(other.0))
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }
}

impl<S, const D: Dimension> Quantity<S, D>
where
    Quantity<S, { D.dimension_div(D) }>:,
    S: Div<S, Output = S> + Copy,
{
    /// Express this quantity as a bare number of `unit`s, e.g.
    /// `length.to_value(Length::meters)`.
    pub fn to_value(&self, unit: impl Fn(f64) -> Quantity<S, D>) -> S {
        (*self / unit(1.0)).value_unchecked()
    }
}

impl<S> std::fmt::Display for Quantity<S, NONE>
where
    S: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
