use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Sub;

use glam::DVec3;

use super::coordinate_system::CoordinateSystems;
use super::coordinate_system::SystemId;
use crate::units::Dimension;
use crate::units::Quantity;
use crate::units::Vec3Length;
use crate::units::LENGTH;

/// A dimensioned vector (velocity, momentum, displacement, ...) attached to
/// a coordinate system. Transforms under rotation only (spec §3).
#[derive(Debug, Clone, Copy)]
pub struct Vector<const D: Dimension> {
    pub system: SystemId,
    pub local: Quantity<DVec3, D>,
}

impl<const D: Dimension> Vector<D> {
    pub fn new(system: SystemId, local: Quantity<DVec3, D>) -> Self {
        Self { system, local }
    }

    pub fn length(&self) -> Quantity<f64, D> {
        self.local.length()
    }

    pub fn normalized(&self) -> Vector<{ crate::units::NONE }> {
        Vector::new(self.system, self.local.normalize())
    }

    pub fn dot<const D2: Dimension>(&self, other: &Vector<D2>) -> Quantity<f64, { D.dimension_mul(D2) }>
    where
        Quantity<f64, { D.dimension_mul(D2) }>:,
    {
        assert_eq!(
            self.system, other.system,
            "dot product of vectors in different coordinate systems; transform one first"
        );
        self.local.dot(other.local)
    }

    pub fn cross<const D2: Dimension>(
        &self,
        other: &Vector<D2>,
    ) -> Vector<{ D.dimension_mul(D2) }>
    where
        Quantity<DVec3, { D.dimension_mul(D2) }>:,
    {
        assert_eq!(
            self.system, other.system,
            "cross product of vectors in different coordinate systems; transform one first"
        );
        Vector::new(self.system, self.local.cross(other.local))
    }

    /// The component of `self` parallel to `direction` (which must be a
    /// unit vector): `(a . v_hat) v_hat`.
    pub fn parallel_projection_onto(
        &self,
        direction: &Vector<{ crate::units::NONE }>,
    ) -> Vector<D> {
        assert_eq!(self.system, direction.system);
        let scale = self.local.dot(direction.local);
        Vector::new(self.system, Quantity::new_unchecked(direction.local.value_unchecked() * scale))
    }

    /// This vector's components as seen from `target`, computed lazily via
    /// the coordinate systems' least common ancestor (spec §4.2).
    pub fn components_in(&self, systems: &CoordinateSystems, target: SystemId) -> Quantity<DVec3, D> {
        let transform = systems.transform_between(self.system, target);
        Quantity::new_unchecked(transform.apply_to_vector(self.local.value_unchecked()))
    }
}

impl<const D: Dimension> Add for Vector<D> {
    type Output = Vector<D>;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.system, rhs.system, "vectors live in different coordinate systems");
        Vector::new(self.system, self.local + rhs.local)
    }
}

impl<const D: Dimension> Sub for Vector<D> {
    type Output = Vector<D>;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(self.system, rhs.system, "vectors live in different coordinate systems");
        Vector::new(self.system, self.local - rhs.local)
    }
}

impl<const D1: Dimension, const D2: Dimension> Mul<Quantity<f64, D2>> for Vector<D1>
where
    Quantity<DVec3, { D1.dimension_mul(D2) }>:,
{
    type Output = Vector<{ D1.dimension_mul(D2) }>;

    fn mul(self, rhs: Quantity<f64, D2>) -> Self::Output {
        Vector::new(self.system, self.local * rhs)
    }
}

impl<const D1: Dimension, const D2: Dimension> Div<Quantity<f64, D2>> for Vector<D1>
where
    Quantity<DVec3, { D1.dimension_div(D2) }>:,
{
    type Output = Vector<{ D1.dimension_div(D2) }>;

    fn div(self, rhs: Quantity<f64, D2>) -> Self::Output {
        Vector::new(self.system, self.local / rhs)
    }
}

/// A position attached to a coordinate system. Transforms affinely
/// (rotation + translation); see [`Vector`] for the linear-only case.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub system: SystemId,
    pub local: Vec3Length,
}

impl Point {
    pub fn new(system: SystemId, local: Vec3Length) -> Self {
        Self { system, local }
    }

    /// This point's coordinates as seen from `target`.
    pub fn components_in(&self, systems: &CoordinateSystems, target: SystemId) -> Vec3Length {
        let transform = systems.transform_between(self.system, target);
        Quantity::new_unchecked(transform.apply_to_point(self.local.value_unchecked()))
    }
}

impl Sub for Point {
    type Output = Vector<LENGTH>;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.system, rhs.system,
            "points live in different coordinate systems; call components_in first"
        );
        Vector::new(self.system, self.local - rhs.local)
    }
}

impl Add<Vector<LENGTH>> for Point {
    type Output = Point;

    fn add(self, rhs: Vector<LENGTH>) -> Self::Output {
        assert_eq!(
            self.system, rhs.system,
            "point and vector live in different coordinate systems; call components_in first"
        );
        Point::new(self.system, self.local + rhs.local)
    }
}
