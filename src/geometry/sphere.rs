use super::point_vector::Point;
use super::volume::Volume;
use crate::units::Length;

/// A sphere volume: `(center, radius)` (spec §3).
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Point,
    pub radius: Length,
}

impl Sphere {
    pub fn new(center: Point, radius: Length) -> Self {
        Self { center, radius }
    }

    /// A sphere with infinite radius contains every point; used for the
    /// root ("universe") volume-tree node (spec §3 invariants).
    pub fn universe(center: Point) -> Self {
        Self {
            center,
            radius: Length::meters(f64::INFINITY),
        }
    }

    pub fn is_universe(&self) -> bool {
        self.radius.value_unchecked().is_infinite()
    }

    /// The two intersection parameters (in time units of the line's own
    /// parametrization, i.e. with `t` such that `line.position(t)` is on the
    /// line) of `line` with this sphere's boundary, smaller first. `None`
    /// if the line misses the sphere entirely.
    pub fn line_intersection_times(
        &self,
        line: &super::line::Line,
    ) -> Option<(crate::units::Time, crate::units::Time)> {
        if self.is_universe() {
            return None;
        }
        let oc = line.r0 - self.center;
        let v = line.v0;
        let a = v.dot(&v);
        let b = 2.0 * oc.dot(&v);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant.value_unchecked() < 0.0 {
            return None;
        }
        let sqrt_disc = discriminant.value_unchecked().sqrt();
        let a_val = a.value_unchecked();
        let t1 = (-b.value_unchecked() - sqrt_disc) / (2.0 * a_val);
        let t2 = (-b.value_unchecked() + sqrt_disc) / (2.0 * a_val);
        Some((
            crate::units::Time::seconds(t1.min(t2)),
            crate::units::Time::seconds(t1.max(t2)),
        ))
    }
}

impl Volume for Sphere {
    fn contains(&self, point: &Point) -> bool {
        if self.is_universe() {
            return true;
        }
        (*point - self.center).length() <= self.radius
    }
}
