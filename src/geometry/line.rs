use super::point_vector::Point;
use super::point_vector::Vector;
use crate::units::Length;
use crate::units::Time;
use crate::units::SPEED;

/// A straight-line track: `position(t) = r0 + v0 * t` (spec §4.3).
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub r0: Point,
    pub v0: Vector<SPEED>,
}

impl Line {
    pub fn new(r0: Point, v0: Vector<SPEED>) -> Self {
        Self { r0, v0 }
    }

    pub fn position(&self, t: Time) -> Point {
        self.r0 + (self.v0 * t)
    }

    pub fn arclength(&self, t1: Time, t2: Time) -> Length {
        self.v0.length() * (t2 - t1)
    }

    pub fn position_from_arclength(&self, l: Length) -> Point {
        self.r0 + self.direction() * l
    }

    pub fn time_from_arclength(&self, l: Length) -> Time {
        l / self.v0.length()
    }

    /// The normalized direction of travel.
    pub fn direction(&self) -> Vector<{ crate::units::NONE }> {
        self.v0.normalized()
    }
}
