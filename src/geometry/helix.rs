use glam::DVec3;

use super::point_vector::Point;
use super::point_vector::Vector;
use crate::units::Length;
use crate::units::Speed;
use crate::units::Time;
use crate::units::INVERSE_TIME;

/// A circular-helical track around a fixed axis, for a future magnetic-field
/// tracker (spec §4.3: "noted for future magnetic field work... not
/// exercised by the straight-line tracker"). Implemented to the same
/// contract as [`super::line::Line`] so that tracker has a real type to
/// return, rather than only a doc comment.
#[derive(Debug, Clone, Copy)]
pub struct Helix {
    pub center: Point,
    pub axis: Vector<{ crate::units::NONE }>,
    /// An arbitrary unit vector perpendicular to `axis`, fixing the phase
    /// origin of the circular motion.
    pub reference: Vector<{ crate::units::NONE }>,
    pub radius: Length,
    pub angular_frequency: Vector<INVERSE_TIME>,
    pub speed_along_axis: Speed,
}

impl Helix {
    /// Constructs a helix from an axis and any vector not parallel to it;
    /// `reference` is derived as the component of that vector perpendicular
    /// to `axis`.
    pub fn new(
        center: Point,
        axis: Vector<{ crate::units::NONE }>,
        radius: Length,
        angular_frequency: Vector<INVERSE_TIME>,
        speed_along_axis: Speed,
        hint: DVec3,
    ) -> Self {
        let axis_local = axis.local.value_unchecked();
        let perp = hint - axis_local * hint.dot(axis_local);
        assert!(
            perp.length_squared() > 1e-20,
            "hint vector must not be parallel to the helix axis"
        );
        let reference = Vector::new(axis.system, crate::units::Quantity::new_unchecked(perp.normalize()));
        Self {
            center,
            axis,
            reference,
            radius,
            angular_frequency,
            speed_along_axis,
        }
    }

    fn in_plane_basis(&self) -> (DVec3, DVec3) {
        let axis = self.axis.local.value_unchecked();
        let e1 = self.reference.local.value_unchecked();
        let e2 = axis.cross(e1);
        (e1, e2)
    }

    pub fn position(&self, t: Time) -> Point {
        let omega = self.angular_frequency.length().value_unchecked();
        let angle = omega * t.value_unchecked();
        let (sin, cos) = angle.sin_cos();
        let (e1, e2) = self.in_plane_basis();
        let axis = self.axis.local.value_unchecked();
        let offset = (e1 * cos + e2 * sin) * self.radius.value_unchecked()
            + axis * (self.speed_along_axis * t).value_unchecked();
        let center = self.center.local.value_unchecked();
        Point::new(
            self.center.system,
            crate::units::Vec3Length::meters(
                center.x + offset.x,
                center.y + offset.y,
                center.z + offset.z,
            ),
        )
    }

    pub fn arclength(&self, t1: Time, t2: Time) -> Length {
        let pitch_speed = (self.angular_frequency.length().value_unchecked()
            * self.radius.value_unchecked())
        .hypot(self.speed_along_axis.value_unchecked());
        Length::meters(pitch_speed * (t2 - t1).value_unchecked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordinateSystems;
    use crate::units::assert_is_close;
    use crate::units::Vec3Length;

    #[test]
    fn helix_starts_at_radius_from_axis() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let center = Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0));
        let axis = Vector::new(root, crate::units::Quantity::new_unchecked(DVec3::Z));
        let helix = Helix::new(
            center,
            axis,
            Length::meters(2.0),
            Vector::new(root, crate::units::Quantity::new_unchecked(DVec3::Z)),
            Speed::meters_per_second(0.0),
            DVec3::X,
        );
        let p = helix.position(Time::seconds(0.0));
        let r = (p - center).length();
        assert_is_close(r, Length::meters(2.0));
    }
}
