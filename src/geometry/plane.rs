use super::point_vector::Point;
use super::point_vector::Vector;
use crate::units::Length;
use crate::units::NONE;

/// An infinite plane through `center` with unit `normal` (spec §3).
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub center: Point,
    pub normal: Vector<NONE>,
}

impl Plane {
    pub fn new(center: Point, normal: Vector<NONE>) -> Self {
        Self { center, normal }
    }

    /// `true` iff `point` lies on the side `normal` points towards.
    pub fn is_above(&self, point: &Point) -> bool {
        self.signed_distance(point).value_unchecked() > 0.0
    }

    /// Signed distance from the plane along `normal`; used by observation
    /// planes to report the absorbing plane's distance metric (spec §6).
    pub fn signed_distance(&self, point: &Point) -> Length {
        (*point - self.center).dot(&self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordinateSystems;
    use crate::units::assert_is_close;

    // Observation-plane processes are external collaborators (spec §6); this
    // exercises the distance primitive they'd build `max_step_length` on top
    // of, against the tilted-plane scenario from spec §8.
    #[test]
    fn tilted_plane_distance_matches_expected_step_length() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let plane = Plane::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            Vector::new(root, Vec3Length::meters(1.0, 1.0, 0.5)).normalized(),
        );
        let start = Point::new(root, Vec3Length::meters(0.0, 1.0, 10.0));
        let direction = Vector::new(root, Vec3Length::meters(0.0, 0.0, -1.0)).normalized();

        let distance = plane.signed_distance(&start);
        let closing_rate = -direction.dot(&plane.normal);
        let step_to_plane = distance / closing_rate;

        assert_is_close(step_to_plane, Length::meters(12.0));
    }

    #[test]
    fn horizontal_plane_is_above_for_positive_z() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let plane = Plane::new(
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            Vector::new(root, Vec3Length::meters(0.0, 0.0, 1.0)),
        );
        let above = Point::new(root, Vec3Length::meters(0.0, 1.0, 10.0));
        let below = Point::new(root, Vec3Length::meters(0.0, 1.0, -10.0));
        assert!(plane.is_above(&above));
        assert!(!plane.is_above(&below));
    }
}
