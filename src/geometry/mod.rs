//! Coordinate systems and geometry primitives (spec §2.2, §4.2, §4.3).

mod coordinate_system;
mod helix;
mod line;
mod plane;
mod point_vector;
mod sphere;
mod trajectory;
mod volume;

pub use coordinate_system::CoordinateSystems;
pub use coordinate_system::RigidTransform;
pub use coordinate_system::SystemId;
pub use helix::Helix;
pub use line::Line;
pub use plane::Plane;
pub use point_vector::Point;
pub use point_vector::Vector;
pub use sphere::Sphere;
pub use trajectory::Trajectory;
pub use volume::Volume;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::assert_is_close;
    use crate::units::Dimensionless;
    use crate::units::Length;
    use crate::units::Vec3Length;
    use glam::DVec3;

    #[test]
    fn coordinate_round_trip() {
        let mut systems = CoordinateSystems::new();
        let root = systems.root();
        let a = systems.translate(root, Vec3Length::meters(1.0, 2.0, 3.0));
        let b = systems.rotate(a, DVec3::Z, Dimensionless::dimensionless(std::f64::consts::FRAC_PI_2));

        let p = Point::new(a, Vec3Length::meters(5.0, 0.0, 0.0));
        let in_b = p.components_in(&systems, b);
        let back_in_a = Point::new(b, in_b).components_in(&systems, a);

        assert_is_close(back_in_a.x(), p.local.x());
        assert_is_close(back_in_a.y(), p.local.y());
        assert_is_close(back_in_a.z(), p.local.z());
    }

    #[test]
    fn translate_then_components_in_root() {
        let mut systems = CoordinateSystems::new();
        let root = systems.root();
        let child = systems.translate(root, Vec3Length::meters(10.0, 0.0, 0.0));
        let p = Point::new(child, Vec3Length::meters(0.0, 5.0, 0.0));
        let in_root = p.components_in(&systems, root);
        assert_is_close(in_root.x(), Length::meters(10.0));
        assert_is_close(in_root.y(), Length::meters(5.0));
    }

    #[test]
    fn rotate_to_z_aligns_axis() {
        let mut systems = CoordinateSystems::new();
        let root = systems.root();
        let child = systems.rotate_to_z(root, DVec3::X);
        let v = Vector::new(child, Vec3Length::meters(0.0, 0.0, 1.0));
        let in_root = v.components_in(&systems, root);
        assert_is_close(in_root.x(), Length::meters(1.0));
        assert_is_close(in_root.y(), Length::meters(0.0));
        assert_is_close(in_root.z(), Length::meters(0.0));
    }
}
