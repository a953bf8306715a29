use crate::environment::NodeId;
use crate::environment::VolumeTree;
use crate::geometry::CoordinateSystems;
use crate::geometry::Line;
use crate::geometry::Point;
use crate::geometry::Trajectory;
use crate::geometry::Vector;
use crate::particle::Particle;
use crate::units::Length;
use crate::units::Time;

/// The result of tracking a particle across one volume segment (spec §4.8):
/// a trajectory limited to the segment, its arclength, and the node the
/// particle would enter if it travels the full segment.
pub struct Track {
    pub trajectory: Trajectory<Line>,
    pub geometric_max_length: Length,
    pub next_node: NodeId,
}

/// Smaller of the two roots if positive, else the larger if positive, else
/// `None` — the single candidate time this sphere contributes (spec §4.8:
/// "if both ≤0, ignore; if the smaller is >0, it is an enter event; else the
/// larger is an exit event"). Enter/exit is not distinguished here: both
/// cases reduce to "the next positive crossing time", and which node it
/// leads to is carried separately by the caller.
fn candidate_time(times: Option<(Time, Time)>) -> Option<Time> {
    let (t1, t2) = times?;
    if t1.value_unchecked() > 0.0 {
        Some(t1)
    } else if t2.value_unchecked() > 0.0 {
        Some(t2)
    } else {
        None
    }
}

/// Builds a straight-line track for `particle`, currently owned by `node`,
/// up to the nearest volume boundary (spec §4.8). Candidates are `node`'s
/// own bounding sphere (an exit event toward its parent — a particle inside
/// `node` always has one negative and one positive root against its own
/// sphere, so this falls out of `candidate_time` without special-casing),
/// every child of `node`, and every node in `node`'s exclusion list (both
/// entered, never exited, since the particle starts outside them by the
/// volume-tree invariant).
pub fn track(systems: &CoordinateSystems, tree: &VolumeTree, node: NodeId, particle: &Particle) -> Track {
    let system = tree.system(node);
    let position = Point::new(system, particle.position.components_in(systems, system));
    let velocity = Vector::new(system, particle.velocity().components_in(systems, system));
    let line = Line::new(position, velocity);

    let mut best: Option<(Time, NodeId)> = None;
    let mut consider = |times: Option<(Time, Time)>, successor: NodeId| {
        if let Some(t) = candidate_time(times) {
            if best.map_or(true, |(best_t, _)| t < best_t) {
                best = Some((t, successor));
            }
        }
    };

    if let Some(parent) = tree.parent(node) {
        consider(tree.volume(node).line_intersection_times(&line), parent);
    }
    for &child in tree.children(node) {
        consider(tree.volume(child).line_intersection_times(&line), child);
    }
    for &excluded in tree.excluded(node) {
        consider(tree.volume(excluded).line_intersection_times(&line), excluded);
    }

    match best {
        Some((time, next_node)) => {
            let geometric_max_length = line.arclength(Time::zero(), time);
            let trajectory = Trajectory::new(line, time);
            Track {
                trajectory,
                geometric_max_length,
                next_node,
            }
        }
        // An unbounded leaf with no substructure (the bare universe, with
        // no children and no parent to exit toward) has no geometric
        // boundary at all; rather than a modeling bug, this is the normal
        // shape of a single-volume world (spec §8 "Split cascade count"),
        // so the geometric length is simply unbounded.
        None if tree.volume(node).is_universe() && tree.parent(node).is_none() => Track {
            trajectory: Trajectory::new(line, Time::seconds(f64::INFINITY)),
            geometric_max_length: Length::meters(f64::INFINITY),
            next_node: node,
        },
        None => panic!("tracking found no intersection; the universe must be infinite"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::material::NuclearComposition;
    use crate::environment::models::Homogeneous;
    use crate::geometry::Sphere;
    use crate::particle::species;
    use crate::units::assert_is_close;
    use crate::units::HepEnergy;
    use crate::units::MassDensity;
    use crate::units::Vec3HepEnergy;
    use crate::units::Vec3Length;

    fn air() -> Homogeneous {
        Homogeneous::new(
            MassDensity::kilograms_per_cubic_meter(1.2),
            NuclearComposition::new(vec![7], vec![14.0], vec![1.0]),
        )
    }

    fn rock() -> Homogeneous {
        Homogeneous::new(
            MassDensity::kilograms_per_cubic_meter(2500.0),
            NuclearComposition::new(vec![14], vec![28.0], vec![1.0]),
        )
    }

    fn upward_proton(systems: &CoordinateSystems, z: f64) -> Particle {
        let root = systems.root();
        Particle {
            species: species::PROTON,
            energy: HepEnergy::giga_electron_volts(100.0),
            momentum: Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 100.0)),
            position: Point::new(root, Vec3Length::meters(0.0, 0.0, z)),
            time: Time::seconds(0.0),
            node: generational_arena::Arena::<()>::new().insert(()),
        }
    }

    #[test]
    fn exits_own_sphere_toward_parent() {
        let mut systems = CoordinateSystems::new();
        let root_system = systems.root();
        let mut tree = VolumeTree::new(
            root_system,
            Sphere::universe(Point::new(root_system, Vec3Length::meters(0.0, 0.0, 0.0))),
            Box::new(air()),
        );
        let mountain = tree.add_child(
            tree.root(),
            root_system,
            Sphere::new(
                Point::new(root_system, Vec3Length::meters(0.0, 0.0, 0.0)),
                Length::meters(1000.0),
            ),
            Box::new(rock()),
        );

        let particle = upward_proton(&systems, 0.0);
        let result = track(&systems, &tree, mountain, &particle);
        assert_eq!(result.next_node, tree.root());
        assert_is_close(result.geometric_max_length, Length::meters(1000.0));
    }

    #[test]
    fn enters_nearest_child() {
        let mut systems = CoordinateSystems::new();
        let root_system = systems.root();
        let mut tree = VolumeTree::new(
            root_system,
            Sphere::universe(Point::new(root_system, Vec3Length::meters(0.0, 0.0, 0.0))),
            Box::new(air()),
        );
        let mountain = tree.add_child(
            tree.root(),
            root_system,
            Sphere::new(
                Point::new(root_system, Vec3Length::meters(0.0, 0.0, 2000.0)),
                Length::meters(500.0),
            ),
            Box::new(rock()),
        );

        let particle = upward_proton(&systems, 0.0);
        let result = track(&systems, &tree, tree.root(), &particle);
        assert_eq!(result.next_node, mountain);
        assert_is_close(result.geometric_max_length, Length::meters(1500.0));
    }
}
