use generational_arena::Arena;
use generational_arena::Index;

use crate::environment::medium::MediumModel;
use crate::geometry::CoordinateSystems;
use crate::geometry::Point;
use crate::geometry::Sphere;
use crate::geometry::SystemId;
use crate::geometry::Volume;

/// A stable handle to a node in the [`VolumeTree`].
pub type NodeId = Index;

/// Traversal order for [`VolumeTree::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    PreOrder,
    PostOrder,
}

struct Node {
    system: SystemId,
    volume: Sphere,
    medium: Box<dyn MediumModel>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Children whose volume is *excluded* from this node's own volume: a
    /// point inside one of these carves out of the parent and belongs to the
    /// excluded subtree instead (spec §3/§4.4, e.g. a cave carved out of a
    /// mountain, or the atmosphere excluding the ground it sits on).
    excluded: Vec<NodeId>,
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("volume", &self.volume)
            .field("parent", &self.parent)
            .field("children", &self.children.len())
            .field("excluded", &self.excluded.len())
            .finish()
    }
}

/// The spatial partition of the simulated world (spec §3/§4.4): a tree of
/// nested volumes, each carrying its own [`MediumModel`] and local
/// [`SystemId`]. Lookup descends into the most specific node containing a
/// point, accounting for excluded sub-regions.
pub struct VolumeTree {
    arena: Arena<Node>,
    root: NodeId,
}

impl VolumeTree {
    pub fn new(system: SystemId, volume: Sphere, medium: Box<dyn MediumModel>) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node {
            system,
            volume,
            medium,
            parent: None,
            children: Vec::new(),
            excluded: Vec::new(),
        });
        Self { arena, root }
    }

    pub fn medium(&self, node: NodeId) -> &dyn MediumModel {
        self.arena[node].medium.as_ref()
    }

    pub fn system(&self, node: NodeId) -> SystemId {
        self.arena[node].system
    }

    /// This node's bounding sphere, in its own local system.
    pub fn volume(&self, node: NodeId) -> &Sphere {
        &self.arena[node].volume
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.arena[node].children
    }

    /// Children excluded from `node`'s own interior (spec §4.4 `excludes`).
    pub fn excluded(&self, node: NodeId) -> &[NodeId] {
        &self.arena[node].excluded
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Adds `volume`/`medium` as an ordinary child of `parent`: a sub-region
    /// whose lookup takes precedence over `parent` whenever a point falls
    /// inside both.
    pub fn add_child(&mut self, parent: NodeId, system: SystemId, volume: Sphere, medium: Box<dyn MediumModel>) -> NodeId {
        assert!(
            self.arena.contains(parent),
            "parent node does not exist in this volume tree"
        );
        let child = self.arena.insert(Node {
            system,
            volume,
            medium,
            parent: Some(parent),
            children: Vec::new(),
            excluded: Vec::new(),
        });
        self.arena[parent].children.push(child);
        child
    }

    /// Marks `child` (already a child of `parent`) as carving an exclusion
    /// out of `parent`'s own volume, rather than merely overlapping it
    /// (spec §3/§4.4 "exclude_overlap_with").
    pub fn exclude_overlap_with(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.arena[parent].children.contains(&child),
            "exclude_overlap_with requires child to already be a child of parent"
        );
        self.arena[parent].excluded.push(child);
    }

    /// The most specific node whose volume contains `point`, descending
    /// first into any excluded sub-region, then into the first child that
    /// contains the point, else returning `node` itself (spec §3: the
    /// `ContainingNode` lookup algorithm).
    pub fn containing_node(
        &self,
        systems: &CoordinateSystems,
        node: NodeId,
        point: &Point,
    ) -> Option<NodeId> {
        let local = Point::new(self.arena[node].system, point.components_in(systems, self.arena[node].system));
        if !self.arena[node].volume.contains(&local) {
            return None;
        }
        for &excluded in &self.arena[node].excluded {
            if let Some(found) = self.containing_node(systems, excluded, point) {
                return Some(found);
            }
        }
        for &child in &self.arena[node].children {
            if self.arena[node].excluded.contains(&child) {
                continue;
            }
            if let Some(found) = self.containing_node(systems, child, point) {
                return Some(found);
            }
        }
        Some(node)
    }

    /// Visits every node in the subtree rooted at `node`, in pre- or
    /// post-order (spec §4.4 `walk`).
    pub fn walk(&self, node: NodeId, order: WalkOrder, f: &mut impl FnMut(NodeId)) {
        if order == WalkOrder::PreOrder {
            f(node);
        }
        for &child in &self.arena[node].children {
            self.walk(child, order, f);
        }
        if order == WalkOrder::PostOrder {
            f(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::material::NuclearComposition;
    use crate::environment::models::Homogeneous;
    use crate::geometry::Sphere;
    use crate::units::Length;
    use crate::units::MassDensity;
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

    #[test]
    fn nested_child_takes_precedence() {
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

        let inside = Point::new(root_system, Vec3Length::meters(0.0, 0.0, 500.0));
        let found = tree.containing_node(&systems, tree.root(), &inside).unwrap();
        assert_eq!(found, mountain);

        let outside = Point::new(root_system, Vec3Length::meters(0.0, 0.0, 5000.0));
        let found = tree.containing_node(&systems, tree.root(), &outside).unwrap();
        assert_eq!(found, tree.root());
    }

    #[test]
    fn excluded_cave_is_not_rock() {
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
        let cave = tree.add_child(
            mountain,
            root_system,
            Sphere::new(
                Point::new(root_system, Vec3Length::meters(0.0, 0.0, 500.0)),
                Length::meters(50.0),
            ),
            Box::new(air()),
        );
        tree.exclude_overlap_with(mountain, cave);

        let inside_cave = Point::new(root_system, Vec3Length::meters(0.0, 0.0, 500.0));
        let found = tree.containing_node(&systems, tree.root(), &inside_cave).unwrap();
        assert_eq!(found, cave);
    }

    #[test]
    fn walk_visits_every_node_exactly_once() {
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
        tree.add_child(
            mountain,
            root_system,
            Sphere::new(
                Point::new(root_system, Vec3Length::meters(0.0, 0.0, 500.0)),
                Length::meters(50.0),
            ),
            Box::new(air()),
        );

        let mut visited = Vec::new();
        tree.walk(tree.root(), WalkOrder::PreOrder, &mut |n| visited.push(n));
        assert_eq!(visited.len(), 3);
        assert_eq!(visited[0], tree.root());
    }
}
