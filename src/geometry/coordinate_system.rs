use generational_arena::Arena;
use generational_arena::Index;
use glam::DQuat;
use glam::DVec3;

use crate::units::Dimensionless;
use crate::units::Vec3Length;

/// A stable, non-owning handle to a [`CoordinateSystem`] node. Valid only
/// for the lifetime of the [`CoordinateSystems`] registry that produced it.
pub type SystemId = Index;

/// A rigid-body transform (rotation followed by translation) from a child
/// coordinate system into its parent's.
#[derive(Debug, Clone, Copy)]
pub struct RigidTransform {
    pub rotation: DQuat,
    pub translation: DVec3,
}

impl RigidTransform {
    pub const IDENTITY: Self = Self {
        rotation: DQuat::IDENTITY,
        translation: DVec3::ZERO,
    };

    pub fn translation(offset: Vec3Length) -> Self {
        Self {
            rotation: DQuat::IDENTITY,
            translation: offset.value_unchecked(),
        }
    }

    pub fn rotation(axis: DVec3, angle_radians: f64) -> Self {
        Self {
            rotation: DQuat::from_axis_angle(axis.normalize(), angle_radians),
            translation: DVec3::ZERO,
        }
    }

    pub fn rotation_to_z(direction: DVec3) -> Self {
        Self {
            rotation: DQuat::from_rotation_arc(DVec3::Z, direction.normalize()),
            translation: DVec3::ZERO,
        }
    }

    /// `self` applied after `inner`: `compose(a, b).apply(p) == a.apply(b.apply(p))`.
    pub fn compose(&self, inner: &Self) -> Self {
        Self {
            rotation: self.rotation * inner.rotation,
            translation: self.rotation * inner.translation + self.translation,
        }
    }

    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.inverse();
        Self {
            rotation: inv_rotation,
            translation: inv_rotation * (-self.translation),
        }
    }

    pub fn apply_to_point(&self, local: DVec3) -> DVec3 {
        self.rotation * local + self.translation
    }

    pub fn apply_to_vector(&self, local: DVec3) -> DVec3 {
        self.rotation * local
    }
}

struct Node {
    parent: Option<SystemId>,
    to_parent: RigidTransform,
}

/// The tree of coordinate systems (spec §2.2, §4.2): one root plus children
/// defined by rigid-body transforms relative to their parent. Lives
/// strictly longer than any [`crate::geometry::Point`]/`Vector` referring to
/// it (Design Notes: arena of nodes addressed by stable indices rather than
/// raw back-pointers).
pub struct CoordinateSystems {
    arena: Arena<Node>,
    root: SystemId,
}

impl Default for CoordinateSystems {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateSystems {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node {
            parent: None,
            to_parent: RigidTransform::IDENTITY,
        });
        Self { arena, root }
    }

    pub fn root(&self) -> SystemId {
        self.root
    }

    fn insert_child(&mut self, parent: SystemId, to_parent: RigidTransform) -> SystemId {
        assert!(
            self.arena.contains(parent),
            "parent coordinate system does not exist in this registry"
        );
        self.arena.insert(Node { parent: Some(parent), to_parent })
    }

    pub fn translate(&mut self, parent: SystemId, offset: Vec3Length) -> SystemId {
        self.insert_child(parent, RigidTransform::translation(offset))
    }

    pub fn rotate(&mut self, parent: SystemId, axis: DVec3, angle_radians: Dimensionless) -> SystemId {
        self.insert_child(parent, RigidTransform::rotation(axis, angle_radians.value_unchecked()))
    }

    /// Produces a child system whose +Z axis points along `direction`
    /// (spec §4.2 `rotate_to_z`).
    pub fn rotate_to_z(&mut self, parent: SystemId, direction: DVec3) -> SystemId {
        self.insert_child(parent, RigidTransform::rotation_to_z(direction))
    }

    fn ancestor_chain(&self, mut system: SystemId) -> Vec<SystemId> {
        let mut chain = vec![system];
        while let Some(parent) = self.arena[system].parent {
            chain.push(parent);
            system = parent;
        }
        chain
    }

    /// Composes the transform that maps a point/vector's local coordinates
    /// in `system` into the coordinates of `ancestor`, which must lie on
    /// `system`'s ancestor chain (including `system` itself).
    fn transform_to_ancestor(&self, mut system: SystemId, ancestor: SystemId) -> RigidTransform {
        let mut transform = RigidTransform::IDENTITY;
        while system != ancestor {
            let node = &self.arena[system];
            transform = node.to_parent.compose(&transform);
            system = node
                .parent
                .expect("ancestor is not actually an ancestor of system");
        }
        transform
    }

    fn least_common_ancestor(&self, a: SystemId, b: SystemId) -> SystemId {
        let chain_a = self.ancestor_chain(a);
        let chain_b: std::collections::HashSet<SystemId> =
            self.ancestor_chain(b).into_iter().collect();
        chain_a
            .into_iter()
            .find(|s| chain_b.contains(s))
            .expect("no common root: coordinate systems belong to different trees")
    }

    /// The rigid transform mapping local coordinates in `from` to local
    /// coordinates in `to` (spec §4.2: "walk up both ancestor chains to the
    /// least common ancestor, composing rigid transforms").
    pub fn transform_between(&self, from: SystemId, to: SystemId) -> RigidTransform {
        if from == to {
            return RigidTransform::IDENTITY;
        }
        let lca = self.least_common_ancestor(from, to);
        let from_to_lca = self.transform_to_ancestor(from, lca);
        let to_to_lca = self.transform_to_ancestor(to, lca);
        to_to_lca.inverse().compose(&from_to_lca)
    }
}
