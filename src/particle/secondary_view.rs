use crate::environment::NodeId;
use crate::geometry::Point;
use crate::geometry::Vector;
use crate::particle::record::Nuclide;
use crate::particle::species::SpeciesCode;
use crate::particle::stack::Stack;
use crate::units::HepEnergy;
use crate::units::Time;
use crate::units::HEP_ENERGY;

/// A non-owning view over a parent stack bound to one projectile particle
/// (spec §3 "SecondaryView", §4.5). Children added through `add_secondary`
/// land in the same underlying [`Stack`] but are iterable and countable as a
/// distinct group; `size()` counts secondaries only, never the projectile.
pub struct SecondaryView<'a> {
    stack: &'a mut Stack,
    projectile: usize,
    secondaries: Vec<usize>,
}

impl<'a> SecondaryView<'a> {
    pub fn new(stack: &'a mut Stack, projectile: usize) -> Self {
        Self {
            stack,
            projectile,
            secondaries: Vec::new(),
        }
    }

    /// The stack index currently holding the projectile (spec §4.5
    /// `get_projectile()`).
    pub fn projectile_index(&self) -> usize {
        self.projectile
    }

    pub fn stack(&self) -> &Stack {
        self.stack
    }

    pub fn size(&self) -> usize {
        self.secondaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secondaries.is_empty()
    }

    /// Stack indices of the secondaries added through this view, in
    /// insertion order.
    pub fn secondary_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.secondaries.iter().copied()
    }

    /// Appends a secondary, inheriting the projectile's position/time/node
    /// unless overridden (spec §4.5 "Adding a secondary inherits the
    /// parent's volume-tree-leaf reference and time by default").
    #[allow(clippy::too_many_arguments)]
    pub fn add_secondary(
        &mut self,
        species: SpeciesCode,
        energy: HepEnergy,
        momentum: Vector<HEP_ENERGY>,
        position: Option<Point>,
        time: Option<Time>,
        node: Option<NodeId>,
        nuclear: Option<Nuclide>,
    ) -> usize {
        let parent_position = self.stack.position(self.projectile);
        let parent_time = self.stack.time(self.projectile);
        let parent_node = self.stack.node(self.projectile);
        let idx = self.stack.add_particle(
            species,
            energy,
            momentum,
            position.unwrap_or(parent_position),
            time.unwrap_or(parent_time),
            node.unwrap_or(parent_node),
            nuclear,
        );
        self.secondaries.push(idx);
        idx
    }

    /// Removes the secondary at `view_index` (an index into this view, not
    /// the underlying stack): the stack tail-swaps it away, and any
    /// bookkeeping this view holds for whichever entry got swapped into its
    /// place is repointed (spec §4.5 `delete(view_iter)`).
    pub fn delete(&mut self, view_index: usize) {
        let real_index = self.secondaries[view_index];
        let last = self.stack.len() - 1;
        self.stack.delete(real_index);
        if real_index != last {
            if self.projectile == last {
                self.projectile = real_index;
            }
            for s in self.secondaries.iter_mut() {
                if *s == last {
                    *s = real_index;
                }
            }
        }
        self.secondaries.remove(view_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordinateSystems;
    use crate::particle::species;
    use crate::units::Vec3HepEnergy;
    use crate::units::Vec3Length;

    fn node() -> NodeId {
        generational_arena::Arena::<()>::new().insert(())
    }

    #[test]
    fn add_secondary_grows_stack_and_view() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let n = node();
        let mut stack = Stack::new();
        let projectile = stack.add_particle(
            species::PROTON,
            HepEnergy::giga_electron_volts(100.0),
            Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 100.0)),
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            Time::seconds(0.0),
            n,
            None,
        );
        let mut view = SecondaryView::new(&mut stack, projectile);
        for _ in 0..3 {
            view.add_secondary(
                species::PI_PLUS,
                HepEnergy::giga_electron_volts(10.0),
                Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 10.0)),
                None,
                None,
                None,
                None,
            );
        }
        assert_eq!(view.size(), 3);
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn delete_shrinks_both_counts() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let n = node();
        let mut stack = Stack::new();
        let projectile = stack.add_particle(
            species::PROTON,
            HepEnergy::giga_electron_volts(100.0),
            Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 100.0)),
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            Time::seconds(0.0),
            n,
            None,
        );
        let mut view = SecondaryView::new(&mut stack, projectile);
        for _ in 0..4 {
            view.add_secondary(
                species::PI_PLUS,
                HepEnergy::giga_electron_volts(10.0),
                Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 10.0)),
                None,
                None,
                None,
                None,
            );
        }
        view.delete(1);
        assert_eq!(view.size(), 3);
        assert_eq!(stack.len(), 4);
    }

    fn secondary(root: crate::geometry::SystemId) -> (SpeciesCode, HepEnergy, Vector<HEP_ENERGY>) {
        (
            species::PI_PLUS,
            HepEnergy::giga_electron_volts(1.0),
            Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 1.0)),
        )
    }

    #[test]
    fn alternating_deletes_and_adds_preserve_stack_size_and_view_contents() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let n = node();
        let mut stack = Stack::new();
        let projectile = stack.add_particle(
            species::PROTON,
            HepEnergy::giga_electron_volts(100.0),
            Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 100.0)),
            Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            Time::seconds(0.0),
            n,
            None,
        );
        let mut view = SecondaryView::new(&mut stack, projectile);
        let initial = 6;
        for _ in 0..initial {
            let (species, energy, momentum) = secondary(root);
            view.add_secondary(species, energy, momentum, None, None, None, None);
        }
        assert_eq!(view.stack().len(), initial + 1);

        let mut expected_live = initial;
        // Delete every other entry (view indices 0, 2, 4) and add a fresh one
        // after each deletion; the view must keep reporting the set of
        // entries that are still actually live in the underlying stack.
        let mut i = 0;
        while i < view.size() {
            view.delete(i);
            expected_live -= 1;
            let (species, energy, momentum) = secondary(root);
            view.add_secondary(species, energy, momentum, None, None, None, None);
            expected_live += 1;
            assert_eq!(view.size(), expected_live);
            assert_eq!(view.stack().len(), expected_live + 1);
            i += 2;
        }

        for idx in view.secondary_indices() {
            assert_ne!(idx, view.projectile_index());
        }
        assert_eq!(view.secondary_indices().count(), view.size());
    }
}
