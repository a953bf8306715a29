use rand::Rng;
use rand::RngCore;

use crate::particle::Particle;
use crate::particle::SecondaryView;
use crate::process::roles::Process;
use crate::process::sequence::Sequence;
use crate::units::Dimensionless;
use crate::units::Grammage;
use crate::units::HepEnergy;
use crate::units::Time;

/// Delegates to one of two subtrees by projectile energy (spec §4.6
/// "SwitchProcess"): below `threshold` the `low` sequence runs, at or above
/// it the `high` sequence runs. From the parent sequence's point of view a
/// `SwitchProcess` is a single opaque interaction/decay site — it reports
/// one combined `interaction_length`/`lifetime`, not the sum of its active
/// subtree's leaves, so selecting it as the interacting process dispatches
/// back into whichever subtree is active to pick the actual leaf.
pub struct SwitchProcess {
    threshold: HepEnergy,
    low: Sequence,
    high: Sequence,
}

impl SwitchProcess {
    pub fn new(threshold: HepEnergy, low: Sequence, high: Sequence) -> Self {
        Self { threshold, low, high }
    }

    fn active(&self, particle: &Particle) -> &Sequence {
        if particle.energy < self.threshold {
            &self.low
        } else {
            &self.high
        }
    }
}

impl Process for SwitchProcess {
    fn max_step_length(&self, particle: &Particle, track: &crate::geometry::Trajectory<crate::geometry::Line>) -> crate::units::Length {
        self.active(particle).max_step_length(particle, track)
    }

    fn do_continuous(
        &self,
        particle: &mut Particle,
        track: &crate::geometry::Trajectory<crate::geometry::Line>,
    ) -> crate::process::roles::ContinuousStatus {
        let snapshot = *particle;
        self.active(&snapshot).do_continuous(particle, track)
    }

    fn interaction_length(&self, particle: &Particle) -> Grammage {
        let rate = self.active(particle).total_inverse_interaction_length(particle);
        if rate.value_unchecked() <= 0.0 {
            Grammage::kilograms_per_square_meter(f64::INFINITY)
        } else {
            Dimensionless::dimensionless(1.0) / rate
        }
    }

    fn do_interaction(&self, view: &mut SecondaryView, rng: &mut dyn RngCore) {
        let particle = view.stack().particle(view.projectile_index());
        let active = self.active(&particle);
        let total = active.total_inverse_interaction_length(&particle);
        let u: f64 = rng.gen_range(0.0..1.0);
        active.select_interaction(total * Dimensionless::dimensionless(u), view, rng);
    }

    fn lifetime(&self, particle: &Particle) -> Time {
        let rate = self.active(particle).total_inverse_lifetime(particle);
        if rate.value_unchecked() <= 0.0 {
            Time::seconds(f64::INFINITY)
        } else {
            Dimensionless::dimensionless(1.0) / rate
        }
    }

    fn do_decay(&self, view: &mut SecondaryView, rng: &mut dyn RngCore) {
        let particle = view.stack().particle(view.projectile_index());
        let active = self.active(&particle);
        let total = active.total_inverse_lifetime(&particle);
        let u: f64 = rng.gen_range(0.0..1.0);
        active.select_decay(total * Dimensionless::dimensionless(u), view, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::NodeId;
    use crate::geometry::CoordinateSystems;
    use crate::geometry::Point;
    use crate::geometry::Vector;
    use crate::particle::species;
    use crate::units::Vec3HepEnergy;
    use crate::units::Vec3Length;

    struct FixedInteraction {
        length: Grammage,
    }

    impl Process for FixedInteraction {
        fn interaction_length(&self, _particle: &Particle) -> Grammage {
            self.length
        }
    }

    fn dummy_node() -> NodeId {
        generational_arena::Arena::<()>::new().insert(())
    }

    #[test]
    fn switch_reports_active_subtree_interaction_length() {
        let systems = CoordinateSystems::new();
        let root = systems.root();
        let node = dummy_node();
        let low = Sequence::leaf(FixedInteraction {
            length: Grammage::kilograms_per_square_meter(10.0),
        });
        let high = Sequence::leaf(FixedInteraction {
            length: Grammage::kilograms_per_square_meter(1000.0),
        });
        let switcher = SwitchProcess::new(HepEnergy::giga_electron_volts(100.0), low, high);

        let low_energy = Particle {
            species: species::PROTON,
            energy: HepEnergy::giga_electron_volts(1.0),
            momentum: Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 1.0)),
            position: Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0)),
            time: Time::seconds(0.0),
            node,
        };
        let high_energy = Particle {
            energy: HepEnergy::giga_electron_volts(1e6),
            momentum: Vector::new(root, Vec3HepEnergy::giga_electron_volts(0.0, 0.0, 1e6)),
            ..low_energy
        };

        assert_eq!(switcher.interaction_length(&low_energy), Grammage::kilograms_per_square_meter(10.0));
        assert_eq!(switcher.interaction_length(&high_energy), Grammage::kilograms_per_square_meter(1000.0));
    }
}
