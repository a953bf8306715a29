use rand::RngCore;

use crate::environment::NodeId;
use crate::geometry::Line;
use crate::geometry::Trajectory;
use crate::particle::Particle;
use crate::particle::SecondaryView;
use crate::particle::Stack;
use crate::units::Grammage;
use crate::units::Length;
use crate::units::Time;

/// Outcome of [`Process::do_continuous`]: whether the particle survived the
/// step (spec §4.6 "Continuous" role).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuousStatus {
    Ok,
    Absorbed,
}

impl std::ops::BitOr for ContinuousStatus {
    type Output = ContinuousStatus;

    fn bitor(self, rhs: Self) -> Self::Output {
        if self == ContinuousStatus::Absorbed || rhs == ContinuousStatus::Absorbed {
            ContinuousStatus::Absorbed
        } else {
            ContinuousStatus::Ok
        }
    }
}

/// A physics process (spec §4.6). Each of the six roles has a no-op/inert
/// default, so a concrete process overrides only the roles it actually
/// implements — the "six optional function pointers per leaf" alternative
/// from the Design Notes, expressed as default trait methods rather than a
/// literal function-pointer table.
pub trait Process {
    /// Upper bound on the step this process tolerates; `+∞` means no bound
    /// (spec §4.6 "Continuous" `max_step_length`).
    fn max_step_length(&self, _particle: &Particle, _track: &Trajectory<Line>) -> Length {
        Length::meters(f64::INFINITY)
    }

    /// Applies this process's continuous effect across `track` (spec §4.6
    /// "Continuous" `do_continuous`).
    fn do_continuous(&self, _particle: &mut Particle, _track: &Trajectory<Line>) -> ContinuousStatus {
        ContinuousStatus::Ok
    }

    /// Mean free path in grammage; `+∞` if this process cannot act on
    /// `particle` (spec §4.6 "Interaction" `interaction_length`).
    fn interaction_length(&self, _particle: &Particle) -> Grammage {
        Grammage::kilograms_per_square_meter(f64::INFINITY)
    }

    /// Populates `view` with the interaction's secondaries (spec §4.6
    /// "Interaction" `do_interaction`).
    fn do_interaction(&self, _view: &mut SecondaryView, _rng: &mut dyn RngCore) {}

    /// Mean rest-frame lifetime; `+∞` if stable (spec §4.6 "Decay"
    /// `lifetime`).
    fn lifetime(&self, _particle: &Particle) -> Time {
        Time::seconds(f64::INFINITY)
    }

    /// Replaces the projectile with decay products (spec §4.6 "Decay"
    /// `do_decay`).
    fn do_decay(&self, _view: &mut SecondaryView, _rng: &mut dyn RngCore) {}

    /// Called when a particle crosses from `from` into `to` (spec §4.6
    /// "Boundary" `do_boundary_crossing`).
    fn do_boundary_crossing(&self, _particle: &mut Particle, _from: NodeId, _to: NodeId) {}

    /// `Some(n)` schedules `do_stack` every `n` engine steps (spec §4.6
    /// "Stack" role); `None` (the default) means this process never runs at
    /// the stack level.
    fn stack_stride(&self) -> Option<usize> {
        None
    }

    /// A bulk operation over the whole stack, run on the stride declared by
    /// [`Process::stack_stride`] (spec §4.6 "Stack" `do_stack`).
    fn do_stack(&self, _stack: &mut Stack) {}

    /// Inspects/filters/relabels a freshly populated secondary view (spec
    /// §4.6 "Secondaries" `do_secondaries`).
    fn do_secondaries(&self, _view: &mut SecondaryView) {}
}
