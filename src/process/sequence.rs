use rand::RngCore;

use crate::environment::NodeId;
use crate::geometry::Line;
use crate::geometry::Trajectory;
use crate::particle::Particle;
use crate::particle::SecondaryView;
use crate::particle::Stack;
use crate::process::roles::ContinuousStatus;
use crate::process::roles::Process;
use crate::units::Dimensionless;
use crate::units::Grammage;
use crate::units::InverseGrammage;
use crate::units::InverseTime;
use crate::units::Length;
use crate::units::Time;

fn inverse_grammage(l: Grammage) -> InverseGrammage {
    Dimensionless::dimensionless(1.0) / l
}

fn inverse_time(t: Time) -> InverseTime {
    Dimensionless::dimensionless(1.0) / t
}

/// A binary tree of processes (spec §4.6 "Sequence"). Build leaves with
/// [`Sequence::leaf`] and compose with `|`:
///
/// ```ignore
/// let sequence = Sequence::leaf(ionization) | Sequence::leaf(pair_production) | Sequence::leaf(decay_table);
/// ```
///
/// The tree shape only matters for `select_interaction`/`select_decay`
/// traversal order; every aggregate below is associative and commutative in
/// the processes it sums over, so `(a | b) | c` and `a | (b | c)` report the
/// same totals.
pub enum Sequence {
    Leaf(Box<dyn Process>),
    Node(Box<Sequence>, Box<Sequence>),
}

impl Sequence {
    pub fn leaf(process: impl Process + 'static) -> Self {
        Sequence::Leaf(Box::new(process))
    }

    /// `Σ 1/interaction_length` over every leaf (spec §4.6 "Sequence
    /// composition rules").
    pub fn total_inverse_interaction_length(&self, particle: &Particle) -> InverseGrammage {
        match self {
            Sequence::Leaf(p) => inverse_grammage(p.interaction_length(particle)),
            Sequence::Node(l, r) => {
                l.total_inverse_interaction_length(particle) + r.total_inverse_interaction_length(particle)
            }
        }
    }

    /// `Σ 1/lifetime` over every leaf.
    pub fn total_inverse_lifetime(&self, particle: &Particle) -> InverseTime {
        match self {
            Sequence::Leaf(p) => inverse_time(p.lifetime(particle)),
            Sequence::Node(l, r) => l.total_inverse_lifetime(particle) + r.total_inverse_lifetime(particle),
        }
    }

    /// `min(max_step_length)` over every leaf.
    pub fn max_step_length(&self, particle: &Particle, track: &Trajectory<Line>) -> Length {
        match self {
            Sequence::Leaf(p) => p.max_step_length(particle, track),
            Sequence::Node(l, r) => l.max_step_length(particle, track).min(r.max_step_length(particle, track)),
        }
    }

    /// Runs every leaf's continuous process; the particle is absorbed if any
    /// of them absorbs it.
    pub fn do_continuous(&self, particle: &mut Particle, track: &Trajectory<Line>) -> ContinuousStatus {
        match self {
            Sequence::Leaf(p) => p.do_continuous(particle, track),
            Sequence::Node(l, r) => l.do_continuous(particle, track) | r.do_continuous(particle, track),
        }
    }

    pub fn do_boundary_crossing(&self, particle: &mut Particle, from: NodeId, to: NodeId) {
        match self {
            Sequence::Leaf(p) => p.do_boundary_crossing(particle, from, to),
            Sequence::Node(l, r) => {
                l.do_boundary_crossing(particle, from, to);
                r.do_boundary_crossing(particle, from, to);
            }
        }
    }

    pub fn do_secondaries(&self, view: &mut SecondaryView) {
        match self {
            Sequence::Leaf(p) => p.do_secondaries(view),
            Sequence::Node(l, r) => {
                l.do_secondaries(view);
                r.do_secondaries(view);
            }
        }
    }

    /// Runs every leaf whose `stack_stride` divides `step` (spec §4.6
    /// "Stack" role).
    pub fn do_stack(&self, stack: &mut Stack, step: u64) {
        match self {
            Sequence::Leaf(p) => {
                if let Some(stride) = p.stack_stride() {
                    if stride > 0 && step % stride as u64 == 0 {
                        p.do_stack(stack);
                    }
                }
            }
            Sequence::Node(l, r) => {
                l.do_stack(stack, step);
                r.do_stack(stack, step);
            }
        }
    }

    /// Picks the process responsible for `sample` (a point drawn uniformly
    /// from `[0, total_inverse_interaction_length))`) and dispatches
    /// `do_interaction` to it (spec §4.6 "select_interaction").
    pub fn select_interaction(&self, sample: InverseGrammage, view: &mut SecondaryView, rng: &mut dyn RngCore) {
        let particle = view.stack().particle(view.projectile_index());
        let mut remaining = sample;
        if let Some(leaf) = self.find_interacting_leaf(&mut remaining, &particle) {
            leaf.do_interaction(view, rng);
        }
    }

    /// Picks the process responsible for `sample` (a point drawn uniformly
    /// from `[0, total_inverse_lifetime))`) and dispatches `do_decay` to it.
    pub fn select_decay(&self, sample: InverseTime, view: &mut SecondaryView, rng: &mut dyn RngCore) {
        let particle = view.stack().particle(view.projectile_index());
        let mut remaining = sample;
        if let Some(leaf) = self.find_decaying_leaf(&mut remaining, &particle) {
            leaf.do_decay(view, rng);
        }
    }

    fn find_interacting_leaf<'a>(&'a self, sample: &mut InverseGrammage, particle: &Particle) -> Option<&'a dyn Process> {
        match self {
            Sequence::Leaf(p) => {
                let weight = inverse_grammage(p.interaction_length(particle));
                if *sample < weight {
                    Some(p.as_ref())
                } else {
                    *sample = *sample - weight;
                    None
                }
            }
            Sequence::Node(l, r) => l
                .find_interacting_leaf(sample, particle)
                .or_else(|| r.find_interacting_leaf(sample, particle)),
        }
    }

    fn find_decaying_leaf<'a>(&'a self, sample: &mut InverseTime, particle: &Particle) -> Option<&'a dyn Process> {
        match self {
            Sequence::Leaf(p) => {
                let weight = inverse_time(p.lifetime(particle));
                if *sample < weight {
                    Some(p.as_ref())
                } else {
                    *sample = *sample - weight;
                    None
                }
            }
            Sequence::Node(l, r) => l
                .find_decaying_leaf(sample, particle)
                .or_else(|| r.find_decaying_leaf(sample, particle)),
        }
    }
}

impl std::ops::BitOr for Sequence {
    type Output = Sequence;

    fn bitor(self, rhs: Sequence) -> Sequence {
        Sequence::Node(Box::new(self), Box::new(rhs))
    }
}
