use rand::Rng;
use rand::RngCore;
use rand_distr::Distribution;
use rand_distr::Exp;

use crate::environment::NodeId;
use crate::environment::VolumeTree;
use crate::geometry::CoordinateSystems;
use crate::particle::Particle;
use crate::particle::SecondaryView;
use crate::particle::Stack;
use crate::process::ContinuousStatus;
use crate::process::Sequence;
use crate::rand::RandomStreams;
use crate::rand::CASCADE_STREAM;
use crate::tracking;
use crate::units::Dimensionless;
use crate::units::Grammage;
use crate::units::InverseGrammage;
use crate::units::InverseTime;
use crate::units::Time;
use crate::units::SPEED_OF_LIGHT;

/// Samples `Exp(rate)`; a non-positive rate never fires, i.e. samples
/// `+∞` (spec §4.9 "Exponential sampler receiving non-positive rate").
fn sample_grammage(rate: InverseGrammage, rng: &mut dyn RngCore) -> Grammage {
    if rate.value_unchecked() <= 0.0 {
        return Grammage::kilograms_per_square_meter(f64::INFINITY);
    }
    let raw = Exp::new(rate.value_unchecked())
        .expect("interaction rate must be finite and positive")
        .sample(rng);
    Grammage::kilograms_per_square_meter(raw)
}

fn sample_lifetime(rate: InverseTime, rng: &mut dyn RngCore) -> Time {
    if rate.value_unchecked() <= 0.0 {
        return Time::seconds(f64::INFINITY);
    }
    let raw = Exp::new(rate.value_unchecked())
        .expect("decay rate must be finite and positive")
        .sample(rng);
    Time::seconds(raw)
}

/// Which of the four candidate lengths arbitrated the step (spec §4.7 step
/// 6), deciding what happens to the projectile once `do_continuous` has run
/// (step 8/9). Ties are broken in this declaration order: geometric, then
/// interaction, then decay, then continuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepOutcome {
    Boundary,
    Interaction,
    Decay,
    Continuous,
}

/// The single-threaded cascade engine (spec §4.7, §5): owns the stack, the
/// environment tree, the process sequence and the random streams, and
/// drains the stack to completion one particle-step at a time.
pub struct CascadeEngine {
    systems: CoordinateSystems,
    tree: VolumeTree,
    sequence: Sequence,
    stack: Stack,
    streams: RandomStreams,
    step: u64,
}

impl CascadeEngine {
    pub fn new(systems: CoordinateSystems, tree: VolumeTree, sequence: Sequence, stack: Stack) -> Self {
        let mut streams = RandomStreams::new();
        streams.register(CASCADE_STREAM);
        Self {
            systems,
            tree,
            sequence,
            stack,
            streams,
            step: 0,
        }
    }

    pub fn systems(&self) -> &CoordinateSystems {
        &self.systems
    }

    pub fn tree(&self) -> &VolumeTree {
        &self.tree
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn streams_mut(&mut self) -> &mut RandomStreams {
        &mut self.streams
    }

    /// One-time fixed setup: assigns every stack particle's owning
    /// volume-tree leaf (spec §4.7 "Initialization", §6 "`init()`").
    pub fn init(&mut self) {
        let root = self.tree.root();
        for i in self.stack.indices() {
            let position = self.stack.position(i);
            let node = self
                .tree
                .containing_node(&self.systems, root, &position)
                .expect("particle position lies outside the universe");
            self.stack.set_node(i, node);
        }
    }

    /// Drains the stack as in spec §4.7 "Main loop" (spec §6 "`run()`").
    pub fn run(&mut self) {
        while let Some(index) = self.stack.next_particle() {
            self.step(index);
        }
    }

    fn step(&mut self, index: usize) {
        let mut particle = self.stack.particle(index);
        let node = particle.node;

        let track = tracking::track(&self.systems, &self.tree, node, &particle);

        let inverse_interaction_length = self.sequence.total_inverse_interaction_length(&particle);
        let interaction_grammage = sample_grammage(inverse_interaction_length, self.streams.stream(CASCADE_STREAM));
        let interaction_step = self
            .tree
            .medium(node)
            .arclength_from_grammage(track.trajectory.line(), interaction_grammage);

        let inverse_lifetime = self.sequence.total_inverse_lifetime(&particle);
        let proper_time = sample_lifetime(inverse_lifetime, self.streams.stream(CASCADE_STREAM));
        let decay_step = proper_time * particle.velocity().length();

        let continuous_step = self.sequence.max_step_length(&particle, &track.trajectory);

        let mut l_step = track.geometric_max_length;
        let mut outcome = StepOutcome::Boundary;
        if interaction_step < l_step {
            l_step = interaction_step;
            outcome = StepOutcome::Interaction;
        }
        if decay_step < l_step {
            l_step = decay_step;
            outcome = StepOutcome::Decay;
        }
        if continuous_step < l_step {
            l_step = continuous_step;
            outcome = StepOutcome::Continuous;
        }

        let mut trajectory = track.trajectory;
        trajectory.limit_end_to(l_step);
        particle.position = trajectory.position_from_arclength(l_step);
        particle.time = particle.time + l_step / SPEED_OF_LIGHT;

        let status = self.sequence.do_continuous(&mut particle, &trajectory);
        self.stack.set_kinematics(index, particle.position, particle.time);
        self.stack.set_energy_momentum(index, particle.energy, particle.momentum);

        if status == ContinuousStatus::Absorbed {
            self.stack.delete(index);
            self.sequence.do_stack(&mut self.stack, self.step);
            self.step += 1;
            return;
        }

        match outcome {
            StepOutcome::Boundary => {
                self.stack.set_node(index, track.next_node);
                self.sequence.do_boundary_crossing(&mut particle, node, track.next_node);
                self.stack.set_energy_momentum(index, particle.energy, particle.momentum);
            }
            StepOutcome::Interaction | StepOutcome::Decay => {
                {
                    let mut view = SecondaryView::new(&mut self.stack, index);
                    match outcome {
                        StepOutcome::Interaction => {
                            let u: f64 = self.streams.stream(CASCADE_STREAM).gen_range(0.0..1.0);
                            let sample = inverse_interaction_length * Dimensionless::dimensionless(u);
                            let rng = self.streams.stream(CASCADE_STREAM);
                            self.sequence.select_interaction(sample, &mut view, rng);
                        }
                        StepOutcome::Decay => {
                            let u: f64 = self.streams.stream(CASCADE_STREAM).gen_range(0.0..1.0);
                            let sample = inverse_lifetime * Dimensionless::dimensionless(u);
                            let rng = self.streams.stream(CASCADE_STREAM);
                            self.sequence.select_decay(sample, &mut view, rng);
                            if view.size() == 1 {
                                let only = view.secondary_indices().next().unwrap();
                                let species = view.stack().particle(only).species;
                                assert_ne!(species, particle.species, "particle decayed into itself");
                            }
                        }
                        StepOutcome::Boundary | StepOutcome::Continuous => unreachable!(),
                    }
                    self.sequence.do_secondaries(&mut view);
                }
                // A successful interaction or decay always removes the projectile
                // (spec §4.7 step 8f); a step limited only by a continuous
                // process's max_step_length has no secondaries and the
                // projectile survives to be tracked again.
                self.stack.delete(index);
            }
            StepOutcome::Continuous => {
                let mut view = SecondaryView::new(&mut self.stack, index);
                self.sequence.do_secondaries(&mut view);
            }
        }

        self.sequence.do_stack(&mut self.stack, self.step);
        self.step += 1;
    }
}
