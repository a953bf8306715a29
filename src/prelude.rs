//! Re-exports the types a caller assembling a cascade typically needs, so
//! `use corsika_cascade::prelude::*;` is enough to wire one together.

pub use crate::cascade::CascadeEngine;
pub use crate::config::EnergyCutParameters;
pub use crate::config::SwitchThresholdParameters;
pub use crate::environment::FlatExponential;
pub use crate::environment::Homogeneous;
pub use crate::environment::MediumModel;
pub use crate::environment::NodeId;
pub use crate::environment::NuclearComposition;
pub use crate::environment::SphericalExponential;
pub use crate::environment::VolumeTree;
pub use crate::environment::WalkOrder;
pub use crate::geometry::CoordinateSystems;
pub use crate::geometry::Point;
pub use crate::geometry::Sphere;
pub use crate::geometry::Vector;
pub use crate::particle::species;
pub use crate::particle::Nuclide;
pub use crate::particle::Particle;
pub use crate::particle::SecondaryView;
pub use crate::particle::SpeciesCode;
pub use crate::particle::Stack;
pub use crate::process::ContinuousStatus;
pub use crate::process::Process;
pub use crate::process::Sequence;
pub use crate::process::SwitchProcess;
pub use crate::rand::RandomStreams;
pub use crate::rand::CASCADE_STREAM;
pub use crate::tracking::track;
pub use crate::tracking::Track;
pub use crate::units::*;
pub use derive_traits::Parameters;
