#![allow(incomplete_features)]
#![feature(generic_const_exprs, adt_const_params)]
#![feature(const_fn_floating_point_arithmetic)]
// Process roles take the particle/track/rng arguments the role demands, not
// fewer; cutting that down would just hide the same data in a struct.
#![allow(clippy::too_many_arguments)]

//! A CORSIKA-8-style extensive-air-shower cascade core.
//!
//! The crate has no knowledge of any particular shower physics: it provides
//! compile-time dimensional quantities, a coordinate-system/geometry layer,
//! a nested volume tree of material models, a columnar particle stack, a
//! composable sequence of physics processes, a straight-line tracker, and
//! the single-threaded engine that drives them together. Everything a real
//! air-shower simulation needs on top — interaction generators, decay
//! tables, observation-plane writers — plugs in as a [`process::Process`]
//! supplied by the caller; this crate only arbitrates and executes steps.
//!
//! ## A basic example
//! ```no_run
//! use corsika_cascade::prelude::*;
//!
//! let mut systems = CoordinateSystems::new();
//! let root = systems.root();
//! let tree = VolumeTree::new(
//!     root,
//!     Sphere::universe(Point::new(root, Vec3Length::meters(0.0, 0.0, 0.0))),
//!     Box::new(Homogeneous::new(
//!         MassDensity::kilograms_per_cubic_meter(1.2),
//!         NuclearComposition::new(vec![7], vec![14.0], vec![1.0]),
//!     )),
//! );
//! let sequence = Sequence::leaf(NoOpProcess);
//! let stack = Stack::new();
//! let mut engine = CascadeEngine::new(systems, tree, sequence, stack);
//! engine.init();
//! engine.run();
//!
//! struct NoOpProcess;
//! impl Process for NoOpProcess {}
//! ```

pub mod cascade;
pub mod config;
pub mod environment;
pub mod geometry;
pub mod particle;
pub mod process;
pub mod rand;
pub mod tracking;
pub mod units;

pub(crate) mod logging;

pub mod prelude;
