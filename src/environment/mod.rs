//! Materials and the spatial partition of the simulated world (spec §2.2,
//! §4.4).

mod material;
mod medium;
mod models;
mod node;

pub use material::NuclearComposition;
pub use medium::MediumModel;
pub use models::FlatExponential;
pub use models::Homogeneous;
pub use models::SphericalExponential;
pub use node::NodeId;
pub use node::VolumeTree;
pub use node::WalkOrder;
