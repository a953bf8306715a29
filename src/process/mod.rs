//! Process roles and their composition into sequences (spec §3, §4.6).

mod roles;
mod sequence;
mod switch;

pub use roles::ContinuousStatus;
pub use roles::Process;
pub use sequence::Sequence;
pub use switch::SwitchProcess;
