//! The straight-line tracker (spec §4.3, §4.8).

mod straight_line;

pub use straight_line::track;
pub use straight_line::Track;
