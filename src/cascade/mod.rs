//! The cascade engine's main loop (spec §4.7, §5, §6 `init()`/`run()`).

mod engine;

pub use engine::CascadeEngine;
