//! This library exists mainly because I found it impossible/annoyingly hard
//! to create procedural macros that derive traits from the main crate.
//! This works fine for the main crate itself, but fails when
//! building examples. The problem is path/name resolution of the derived trait.
//! I found some info on this here: https://github.com/rust-lang/rust/issues/54363
use serde::Deserialize;
use serde::Serialize;

pub trait Named {
    fn name() -> &'static str;
}


/// A configuration struct for some part of the cascade (a cut, a switch
/// threshold, a material model). Such structs are plain data: the core never
/// reads them from a file itself, it only promises they can be
/// (de)serialized by a consumer that does.
pub trait Parameters: Serialize + for<'de> Deserialize<'de> {
    /// The section name under which this struct would appear in a
    /// consumer's configuration file, if it has one.
    fn section_name() -> Option<&'static str>;

    fn unwrap_section_name() -> &'static str {
        Self::section_name()
            .unwrap_or_else(|| panic!("called unwrap_section_name on an unnamed parameter struct"))
    }
}
