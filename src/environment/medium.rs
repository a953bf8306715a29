use crate::environment::material::NuclearComposition;
use crate::geometry::Line;
use crate::geometry::Point;
use crate::units::Grammage;
use crate::units::Length;
use crate::units::MassDensity;

/// A material model attached to a volume-tree node (spec §3 `MediumModel`).
pub trait MediumModel: std::fmt::Debug {
    fn mass_density(&self, point: &Point) -> MassDensity;
    fn nuclear_composition(&self) -> &NuclearComposition;

    /// Column mass integrated along `line` over `[0, length]`.
    fn integrated_grammage(&self, line: &Line, length: Length) -> Grammage;

    /// The segment length whose integrated grammage along `line` equals
    /// `grammage` (the inverse of `integrated_grammage`).
    fn arclength_from_grammage(&self, line: &Line, grammage: Grammage) -> Length;
}
