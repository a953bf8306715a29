use super::point_vector::Point;

/// A region of space that can answer "is this point inside me?" (spec §3).
pub trait Volume {
    fn contains(&self, point: &Point) -> bool;
}
