use super::line::Line;
use super::point_vector::Point;
use crate::units::Length;
use crate::units::Time;

/// A parametric curve restricted to a finite proper time (spec §3, §4.3).
/// `u` ranges over `[0, 1]`, `u = 0` at the start, `u = 1` at `duration()`.
#[derive(Debug, Clone, Copy)]
pub struct Trajectory<T> {
    base: T,
    duration: Time,
}

impl Trajectory<Line> {
    pub fn new(base: Line, duration: Time) -> Self {
        Self { base, duration }
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn position(&self, u: f64) -> Point {
        self.base.position(self.duration * u)
    }

    pub fn position_at_time(&self, t: Time) -> Point {
        self.base.position(t)
    }

    pub fn position_from_arclength(&self, l: Length) -> Point {
        self.base.position_from_arclength(l)
    }

    pub fn arclength(&self, t1: Time, t2: Time) -> Length {
        self.base.arclength(t1, t2)
    }

    pub fn time_from_arclength(&self, l: Length) -> Time {
        self.base.time_from_arclength(l)
    }

    pub fn total_arclength(&self) -> Length {
        self.base.arclength(Time::zero(), self.duration)
    }

    /// Shortens the trajectory's duration so it covers exactly `length` of
    /// arclength (spec §4.3 `limit_end_to`).
    pub fn limit_end_to(&mut self, length: Length) {
        self.duration = self.base.time_from_arclength(length);
    }

    pub fn line(&self) -> &Line {
        &self.base
    }
}
