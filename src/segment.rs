//! Directed line segments produced by slicing.

use crate::float_types::Real;
use crate::point::Point;

/// A directed segment from `p` to `q`.
///
/// Direction is kept as computed; consecutive segments of a slice are not
/// guaranteed to share endpoints or winding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub p: Point,
    pub q: Point,
}

impl Segment {
    pub const fn new(p: Point, q: Point) -> Self {
        Segment { p, q }
    }

    /// Point at parameter `t` along the segment, `(1 - t)·p + t·q`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point {
        self.p.lerp(&self.q, t)
    }

    /// The same segment walked from `q` to `p`.
    pub const fn reversed(&self) -> Segment {
        Segment { p: self.q, q: self.p }
    }

    pub fn length(&self) -> Real {
        let dx = self.q.x - self.p.x;
        let dy = self.q.y - self.p.y;
        let dz = self.q.z - self.p.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<(Point, Point)> for Segment {
    fn from((p, q): (Point, Point)) -> Self {
        Segment { p, q }
    }
}

impl approx::AbsDiffEq for Segment {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Point as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.p, &other.p, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.q, &other.q, epsilon)
    }
}
