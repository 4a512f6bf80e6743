//! Hand slice output to `geo` as 2D geometry.
//!
//! A slice lies in its cutting plane, so dropping the coordinate along the plane's
//! axis loses nothing. The remaining two coordinates keep their right-handed order:
//! `X` maps to `(y, z)`, `Y` to `(z, x)` and `Z` to `(x, y)`.

use crate::float_types::Real;
use crate::plane::Axis;
use crate::point::Point;
use crate::segment::Segment;
use geo::{Coord, Line, LineString, MultiLineString};

/// Project `p` onto the coordinate plane perpendicular to `axis`.
pub const fn project(p: &Point, axis: Axis) -> Coord<Real> {
    match axis {
        Axis::X => Coord { x: p.y, y: p.z },
        Axis::Y => Coord { x: p.z, y: p.x },
        Axis::Z => Coord { x: p.x, y: p.y },
    }
}

impl Segment {
    /// This segment as a 2D [`Line`] in the plane perpendicular to `axis`.
    pub const fn to_line(&self, axis: Axis) -> Line<Real> {
        Line {
            start: project(&self.p, axis),
            end: project(&self.q, axis),
        }
    }
}

/// Project every segment, keeping order.
pub fn to_lines(segments: &[Segment], axis: Axis) -> Vec<Line<Real>> {
    segments.iter().map(|s| s.to_line(axis)).collect()
}

/// One two-point `LineString` per segment, ready for `geo` algorithms such as
/// bounding rects or Euclidean length.
///
/// ```rust
/// # use stlslice::{Axis, Point, Segment, contour::to_multi_line_string};
/// let segs = [Segment::new(Point::new(0.0, 0.0, 2.0), Point::new(3.0, 4.0, 2.0))];
/// let mls = to_multi_line_string(&segs, Axis::Z);
/// assert_eq!(mls.0.len(), 1);
/// assert_eq!(mls.0[0].0[1].x, 3.0);
/// ```
pub fn to_multi_line_string(segments: &[Segment], axis: Axis) -> MultiLineString<Real> {
    MultiLineString::new(
        segments
            .iter()
            .map(|s| LineString::new(vec![project(&s.p, axis), project(&s.q, axis)]))
            .collect(),
    )
}
