//! Planar cross-sections of triangle soups.
//!
//! Each triangle is cut independently: the plane meets at most two of its edges
//! (under the half-open `0 <= t < 1` test) and those two crossings become one
//! [`Segment`]. Segments come out in triangle order and are not stitched into loops.

use crate::float_types::Real;
use crate::plane::{Axis, Plane};
use crate::segment::Segment;
use crate::triangle::Triangle;

impl Triangle {
    /// Edge parameters `[t_pq, t_qr, t_rp]` of the three edges against `plane`.
    /// See [`Plane::edge_parameter`].
    pub fn crossing_parameters(&self, plane: &Plane) -> [Real; 3] {
        self.edges().map(|edge| plane.edge_parameter(&edge))
    }

    /// Number of edges whose parameter passes the `0 <= t < 1` test.
    pub fn crossing_count(&self, plane: &Plane) -> usize {
        self.crossing_parameters(plane)
            .into_iter()
            .filter(|t| Plane::crosses_at(*t))
            .count()
    }

    /// The segment where `plane` cuts this triangle, if any.
    ///
    /// Edges are paired in a fixed priority, first match wins:
    /// 1. `pq` and `qr`
    /// 2. `qr` and `rp`
    /// 3. `rp` and `pq`
    ///
    /// The segment runs from the crossing on the first edge of the pair to the crossing
    /// on the second. Zero, one or three crossing edges yield `None`.
    ///
    /// ```rust
    /// # use stlslice::{Plane, Point, Segment, Triangle};
    /// let tri = Triangle::new(
    ///     Point::new(0.0, 0.0, 1.0),
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(2.0, 0.0, 0.0),
    ///     Point::new(0.0, 2.0, 0.0),
    /// );
    /// let cut = tri.slice(&Plane::x(1.0)).unwrap();
    /// assert_eq!(cut, Segment::new(Point::new(1.0, 0.0, 0.0), Point::new(1.0, 1.0, 0.0)));
    /// ```
    pub fn slice(&self, plane: &Plane) -> Option<Segment> {
        let [pq, qr, rp] = self.edges();
        let [s, t, u] = self.crossing_parameters(plane);
        let (hit_s, hit_t, hit_u) = (
            Plane::crosses_at(s),
            Plane::crosses_at(t),
            Plane::crosses_at(u),
        );

        if hit_s && hit_t {
            Some(Segment::new(pq.point_at(s), qr.point_at(t)))
        } else if hit_t && hit_u {
            Some(Segment::new(qr.point_at(t), rp.point_at(u)))
        } else if hit_u && hit_s {
            Some(Segment::new(rp.point_at(u), pq.point_at(s)))
        } else {
            None
        }
    }
}

/// Slice `triangles` with the plane `a·x + b·y + c·z + d = 0`.
pub fn slice_at(triangles: &[Triangle], a: Real, b: Real, c: Real, d: Real) -> Vec<Segment> {
    slice_at_plane(triangles, &Plane::new(a, b, c, d))
}

/// Slice `triangles` with `plane`, one segment per crossing triangle, in input order.
///
/// ```rust
/// # use stlslice::{Plane, slice_at_plane};
/// assert!(slice_at_plane(&[], &Plane::z(0.0)).is_empty());
/// ```
pub fn slice_at_plane(triangles: &[Triangle], plane: &Plane) -> Vec<Segment> {
    let segments: Vec<Segment> = triangles.iter().filter_map(|tri| tri.slice(plane)).collect();
    log::trace!(
        "sliced {} triangles at {:?} into {} segments",
        triangles.len(),
        plane,
        segments.len()
    );
    segments
}

/// Slice with the plane perpendicular to `axis` at `value`.
pub fn slice_at_axis(triangles: &[Triangle], axis: Axis, value: Real) -> Vec<Segment> {
    slice_at_plane(triangles, &Plane::axis(axis, value))
}

/// Slice with the plane `x = value`.
pub fn slice_at_x(triangles: &[Triangle], x: Real) -> Vec<Segment> {
    slice_at_plane(triangles, &Plane::x(x))
}

/// Slice with the plane `y = value`.
pub fn slice_at_y(triangles: &[Triangle], y: Real) -> Vec<Segment> {
    slice_at_plane(triangles, &Plane::y(y))
}

/// Slice with the plane `z = value`.
pub fn slice_at_z(triangles: &[Triangle], z: Real) -> Vec<Segment> {
    slice_at_plane(triangles, &Plane::z(z))
}
