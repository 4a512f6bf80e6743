//! Implicit planes `a·x + b·y + c·z + d = 0` and their intersection with edges.

use crate::float_types::Real;
use crate::point::Point;
use crate::segment::Segment;
use nalgebra::{Point3, Vector3};

/// Principal axis a slicing plane can be perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub const fn unit(self) -> [Real; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }

    /// Component of `p` along this axis.
    pub const fn coordinate(self, p: &Point) -> Real {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        }
    }
}

/// A plane in implicit form: every point `(x, y, z)` on it satisfies
/// `a·x + b·y + c·z + d = 0`.
///
/// The coefficients are stored as given; `(a, b, c)` need not be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
}

impl Plane {
    pub const fn new(a: Real, b: Real, c: Real, d: Real) -> Self {
        Plane { a, b, c, d }
    }

    /// Plane `x = value`, i.e. `(1, 0, 0, -value)`.
    pub const fn x(value: Real) -> Self {
        Plane::new(1.0, 0.0, 0.0, -value)
    }

    /// Plane `y = value`, i.e. `(0, 1, 0, -value)`.
    pub const fn y(value: Real) -> Self {
        Plane::new(0.0, 1.0, 0.0, -value)
    }

    /// Plane `z = value`, i.e. `(0, 0, 1, -value)`.
    pub const fn z(value: Real) -> Self {
        Plane::new(0.0, 0.0, 1.0, -value)
    }

    /// Plane perpendicular to `axis` at coordinate `value`.
    pub const fn axis(axis: Axis, value: Real) -> Self {
        let [a, b, c] = axis.unit();
        Plane::new(a, b, c, -value)
    }

    /// Plane with the given normal at distance `w` along it (`n·p = w`).
    /// The normal is used as-is, not normalized.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane::new(normal.x, normal.y, normal.z, -w)
    }

    /// Plane through three points; the normal follows the right-hand rule `(p2-p1) × (p3-p1)`.
    ///
    /// Returns `None` for collinear or coincident points.
    pub fn from_points(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Option<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        if normal.norm_squared() <= Real::EPSILON * Real::EPSILON {
            return None;
        }
        Some(Plane::from_normal(normal, normal.dot(&p1.coords)))
    }

    /// The `(a, b, c)` coefficients as a vector.
    pub const fn normal(&self) -> Vector3<Real> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Left-hand side of the plane equation at `p`. Zero on the plane; its sign tells the side.
    #[inline]
    pub fn evaluate(&self, p: &Point) -> Real {
        self.a * p.x + self.b * p.y + self.c * p.z + self.d
    }

    /// Parameter `t` where `edge` meets the plane, so that `edge.point_at(t)` lies on it:
    ///
    /// ```text
    /// t = -(a·x1 + b·y1 + c·z1 + d) / (a·(x2-x1) + b·(y2-y1) + c·(z2-z1))
    /// ```
    ///
    /// An edge exactly parallel to the plane has a zero denominator, so the result is
    /// `±∞`, or NaN when the edge lies in the plane. Both fail [`Plane::crosses_at`],
    /// which means parallel and coplanar edges never contribute an intersection.
    #[inline]
    pub fn edge_parameter(&self, edge: &Segment) -> Real {
        let (p, q) = (&edge.p, &edge.q);
        -(self.a * p.x + self.b * p.y + self.c * p.z + self.d)
            / (self.a * (q.x - p.x) + self.b * (q.y - p.y) + self.c * (q.z - p.z))
    }

    /// Inclusion test for an edge parameter: `0 <= t < 1`.
    ///
    /// The interval is half-open so a plane through a vertex shared by two edges is
    /// counted once, on the edge that starts there.
    #[inline]
    pub fn crosses_at(t: Real) -> bool {
        (0.0..1.0).contains(&t)
    }
}

impl From<[Real; 4]> for Plane {
    fn from([a, b, c, d]: [Real; 4]) -> Self {
        Plane { a, b, c, d }
    }
}
