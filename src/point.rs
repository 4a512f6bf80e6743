//! Struct and functions for working with `Point`s, the coordinate triple STL stores for
//! both vertices and facet normals.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};
use std::fmt::Display;

/// A point (or direction) in model space, stored exactly as read from the file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Point {
    /// Create a new [`Point`]. Coordinates are kept verbatim, non-finite values included.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Point { x, y, z }
    }

    pub const fn origin() -> Self {
        Point::new(0.0, 0.0, 0.0)
    }

    /// Decode three consecutive little-endian `f32`s.
    ///
    /// ```rust
    /// # use stlslice::Point;
    /// let mut bytes = [0u8; 12];
    /// bytes[4..8].copy_from_slice(&2.5f32.to_le_bytes());
    /// assert_eq!(Point::from_le_bytes(&bytes), Point::new(0.0, 2.5, 0.0));
    /// ```
    #[inline]
    pub const fn from_le_bytes(buf: &[u8; 12]) -> Self {
        let x = Real::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let y = Real::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        let z = Real::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
        Point { x, y, z }
    }

    /// Linear interpolation `(1 - t)·self + t·other`, evaluated per component in `f32`.
    ///
    /// `t = 0` yields `self` and `t = 1` yields `other`.
    #[inline]
    pub fn lerp(&self, other: &Point, t: Real) -> Point {
        Point {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
            z: (1.0 - t) * self.z + t * other.z,
        }
    }

    /// `true` when no coordinate is NaN or infinite.
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub const fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[Real; 3]> for Point {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Point { x, y, z }
    }
}

impl From<Point> for [Real; 3] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

impl From<Point3<Real>> for Point {
    fn from(p: Point3<Real>) -> Self {
        Point::new(p.x, p.y, p.z)
    }
}

impl From<Point> for Point3<Real> {
    fn from(p: Point) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<Real>> for Point {
    fn from(v: Vector3<Real>) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<Point> for Vector3<Real> {
    fn from(p: Point) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl approx::AbsDiffEq for Point {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.x, &other.x, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y, &other.y, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl approx::RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

#[cfg(feature = "stl-io")]
impl From<Point> for stl_io::Vector<Real> {
    fn from(p: Point) -> Self {
        stl_io::Vector::new(p.to_array())
    }
}
