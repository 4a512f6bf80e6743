//! A single STL facet.

use crate::point::Point;
use crate::segment::Segment;

/// One facet of a triangle soup: the declared normal plus three vertices in file order.
///
/// The normal and the winding of `a, b, c` are expected to agree by the right-hand
/// rule, as the producing tool declared them. Nothing here checks or repairs that.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub normal: Point,
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub const fn new(normal: Point, a: Point, b: Point, c: Point) -> Self {
        Triangle { normal, a, b, c }
    }

    /// Vertices in file order.
    pub const fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The three directed edges `a→b`, `b→c`, `c→a`.
    ///
    /// ```rust
    /// # use stlslice::{Point, Triangle};
    /// let tri = Triangle::new(
    ///     Point::new(0.0, 0.0, 1.0),
    ///     Point::new(0.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.0, 1.0, 0.0),
    /// );
    /// let [ab, bc, ca] = tri.edges();
    /// assert_eq!(ab.q, bc.p);
    /// assert_eq!(ca.q, ab.p);
    /// ```
    pub const fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }
}

#[cfg(feature = "stl-io")]
impl From<&stl_io::Triangle> for Triangle {
    fn from(tri: &stl_io::Triangle) -> Self {
        let point = |v: &stl_io::Vector<f32>| Point::new(v[0], v[1], v[2]);
        Triangle {
            normal: point(&tri.normal),
            a: point(&tri.vertices[0]),
            b: point(&tri.vertices[1]),
            c: point(&tri.vertices[2]),
        }
    }
}

#[cfg(feature = "stl-io")]
impl From<&Triangle> for stl_io::Triangle {
    fn from(tri: &Triangle) -> Self {
        stl_io::Triangle {
            normal: tri.normal.into(),
            vertices: [tri.a.into(), tri.b.into(), tri.c.into()],
        }
    }
}
