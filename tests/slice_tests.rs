use approx::assert_abs_diff_eq;
use nalgebra::{Point3, Vector3};
use stlslice::{
    Axis, Plane, Point, Segment, Triangle, slice_at, slice_at_axis, slice_at_plane, slice_at_x,
    slice_at_y, slice_at_z,
};

fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
    Triangle::new(Point::new(0.0, 0.0, 1.0), a.into(), b.into(), c.into())
}

/// Axis-aligned unit cube [0,1]^3 as 12 outward-facing triangles.
fn unit_cube() -> Vec<Triangle> {
    let v = |x: f32, y: f32, z: f32| [x, y, z];
    let quad = |a, b, c, d| [tri(a, b, c), tri(a, c, d)];
    [
        quad(v(0., 0., 0.), v(0., 1., 0.), v(1., 1., 0.), v(1., 0., 0.)), // bottom
        quad(v(0., 0., 1.), v(1., 0., 1.), v(1., 1., 1.), v(0., 1., 1.)), // top
        quad(v(0., 0., 0.), v(1., 0., 0.), v(1., 0., 1.), v(0., 0., 1.)), // front
        quad(v(0., 1., 0.), v(0., 1., 1.), v(1., 1., 1.), v(1., 1., 0.)), // back
        quad(v(0., 0., 0.), v(0., 0., 1.), v(0., 1., 1.), v(0., 1., 0.)), // left
        quad(v(1., 0., 0.), v(1., 1., 0.), v(1., 1., 1.), v(1., 0., 1.)), // right
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(slice_at(&[], 0.0, 0.0, 1.0, 0.0).is_empty());
    assert!(slice_at_x(&[], 1.0).is_empty());
    assert!(slice_at_y(&[], 1.0).is_empty());
    assert!(slice_at_z(&[], 1.0).is_empty());
}

#[test]
fn triangle_lying_in_the_plane_gives_nothing() {
    // every edge is parallel to z = 0, so every parameter is 0/0
    let t = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    assert!(slice_at(&[t], 0.0, 0.0, 1.0, 0.0).is_empty());
}

#[test]
fn right_triangle_cut_at_x_one() {
    let t = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let segments = slice_at(&[t], 1.0, 0.0, 0.0, -1.0);
    assert_eq!(
        segments,
        vec![Segment::new(Point::new(1.0, 0.0, 0.0), Point::new(1.0, 1.0, 0.0))]
    );
    assert_eq!(slice_at_x(&[t], 1.0), segments);
}

#[test]
fn axis_helpers_substitute_unit_normals() {
    assert_eq!(Plane::x(2.0), Plane::new(1.0, 0.0, 0.0, -2.0));
    assert_eq!(Plane::y(2.0), Plane::new(0.0, 1.0, 0.0, -2.0));
    assert_eq!(Plane::z(2.0), Plane::new(0.0, 0.0, 1.0, -2.0));
    assert_eq!(Plane::axis(Axis::Y, -3.0), Plane::y(-3.0));
    assert_eq!(Axis::Z.unit(), [0.0, 0.0, 1.0]);
    assert_eq!(Plane::axis(Axis::X, 1.5).normal(), Vector3::from(Axis::X.unit()));
    assert_eq!(Plane::from([1.0, 2.0, 3.0, 4.0]), Plane::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn segments_follow_triangle_order() {
    let tris = [
        tri([0.0, 0.0, -1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]),
        tri([5.0, 5.0, 5.0], [6.0, 5.0, 5.0], [5.0, 6.0, 5.0]), // misses
        tri([10.0, 0.0, -1.0], [11.0, 0.0, 1.0], [10.0, 1.0, 1.0]),
    ];
    let segments = slice_at_z(&tris, 0.0);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].p.x < 2.0);
    assert!(segments[1].p.x >= 10.0);
}

#[test]
fn cube_cross_sections_on_every_axis() {
    let cube = unit_cube();
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let segments = slice_at_axis(&cube, axis, 0.25);
        // four side faces, two triangles each, each crossing once
        assert_eq!(segments.len(), 8, "axis {axis:?}");
        let perimeter: f32 = segments.iter().map(Segment::length).sum();
        assert_abs_diff_eq!(perimeter, 4.0, epsilon = 1e-5);
        for s in &segments {
            assert_abs_diff_eq!(axis.coordinate(&s.p), 0.25, epsilon = 1e-6);
            assert_abs_diff_eq!(axis.coordinate(&s.q), 0.25, epsilon = 1e-6);
        }
    }
}

#[test]
fn cut_outside_cube_is_empty() {
    let cube = unit_cube();
    assert!(slice_at_z(&cube, 1.5).is_empty());
    assert!(slice_at_z(&cube, -0.5).is_empty());
}

#[test]
fn oblique_plane_through_tetrahedron() {
    let tris = [
        tri([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        tri([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        tri([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    // x + y + z = 0.5 cuts the three faces meeting at the origin
    let plane = Plane::from_normal(Vector3::new(1.0, 1.0, 1.0), 0.5);
    let segments = slice_at_plane(&tris, &plane);
    assert_eq!(segments.len(), 3);
    for s in &segments {
        assert_abs_diff_eq!(plane.evaluate(&s.p), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(plane.evaluate(&s.q), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn plane_from_points_matches_right_hand_rule() {
    let plane = Plane::from_points(
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(1.0, 0.0, 2.0),
        Point3::new(0.0, 1.0, 2.0),
    )
    .unwrap();
    assert_eq!(plane.normal(), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(plane.d, -2.0);
    assert!(Plane::from_points(Point3::origin(), Point3::origin(), Point3::origin()).is_none());
}

#[test]
fn plane_touching_only_a_vertex_gives_no_segment() {
    // two triangles sharing the vertex (0,0,0); plane x = 0 touches nothing else
    let left = tri([0.0, 0.0, 0.0], [-1.0, 1.0, 0.0], [-1.0, -1.0, 0.0]);
    let right = tri([0.0, 0.0, 0.0], [1.0, -1.0, 0.0], [1.0, 1.0, 0.0]);
    for facet in [left, right] {
        // the edge starting at the shared vertex counts, the one ending there does not
        assert_eq!(facet.crossing_count(&Plane::x(0.0)), 1);
        assert!(facet.slice(&Plane::x(0.0)).is_none());
    }
}

#[test]
fn edge_parameter_points_land_on_plane() {
    let plane = Plane::new(0.0, 2.0, 0.0, -1.0); // y = 0.5
    let edge = Segment::new(Point::new(3.0, 0.0, 1.0), Point::new(3.0, 2.0, -1.0));
    let t = plane.edge_parameter(&edge);
    assert_eq!(t, 0.25);
    assert_eq!(edge.point_at(t), Point::new(3.0, 0.5, 0.5));
}
