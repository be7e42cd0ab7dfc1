//! The hand-authored shapes.

use tessera::{cube, triangle, triangle_fan, AttributeName, Topology, VertexShape};

fn arrays(shape: &VertexShape) -> (&[f32], &[f32]) {
    (
        shape.attribute_f32(&AttributeName::Position).unwrap(),
        shape.attribute_f32(&AttributeName::COLOR).unwrap(),
    )
}

#[rustfmt::skip]
const CUBE_EDGE_TWO: [f32; 108] = [
    1.0, 1.0, 1.0,     1.0, -1.0, 1.0,    1.0, 1.0, -1.0,
    1.0, -1.0, -1.0,   1.0, -1.0, 1.0,    1.0, 1.0, -1.0,

    -1.0, 1.0, 1.0,    -1.0, -1.0, 1.0,   -1.0, 1.0, -1.0,
    -1.0, -1.0, -1.0,  -1.0, -1.0, 1.0,   -1.0, 1.0, -1.0,

    1.0, 1.0, 1.0,     -1.0, 1.0, 1.0,    1.0, 1.0, -1.0,
    -1.0, 1.0, -1.0,   -1.0, 1.0, 1.0,    1.0, 1.0, -1.0,

    1.0, -1.0, 1.0,    -1.0, -1.0, 1.0,   1.0, -1.0, -1.0,
    -1.0, -1.0, -1.0,  -1.0, -1.0, 1.0,   1.0, -1.0, -1.0,

    1.0, 1.0, 1.0,     1.0, -1.0, 1.0,    -1.0, 1.0, 1.0,
    -1.0, -1.0, 1.0,   1.0, -1.0, 1.0,    -1.0, 1.0, 1.0,

    1.0, 1.0, -1.0,    1.0, -1.0, -1.0,   -1.0, 1.0, -1.0,
    -1.0, -1.0, -1.0,  1.0, -1.0, -1.0,   -1.0, 1.0, -1.0,
];

#[rustfmt::skip]
const CUBE_COLORS: [f32; 108] = [
    1.0, 0.0, 0.0,   0.0, 1.0, 0.0,   0.0, 0.0, 1.0,
    1.0, 0.0, 0.0,   0.0, 1.0, 0.0,   0.0, 0.0, 1.0,

    0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,

    1.0, 0.0, 0.0,   0.0, 0.0, 1.0,   0.0, 0.0, 1.0,
    0.0, 1.0, 0.0,   0.0, 0.0, 1.0,   0.0, 0.0, 1.0,

    0.0, 1.0, 0.0,   1.0, 0.0, 0.0,   1.0, 0.0, 0.0,
    0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   1.0, 0.0, 0.0,

    1.0, 0.0, 0.0,   0.0, 1.0, 0.0,   0.0, 0.0, 1.0,
    1.0, 0.0, 0.0,   0.0, 1.0, 0.0,   0.0, 0.0, 1.0,

    0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
];

#[test]
fn triangle_table() {
    let shape = triangle();
    assert_eq!(shape.topology(), Topology::Triangles);
    assert_eq!(shape.vertex_count(), 3);
    let (pos, col) = arrays(&shape);
    assert_eq!(pos, &[0.0, 1.0, 0.0, -1.0, -1.0, 0.0, 1.0, -1.0, 0.0]);
    assert_eq!(col, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    assert!(shape.diagnostics().is_empty());
}

#[test]
fn fan_table() {
    let shape = triangle_fan();
    assert_eq!(shape.topology(), Topology::TriangleFan);
    assert_eq!(shape.vertex_count(), 9);
    let (pos, col) = arrays(&shape);
    assert_eq!(pos, &[
        0.0, 0.0, 1.0,     0.0, 1.0, 0.0,     -0.7, 0.7, 0.0,
        -1.0, 0.0, 0.0,    -0.7, -0.7, 0.0,   0.0, -1.0, 0.0,
        0.7, -0.7, 0.0,    1.0, 0.0, 0.0,     0.7, 0.7, 0.0,
    ]);
    assert_eq!(col, &[
        1.0, 1.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
    ]);
}

#[test]
fn cube_edge_two() {
    let shape = cube(2.0);
    assert_eq!(shape.topology(), Topology::Triangles);
    assert_eq!(shape.vertex_count(), 36);
    let (pos, col) = arrays(&shape);
    assert_eq!(pos, &CUBE_EDGE_TWO);
    assert_eq!(col, &CUBE_COLORS);
    assert!(shape.is_consistent());
}

#[test]
fn cube_scales_the_same_table() {
    for edge in [3.0f32, 0.5, -2.0] {
        let shape = cube(edge);
        let (pos, col) = arrays(&shape);
        let half = edge / 2.0;
        let expected: Vec<f32> = CUBE_EDGE_TWO.iter().map(|c| c * half).collect();
        assert_eq!(pos, expected.as_slice(), "edge {edge}");
        assert_eq!(col, &CUBE_COLORS);
    }
}

#[test]
fn cube_faces_are_axis_aligned() {
    let shape = cube(3.0);
    let (pos, _) = arrays(&shape);
    // six faces of six vertices, in order +x, -x, +y, -y, +z, -z
    for (face, verts) in pos.chunks_exact(18).enumerate() {
        let axis = face / 2;
        let sign = if face % 2 == 0 { 1.5 } else { -1.5 };
        for v in verts.chunks_exact(3) {
            assert_eq!(v[axis], sign, "face {face}");
        }
    }
}
