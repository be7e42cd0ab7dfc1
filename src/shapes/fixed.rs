//! Hand-authored shapes. These are lookup tables, not algorithms.

use vertexbuf::{AttributeName, AttributeType, Topology, VertexShape};

#[rustfmt::skip]
pub const TRIANGLE_POSITIONS: [f32; 9] = [
    0.0, 1.0, 0.0,   -1.0, -1.0, 0.0,   1.0, -1.0, 0.0,
];

#[rustfmt::skip]
pub const TRIANGLE_COLORS: [f32; 9] = [
    1.0, 0.0, 0.0,   0.0, 1.0, 0.0,   0.0, 0.0, 1.0,
];

/// Centre vertex first, then the rim counter-clockwise from +y.
#[rustfmt::skip]
pub const FAN_POSITIONS: [f32; 27] = [
    0.0, 0.0, 1.0,     0.0, 1.0, 0.0,     -0.7, 0.7, 0.0,
    -1.0, 0.0, 0.0,    -0.7, -0.7, 0.0,   0.0, -1.0, 0.0,
    0.7, -0.7, 0.0,    1.0, 0.0, 0.0,     0.7, 0.7, 0.0,
];

#[rustfmt::skip]
pub const FAN_COLORS: [f32; 27] = [
    1.0, 1.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,   1.0, 0.0, 0.0,   0.0, 1.0, 0.0,
];

/// Corners of a cube with edge length 2, two triangles per face, faces ordered
/// +x, -x, +y, -y, +z, -z.
#[rustfmt::skip]
pub const CUBE_CORNERS: [f32; 108] = [
    1.0, 1.0, 1.0,     1.0, -1.0, 1.0,    1.0, 1.0, -1.0,   // +x
    1.0, -1.0, -1.0,   1.0, -1.0, 1.0,    1.0, 1.0, -1.0,

    -1.0, 1.0, 1.0,    -1.0, -1.0, 1.0,   -1.0, 1.0, -1.0,  // -x
    -1.0, -1.0, -1.0,  -1.0, -1.0, 1.0,   -1.0, 1.0, -1.0,

    1.0, 1.0, 1.0,     -1.0, 1.0, 1.0,    1.0, 1.0, -1.0,   // +y
    -1.0, 1.0, -1.0,   -1.0, 1.0, 1.0,    1.0, 1.0, -1.0,

    1.0, -1.0, 1.0,    -1.0, -1.0, 1.0,   1.0, -1.0, -1.0,  // -y
    -1.0, -1.0, -1.0,  -1.0, -1.0, 1.0,   1.0, -1.0, -1.0,

    1.0, 1.0, 1.0,     1.0, -1.0, 1.0,    -1.0, 1.0, 1.0,   // +z
    -1.0, -1.0, 1.0,   1.0, -1.0, 1.0,    -1.0, 1.0, 1.0,

    1.0, 1.0, -1.0,    1.0, -1.0, -1.0,   -1.0, 1.0, -1.0,  // -z
    -1.0, -1.0, -1.0,  1.0, -1.0, -1.0,   -1.0, 1.0, -1.0,
];

#[rustfmt::skip]
pub const CUBE_COLORS: [f32; 108] = [
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

/// Assemble a shape from parallel position and color arrays.
pub(crate) fn colored(topology: Topology, positions: Vec<f32>, colors: Vec<f32>) -> VertexShape {
    let mut shape = VertexShape::new(topology, positions.len() / 3);
    shape.add_vertex_attribute(AttributeName::Position, AttributeType::Vec3, positions);
    shape.add_vertex_attribute(AttributeName::COLOR, AttributeType::Vec3, colors);
    shape
}

/// A single red/green/blue triangle in the z = 0 plane.
pub fn triangle() -> VertexShape {
    colored(
        Topology::Triangles,
        TRIANGLE_POSITIONS.to_vec(),
        TRIANGLE_COLORS.to_vec(),
    )
}

/// A white-centred fan of seven triangles around (0, 0, 1).
pub fn triangle_fan() -> VertexShape {
    colored(
        Topology::TriangleFan,
        FAN_POSITIONS.to_vec(),
        FAN_COLORS.to_vec(),
    )
}

/// An axis-aligned cube centred on the origin.
///
/// Every coordinate is `±edge_length / 2`. A negative edge length turns the cube inside out.
pub fn cube(edge_length: f32) -> VertexShape {
    let l = edge_length / 2.0;
    colored(
        Topology::Triangles,
        CUBE_CORNERS.iter().map(|c| c * l).collect(),
        CUBE_COLORS.to_vec(),
    )
}
