//! The four shape generators.
//!
//! Every generator returns a [VertexShape](vertexbuf::VertexShape) carrying two `f32` vec3
//! attributes, [AttributeName::Position](vertexbuf::AttributeName::Position) and
//! [AttributeName::COLOR](vertexbuf::AttributeName::COLOR), index-aligned and each holding
//! exactly one entry per vertex.

mod fixed;
pub use fixed::*;
pub mod sphere;
pub use sphere::{sphere, sphere_with, AxisConvention, SeamMode, SphereColoring, SphereGrid, SphereParams};

/// A linear RGB color. Components are nominally in `[0, 1]`, but nothing clamps them.
pub type Rgb = vertexbuf::attribute::Rgb<f32>;
