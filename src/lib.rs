//! Procedural geometry as flat vertex attribute arrays.
//!
//! See [shapes] for the generators; the resulting [VertexShapes](VertexShape) are drawn through
//! any [GraphicsBackend].
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod float;
pub mod shapes;

pub use float::Float;
pub use shapes::{cube, sphere, sphere_with, triangle, triangle_fan};

pub use vertexbuf::{self, AttributeName, GraphicsBackend, Topology, VertexShape};
