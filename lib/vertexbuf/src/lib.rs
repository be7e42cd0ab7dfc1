#![doc = include_str!("../README.md")]

pub mod attribute;
pub mod backend;
mod error;
mod shape;

pub use attribute::{AttributeBuffer, AttributeComponent, AttributeData, AttributeName, AttributeType};
pub use backend::{record, GraphicsBackend, ShapeBuffers};
pub use error::*;
pub use shape::*;
