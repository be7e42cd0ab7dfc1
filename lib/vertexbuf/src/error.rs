use crate::AttributeName;

/// Errors related to [VertexShapes](crate::VertexShape) and their attribute formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    VertexCountMismatch(#[from] VertexCountMismatch),
    #[error("invalid topology value: {0}")]
    UnknownTopology(u32),
    #[error("invalid component type value: {0}")]
    UnknownComponent(u32),
}

/// An attribute buffer doesn't hold as many vertices as the shape it was added to.
///
/// [VertexShape::add_vertex_attribute](crate::VertexShape::add_vertex_attribute) stores the
/// buffer anyway and reports this as a warning; drawing such a shape may read past the end of
/// the buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("wrong number of vertices ({found} instead of {expected}, {trailing} trailing elements) for attribute {attribute}")]
pub struct VertexCountMismatch {
    pub attribute: AttributeName,
    pub expected: usize,
    pub found: usize,
    pub trailing: usize,
}
