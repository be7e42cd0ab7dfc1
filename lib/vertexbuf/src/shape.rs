use std::ops::Index;

use crate::{
    AttributeBuffer, AttributeData, AttributeName, AttributeType, Error, GraphicsBackend,
    ShapeBuffers, VertexCountMismatch,
};

mod topology;
pub use topology::*;

/// A set of vertices drawn with one draw call.
///
/// The shape holds a [Topology], the number of vertices to draw, and any number of named
/// [AttributeBuffers](AttributeBuffer), kept in the order they were added.
///
/// # Invariants
///
/// * there is at most one buffer per [AttributeName]
///
/// Every buffer *should* hold exactly [vertex_count](Self::vertex_count) vertices, but that isn't
/// enforced by [add_vertex_attribute](Self::add_vertex_attribute); see [VertexCountMismatch].
#[derive(Debug, Clone, PartialEq)]
pub struct VertexShape {
    topology: Topology,
    vertex_count: usize,
    attributes: Vec<AttributeBuffer>,
    diagnostics: Vec<VertexCountMismatch>,
}

impl Index<&AttributeName> for VertexShape {
    type Output = AttributeBuffer;

    /// # Panics
    ///
    /// * if `self` has no attribute named `name`
    #[inline]
    fn index(&self, name: &AttributeName) -> &Self::Output {
        match self.attribute(name) {
            Some(attr) => attr,
            None => panic!("shape has no attribute {name}"),
        }
    }
}

impl VertexShape {
    /// Construct a shape with no attributes.
    pub fn new(topology: Topology, vertex_count: usize) -> Self {
        Self {
            topology,
            vertex_count,
            attributes: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Attribute buffers in insertion order.
    #[inline]
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = &AttributeBuffer> {
        self.attributes.iter()
    }

    #[inline]
    pub fn attribute(&self, name: &AttributeName) -> Option<&AttributeBuffer> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }

    /// Shorthand for the `f32` payload of the attribute called `name`.
    pub fn attribute_f32(&self, name: &AttributeName) -> Option<&[f32]> {
        self.attribute(name).and_then(|attr| attr.data().as_f32())
    }

    /// Warnings collected by [add_vertex_attribute](Self::add_vertex_attribute), oldest first.
    ///
    /// Replacing a buffer doesn't retract the warnings its predecessor caused.
    #[inline]
    pub fn diagnostics(&self) -> &[VertexCountMismatch] {
        &self.diagnostics
    }

    /// Whether every stored buffer holds exactly [vertex_count](Self::vertex_count) vertices.
    pub fn is_consistent(&self) -> bool {
        self.attributes.iter().all(|attr| self.check(attr).is_none())
    }

    fn check(&self, attr: &AttributeBuffer) -> Option<VertexCountMismatch> {
        let found = attr.vertex_count();
        let trailing = attr.trailing_elements();
        if found != self.vertex_count || trailing != 0 {
            Some(VertexCountMismatch {
                attribute: attr.name().clone(),
                expected: self.vertex_count,
                found,
                trailing,
            })
        } else {
            None
        }
    }

    fn insert(&mut self, attr: AttributeBuffer) {
        match self.attributes.iter_mut().find(|a| a.name() == attr.name()) {
            Some(slot) => *slot = attr,
            None => self.attributes.push(attr),
        }
    }

    /// Store a new attribute buffer under `name`, replacing any buffer already stored there.
    ///
    /// If the buffer's vertex count doesn't match the shape's, the buffer is stored anyway and
    /// the mismatch is returned, appended to [diagnostics](Self::diagnostics), and logged.
    pub fn add_vertex_attribute(
        &mut self,
        name: AttributeName,
        ty: AttributeType,
        data: impl Into<AttributeData>,
    ) -> Option<VertexCountMismatch> {
        let attr = AttributeBuffer::new(name, ty, data);
        let mismatch = self.check(&attr);
        if let Some(ref m) = mismatch {
            tracing::warn!(
                attribute = %m.attribute,
                expected = m.expected,
                found = m.found,
                trailing = m.trailing,
                "wrong number of vertices for attribute"
            );
            self.diagnostics.push(m.clone());
        }
        self.insert(attr);
        mismatch
    }

    /// Like [add_vertex_attribute](Self::add_vertex_attribute), but a buffer with the wrong
    /// number of vertices is rejected and the shape is left unchanged.
    pub fn try_add_vertex_attribute(
        &mut self,
        name: AttributeName,
        ty: AttributeType,
        data: impl Into<AttributeData>,
    ) -> Result<(), Error> {
        let attr = AttributeBuffer::new(name, ty, data);
        if let Some(m) = self.check(&attr) {
            return Err(m.into());
        }
        self.insert(attr);
        Ok(())
    }

    /// Create a backend buffer for every attribute, in insertion order.
    pub fn upload<B: GraphicsBackend>(&self, backend: &mut B) -> Result<ShapeBuffers<B>, B::Error> {
        let buffers = self
            .attributes
            .iter()
            .map(|attr| Ok((attr.name().clone(), backend.create_buffer(attr)?)))
            .collect::<Result<Vec<_>, B::Error>>()?;
        Ok(ShapeBuffers::new(self.topology, self.vertex_count, buffers))
    }

    /// Upload this shape and draw it once.
    ///
    /// Use [upload](Self::upload) and [ShapeBuffers::draw] to draw the same shape repeatedly.
    pub fn draw<B: GraphicsBackend>(&self, backend: &mut B, program: &B::Program) -> Result<(), B::Error> {
        self.upload(backend)?.draw(backend, program)
    }
}
