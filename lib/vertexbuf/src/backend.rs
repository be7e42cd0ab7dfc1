//! The interface between [VertexShapes](crate::VertexShape) and a graphics API.
//!
//! Compiling shaders, owning GPU memory, and issuing draw calls all happen on the far side of
//! [GraphicsBackend]. This crate only decides *what* gets uploaded, activated, and drawn, and in
//! which order.

use crate::{AttributeBuffer, AttributeName, Topology};

pub mod record;
#[cfg(feature = "wgpu")]
mod wgpu;

/// A graphics API binding able to upload attribute buffers and draw them.
pub trait GraphicsBackend {
    /// Handle to an uploaded attribute buffer.
    type Buffer;
    /// Whatever the backend binds attributes against; usually a linked shader program.
    type Program: ?Sized;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Upload `attr` and return a handle to it.
    fn create_buffer(&mut self, attr: &AttributeBuffer) -> Result<Self::Buffer, Self::Error>;

    /// Bind `buffer` to the input of `program` that consumes `name`.
    fn activate(
        &mut self,
        buffer: &Self::Buffer,
        name: &AttributeName,
        program: &Self::Program,
    ) -> Result<(), Self::Error>;

    /// Draw `count` vertices starting at `first`, using every currently active attribute.
    fn draw_arrays(&mut self, topology: Topology, first: usize, count: usize) -> Result<(), Self::Error>;
}

/// A [VertexShape](crate::VertexShape) whose attributes have been uploaded to a backend.
pub struct ShapeBuffers<B: GraphicsBackend> {
    topology: Topology,
    vertex_count: usize,
    buffers: Vec<(AttributeName, B::Buffer)>,
}

impl<B: GraphicsBackend> std::fmt::Debug for ShapeBuffers<B>
where
    B::Buffer: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeBuffers")
            .field("topology", &self.topology)
            .field("vertex_count", &self.vertex_count)
            .field("buffers", &self.buffers)
            .finish()
    }
}

impl<B: GraphicsBackend> ShapeBuffers<B> {
    pub(crate) fn new(
        topology: Topology,
        vertex_count: usize,
        buffers: Vec<(AttributeName, B::Buffer)>,
    ) -> Self {
        Self {
            topology,
            vertex_count,
            buffers,
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

    #[inline]
    pub fn buffers(&self) -> &[(AttributeName, B::Buffer)] {
        &self.buffers
    }

    /// Activate every buffer in the order its attribute was added to the shape, then issue a
    /// single draw call covering the whole shape.
    pub fn draw(&self, backend: &mut B, program: &B::Program) -> Result<(), B::Error> {
        for (name, buffer) in &self.buffers {
            tracing::trace!(attribute = %name, "activating attribute");
            backend.activate(buffer, name, program)?;
        }
        tracing::trace!(
            topology = ?self.topology,
            vertices = self.vertex_count,
            "drawing shape"
        );
        backend.draw_arrays(self.topology, 0, self.vertex_count)
    }
}
