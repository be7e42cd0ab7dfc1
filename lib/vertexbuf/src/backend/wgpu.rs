//! Conversions to [wgpu] types, for backends built on it.

use crate::{AttributeComponent, AttributeType, Topology};

impl Topology {
    /// The equivalent [wgpu::PrimitiveTopology].
    ///
    /// `None` for [Topology::LineLoop] and [Topology::TriangleFan], which wgpu can't draw
    /// directly.
    pub fn to_wgpu(self) -> Option<::wgpu::PrimitiveTopology> {
        use ::wgpu::PrimitiveTopology as P;
        match self {
            Topology::Points => Some(P::PointList),
            Topology::Lines => Some(P::LineList),
            Topology::LineStrip => Some(P::LineStrip),
            Topology::Triangles => Some(P::TriangleList),
            Topology::TriangleStrip => Some(P::TriangleStrip),
            Topology::LineLoop | Topology::TriangleFan => None,
        }
    }
}

impl AttributeComponent {
    /// The [wgpu::VertexFormat] of an attribute with this component and `ty`, if wgpu has one.
    ///
    /// Integer components map to their non-normalized formats.
    pub fn vertex_format(self, ty: AttributeType) -> Option<::wgpu::VertexFormat> {
        use ::wgpu::VertexFormat as F;
        use AttributeComponent as C;
        use AttributeType as T;
        match (self, ty) {
            (C::F32, T::Scalar) => Some(F::Float32),
            (C::F32, T::Vec2) => Some(F::Float32x2),
            (C::F32, T::Vec3) => Some(F::Float32x3),
            (C::F32, T::Vec4) => Some(F::Float32x4),
            (C::U32, T::Scalar) => Some(F::Uint32),
            (C::U32, T::Vec2) => Some(F::Uint32x2),
            (C::U32, T::Vec3) => Some(F::Uint32x3),
            (C::U32, T::Vec4) => Some(F::Uint32x4),
            (C::U16, T::Vec2) => Some(F::Uint16x2),
            (C::U16, T::Vec4) => Some(F::Uint16x4),
            (C::I16, T::Vec2) => Some(F::Sint16x2),
            (C::I16, T::Vec4) => Some(F::Sint16x4),
            (C::U8, T::Vec2) => Some(F::Uint8x2),
            (C::U8, T::Vec4) => Some(F::Uint8x4),
            (C::I8, T::Vec2) => Some(F::Sint8x2),
            (C::I8, T::Vec4) => Some(F::Sint8x4),
            _ => None,
        }
    }
}

impl crate::AttributeBuffer {
    /// The [wgpu::VertexAttribute] describing this buffer, bound at `shader_location`.
    ///
    /// `None` if wgpu has no [wgpu::VertexFormat] for the buffer's element layout.
    pub fn wgpu_attribute(&self, shader_location: u32) -> Option<::wgpu::VertexAttribute> {
        self.attr_component()
            .vertex_format(self.attr_type())
            .map(|format| ::wgpu::VertexAttribute {
                format,
                offset: 0,
                shader_location,
            })
    }
}
