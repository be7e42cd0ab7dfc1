use crate::attribute::{AttributeComponent, AttributeComponentType, AttributeName, AttributeType};

/// A flat, typed numeric payload. The variant is the element type.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    F32(Vec<f32>),
}

tessera_common::impl_from_vec!(AttributeData:
    u8 => U8,
    u16 => U16,
    u32 => U32,
    i8 => I8,
    i16 => I16,
    f32 => F32,
);

impl AttributeData {
    #[inline]
    pub fn component(&self) -> AttributeComponent {
        match self {
            Self::U8(_) => AttributeComponent::U8,
            Self::U16(_) => AttributeComponent::U16,
            Self::U32(_) => AttributeComponent::U32,
            Self::I8(_) => AttributeComponent::I8,
            Self::I16(_) => AttributeComponent::I16,
            Self::F32(_) => AttributeComponent::F32,
        }
    }

    /// Number of scalar elements (not vertices).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::U8(d) => d.len(),
            Self::U16(d) => d.len(),
            Self::U32(d) => d.len(),
            Self::I8(d) => d.len(),
            Self::I16(d) => d.len(),
            Self::F32(d) => d.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * self.component().size()
    }

    /// Borrow the payload as `[T]`, if `T` is its element type.
    #[inline]
    pub fn as_slice<T: AttributeComponentType>(&self) -> Option<&[T]> {
        T::slice(self)
    }

    #[inline]
    pub fn as_f32(&self) -> Option<&[f32]> {
        self.as_slice::<f32>()
    }
}

/// One named, typed vertex attribute array.
///
/// The buffer knows nothing about GPUs; a [GraphicsBackend](crate::GraphicsBackend) turns it into
/// something that can be activated for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBuffer {
    name: AttributeName,
    ty: AttributeType,
    data: AttributeData,
}

impl AttributeBuffer {
    pub fn new(name: AttributeName, ty: AttributeType, data: impl Into<AttributeData>) -> Self {
        Self {
            name,
            ty,
            data: data.into(),
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &AttributeName {
        &self.name
    }

    #[inline(always)]
    pub fn attr_type(&self) -> AttributeType {
        self.ty
    }

    #[inline(always)]
    pub fn attr_component(&self) -> AttributeComponent {
        self.data.component()
    }

    #[inline(always)]
    pub fn data(&self) -> &AttributeData {
        &self.data
    }

    /// Components per vertex.
    #[inline]
    pub fn components(&self) -> usize {
        self.ty.size_elements()
    }

    /// Number of whole vertices in the payload.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.components()
    }

    /// Elements left over after the last whole vertex; nonzero means the payload is ragged.
    #[inline]
    pub fn trailing_elements(&self) -> usize {
        self.data.len() % self.components()
    }

    /// Stride between consecutive vertices, in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.ty.size_bytes(self.attr_component())
    }

    /// Iterate over the payload one vertex at a time.
    ///
    /// Trailing elements that don't make up a whole vertex are skipped.
    pub fn vertices<T: AttributeComponentType>(&self) -> Option<std::slice::ChunksExact<'_, T>> {
        let components = self.components();
        self.data
            .as_slice::<T>()
            .map(|data| data.chunks_exact(components))
    }
}
