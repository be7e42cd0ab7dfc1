use std::fmt::Display;

use nalgebra::Point3;

mod buffer;
pub use buffer::*;

/// The per-vertex input a buffer feeds.
///
/// Indexed variants (`Texcoord(n)`, `Color(n)`, ...) follow glTF's `TEXCOORD_n` convention.
/// Anything else a shader consumes can be named with [AttributeName::Custom].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Position,
    Normal,
    Tangent,
    Texcoord(u32),
    Color(u32),
    Joints(u32),
    Weights(u32),
    Custom(String),
}

impl AttributeName {
    /// The primary color set.
    pub const COLOR: Self = Self::Color(0);

    /// Name of the vertex shader input this attribute binds to.
    ///
    /// Set `0` of an indexed attribute has no suffix, so `Color(0)` binds to `vertexColor` and
    /// `Color(1)` to `vertexColor1`.
    pub fn shader_input(&self) -> String {
        fn indexed(base: &str, set: u32) -> String {
            match set {
                0 => base.to_owned(),
                n => format!("{base}{n}"),
            }
        }
        match self {
            Self::Position => "vertexPosition".to_owned(),
            Self::Normal => "vertexNormal".to_owned(),
            Self::Tangent => "vertexTangent".to_owned(),
            Self::Texcoord(n) => indexed("vertexTexcoord", *n),
            Self::Color(n) => indexed("vertexColor", *n),
            Self::Joints(n) => indexed("vertexJoints", *n),
            Self::Weights(n) => indexed("vertexWeights", *n),
            Self::Custom(name) => name.clone(),
        }
    }

    /// The attribute that [shader_input](Self::shader_input) would bind to `input`, if it isn't
    /// a custom name.
    ///
    /// Only the exact spelling `shader_input` produces is recognized: `vertexColor` is
    /// `Color(0)`, but `vertexColor0` is not.
    pub fn from_shader_input(input: &str) -> Option<Self> {
        fn set(suffix: &str) -> Option<u32> {
            match suffix {
                "" => Some(0),
                s if s.starts_with(|c: char| c.is_ascii_digit() && c != '0') => s.parse().ok(),
                _ => None,
            }
        }
        const INDEXED: [(&str, fn(u32) -> AttributeName); 4] = [
            ("vertexTexcoord", AttributeName::Texcoord),
            ("vertexColor", AttributeName::Color),
            ("vertexJoints", AttributeName::Joints),
            ("vertexWeights", AttributeName::Weights),
        ];
        match input {
            "vertexPosition" => Some(Self::Position),
            "vertexNormal" => Some(Self::Normal),
            "vertexTangent" => Some(Self::Tangent),
            _ => INDEXED.iter().find_map(|(base, variant)| {
                input.strip_prefix(*base).and_then(set).map(variant)
            }),
        }
    }
}

impl Display for AttributeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position => f.write_str("POSITION"),
            Self::Normal => f.write_str("NORMAL"),
            Self::Tangent => f.write_str("TANGENT"),
            Self::Texcoord(n) => write!(f, "TEXCOORD_{n}"),
            Self::Color(n) => write!(f, "COLOR_{n}"),
            Self::Joints(n) => write!(f, "JOINTS_{n}"),
            Self::Weights(n) => write!(f, "WEIGHTS_{n}"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

impl From<&str> for AttributeName {
    /// See [AttributeName::from_shader_input].
    fn from(value: &str) -> Self {
        Self::from_shader_input(value).unwrap_or_else(|| Self::Custom(value.to_owned()))
    }
}

impl From<String> for AttributeName {
    fn from(value: String) -> Self {
        Self::from_shader_input(&value).unwrap_or(Self::Custom(value))
    }
}

/// The element type of an [AttributeBuffer]'s payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeComponent {
    U8,
    U16,
    U32,
    I8,
    I16,
    F32,
}

impl AttributeComponent {
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            AttributeComponent::U8 => size_of::<u8>(),
            AttributeComponent::U16 => size_of::<u16>(),
            AttributeComponent::U32 => size_of::<u32>(),
            AttributeComponent::I8 => size_of::<i8>(),
            AttributeComponent::I16 => size_of::<i16>(),
            AttributeComponent::F32 => size_of::<f32>(),
        }
    }

    /// The GL enum value for this component type (`GL_BYTE`, `GL_FLOAT`, ...).
    pub const fn to_gl(self) -> u32 {
        match self {
            AttributeComponent::I8 => 5120,
            AttributeComponent::U8 => 5121,
            AttributeComponent::I16 => 5122,
            AttributeComponent::U16 => 5123,
            AttributeComponent::U32 => 5125,
            AttributeComponent::F32 => 5126,
        }
    }

    pub fn from_gl(val: u32) -> Result<Self, crate::Error> {
        match val {
            5120 => Ok(AttributeComponent::I8),
            5121 => Ok(AttributeComponent::U8),
            5122 => Ok(AttributeComponent::I16),
            5123 => Ok(AttributeComponent::U16),
            5125 => Ok(AttributeComponent::U32),
            5126 => Ok(AttributeComponent::F32),
            _ => Err(crate::Error::UnknownComponent(val)),
        }
    }
}

/// How many components make up one vertex's worth of an attribute.
///
/// Values taken from the [glTF specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#accessor-data-types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl AttributeType {
    pub const fn size_elements(self) -> usize {
        match self {
            AttributeType::Scalar => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
            AttributeType::Mat2 => 4,
            AttributeType::Mat3 => 9,
            AttributeType::Mat4 => 16,
        }
    }

    pub const fn size_bytes(self, comp: AttributeComponent) -> usize {
        comp.size() * self.size_elements()
    }
}

/// Rust types that can be the element type of an [AttributeData] payload.
pub trait AttributeComponentType: Sized {
    /// Borrow `data` as a slice of `Self`, if that's the type it holds.
    fn slice(data: &AttributeData) -> Option<&[Self]>;
}

macro_rules! impl_attr_comp_type {
    ($Target:ident: $comp:ident) => {
        impl AttributeComponentType for $Target {
            #[inline]
            fn slice(data: &AttributeData) -> Option<&[Self]> {
                match data {
                    AttributeData::$comp(d) => Some(d.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

impl_attr_comp_type!(u8: U8);
impl_attr_comp_type!(u16: U16);
impl_attr_comp_type!(u32: U32);
impl_attr_comp_type!(i8: I8);
impl_attr_comp_type!(i16: I16);
impl_attr_comp_type!(f32: F32);

/// A linear RGB color.
pub type Rgb<C> = Point3<C>;
