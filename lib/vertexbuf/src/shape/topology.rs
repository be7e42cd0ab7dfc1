/// The method by which vertices are interpreted as geometric primitives.
///
/// Discriminants are the GL enum values (`GL_POINTS` = 0 ... `GL_TRIANGLE_FAN` = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl Topology {
    #[inline]
    pub fn to_gl(self) -> u32 {
        self as u32
    }

    pub fn from_gl(val: u32) -> Result<Self, crate::Error> {
        match val {
            0 => Ok(Self::Points),
            1 => Ok(Self::Lines),
            2 => Ok(Self::LineLoop),
            3 => Ok(Self::LineStrip),
            4 => Ok(Self::Triangles),
            5 => Ok(Self::TriangleStrip),
            6 => Ok(Self::TriangleFan),
            _ => Err(crate::Error::UnknownTopology(val)),
        }
    }

    /// Number of whole primitives `vertex_count` vertices make under this topology.
    pub fn primitive_count(self, vertex_count: usize) -> usize {
        match self {
            Self::Points => vertex_count,
            Self::Lines => vertex_count / 2,
            Self::LineLoop if vertex_count >= 2 => vertex_count,
            Self::LineStrip => vertex_count.saturating_sub(1),
            Self::Triangles => vertex_count / 3,
            Self::TriangleStrip | Self::TriangleFan => vertex_count.saturating_sub(2),
            Self::LineLoop => 0,
        }
    }
}
