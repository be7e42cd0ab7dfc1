//! Latitude/longitude sphere tessellation.
//!
//! Generation happens in two separate phases:
//!
//! 1. [SphereGrid::sample] places `(M + 1) · L` points on the sphere, ring by ring from the north
//!    pole (longitude 0) to the south pole (longitude `M`);
//! 2. [SphereGrid::triangle_offsets] walks the `M · L` quads between adjacent rings, emitting two
//!    triangles per quad as offsets into the flat sample array, which
//!    [SphereGrid::dereference] then expands into an unindexed triangle soup.
//!
//! The offsets are never uploaded as an index buffer; every triangle gets its own copies of its
//! corners.

mod grid;
pub use grid::*;

use vertexbuf::{Topology, VertexShape};

use super::{fixed::colored, Rgb};

/// How sphere vertices are colored.
#[derive(Debug, Clone, PartialEq)]
pub enum SphereColoring {
    /// Every vertex gets the same color.
    Solid(Rgb),
    /// Quads alternate between two colors like a checkerboard: the first when
    /// `(latitude + longitude)` is even, the second otherwise.
    Checker(Rgb, Rgb),
    /// Like [SphereColoring::Checker], but with a separate color for each of the six vertices of
    /// a quad, in the order the quad's triangles emit them.
    CheckerPattern([Rgb; 6], [Rgb; 6]),
}

impl Default for SphereColoring {
    fn default() -> Self {
        Self::Checker(Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0))
    }
}

impl SphereColoring {
    /// Colors of the six vertices emitted for quad `(longitude, latitude)`.
    pub fn quad(&self, longitude: usize, latitude: usize) -> [Rgb; 6] {
        let even = (latitude + longitude) % 2 == 0;
        match self {
            Self::Solid(c) => [*c; 6],
            Self::Checker(a, b) => [if even { *a } else { *b }; 6],
            Self::CheckerPattern(a, b) => {
                if even {
                    *a
                } else {
                    *b
                }
            }
        }
    }
}

/// Everything that determines a generated sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereParams {
    pub radius: f64,
    /// Longitudinal subdivisions (`M`): the number of bands between the poles.
    pub longitudes: usize,
    /// Latitudinal subdivisions (`L`): samples per ring.
    pub latitudes: usize,
    pub axes: AxisConvention,
    pub seam: SeamMode,
    pub coloring: SphereColoring,
}

impl Default for SphereParams {
    /// A unit sphere with 10 longitudinal and 20 latitudinal subdivisions.
    fn default() -> Self {
        Self {
            radius: 1.0,
            longitudes: Self::DEFAULT_LONGITUDES,
            latitudes: Self::DEFAULT_LONGITUDES * 2,
            axes: AxisConvention::default(),
            seam: SeamMode::default(),
            coloring: SphereColoring::default(),
        }
    }
}

impl SphereParams {
    pub const DEFAULT_LONGITUDES: usize = 10;

    /// A unit sphere with 100 subdivisions in each direction.
    pub fn fine() -> Self {
        Self::default().with_resolution(100, 100)
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_resolution(mut self, longitudes: usize, latitudes: usize) -> Self {
        self.longitudes = longitudes;
        self.latitudes = latitudes;
        self
    }

    pub fn with_axes(mut self, axes: AxisConvention) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_seam(mut self, seam: SeamMode) -> Self {
        self.seam = seam;
        self
    }

    pub fn with_coloring(mut self, coloring: SphereColoring) -> Self {
        self.coloring = coloring;
        self
    }

    /// Number of vertices the generated shape will have, saturating at `usize::MAX`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.longitudes
            .saturating_mul(self.latitudes)
            .saturating_mul(6)
    }

    /// Sample the grid these parameters describe.
    pub fn grid(&self) -> SphereGrid<f64> {
        SphereGrid::sample(self.radius, self.longitudes, self.latitudes, self.axes)
    }

    /// One color per generated vertex, as a flat `rgb` array.
    pub fn colors(&self) -> Vec<f32> {
        let mut colors = Vec::with_capacity(self.vertex_count().saturating_mul(3));
        for longitude in 0..self.longitudes {
            for latitude in 0..self.latitudes {
                for c in self.coloring.quad(longitude, latitude) {
                    colors.extend([c.x, c.y, c.z]);
                }
            }
        }
        colors
    }
}

/// Generate a sphere with the default 10 × 20 resolution.
pub fn sphere(radius: f32, coloring: SphereColoring) -> VertexShape {
    sphere_with(
        &SphereParams::default()
            .with_radius(radius.into())
            .with_coloring(coloring),
    )
}

/// Generate a sphere as a [Topology::Triangles] soup of `longitudes · latitudes · 6` vertices.
///
/// # Panics
///
/// * if the vertex arrays can't be allocated, which includes any resolution whose
///   [vertex count](SphereParams::vertex_count) saturates
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(params), fields(
        radius = params.radius,
        longitudes = params.longitudes,
        latitudes = params.latitudes,
        axes = ?params.axes,
        seam = ?params.seam,
    ))
)]
pub fn sphere_with(params: &SphereParams) -> VertexShape {
    let grid = params.grid();
    let offsets = grid.triangle_offsets(params.seam);
    let positions: Vec<f32> = grid
        .dereference(&offsets)
        .into_iter()
        .map(crate::Float::to_f32)
        .collect();
    colored(Topology::Triangles, positions, params.colors())
}
