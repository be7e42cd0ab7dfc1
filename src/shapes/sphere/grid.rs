use nalgebra::Point3;

use crate::Float;

/// How spherical angles map onto x/y/z.
///
/// `alpha` runs from 0 to π across the longitudinal subdivisions, `beta` from 0 to 2π across the
/// latitudinal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisConvention {
    /// `alpha` is the polar angle about +y: `(r·sinα·cosβ, r·cosα, r·sinα·sinβ)`.
    ///
    /// Ring 0 is the north pole and ring `M` the south pole; each collapses to one point.
    #[default]
    PolarY,
    /// `(r·sinβ·cosα, r·cosβ, r·sinα·sinβ)`.
    ///
    /// Still on the sphere, but the rings are great circles through ±y rather than parallels, so
    /// nothing degenerates.
    Legacy,
}

impl AxisConvention {
    #[inline]
    pub fn point<Real: Float>(self, radius: Real, alpha: Real, beta: Real) -> Point3<Real> {
        self.point_sin_cos(radius, alpha.sin_cos(), beta.sin_cos())
    }

    /// [point](Self::point), given `(sin, cos)` of each angle.
    pub fn point_sin_cos<Real: Float>(
        self,
        radius: Real,
        (sin_a, cos_a): (Real, Real),
        (sin_b, cos_b): (Real, Real),
    ) -> Point3<Real> {
        match self {
            Self::PolarY => Point3::new(
                radius * sin_a * cos_b,
                radius * cos_a,
                radius * sin_a * sin_b,
            ),
            Self::Legacy => Point3::new(
                radius * sin_b * cos_a,
                radius * cos_b,
                radius * sin_a * sin_b,
            ),
        }
    }
}

/// What the last quad of each ring connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeamMode {
    /// Corners to the right of latitude `L - 1` are just the next samples in the flat array, i.e.
    /// latitude 0 of the *following* ring. This leaves a visible seam, and the very last quad
    /// reaches one sample past the end of the grid, which [SphereGrid::dereference] clamps.
    #[default]
    Carry,
    /// Corners to the right of latitude `L - 1` wrap to latitude 0 of the same ring.
    Wrap,
}

/// Offsets of a quad's corners into the flat `xyz` sample array (i.e. sample index × 3).
///
/// `one` and `three` lie on ring `longitude`, `two` and `four` on ring `longitude + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadCorners {
    pub one: usize,
    pub two: usize,
    pub three: usize,
    pub four: usize,
}

impl QuadCorners {
    /// Corners of the quad's two triangles, `(one, two, three)` then `(two, three, four)`.
    #[inline]
    pub fn triangles(&self) -> [usize; 6] {
        [self.one, self.two, self.three, self.two, self.three, self.four]
    }
}

/// Points sampled on a sphere at every (longitude, latitude) grid intersection.
///
/// There are `longitudes + 1` rings (both poles included) of `latitudes` samples each. Sample
/// `(longitude, latitude)` lives at index `longitude · latitudes + latitude`.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGrid<Real: Float> {
    longitudes: usize,
    latitudes: usize,
    samples: Vec<Point3<Real>>,
}

impl<Real: Float> SphereGrid<Real> {
    /// Sample a sphere of `radius` centred on the origin.
    pub fn sample(radius: Real, longitudes: usize, latitudes: usize, axes: AxisConvention) -> Self {
        let m = Real::from_index(longitudes);
        let l = Real::from_index(latitudes);
        let mut samples = Vec::with_capacity(longitudes.saturating_add(1).saturating_mul(latitudes));
        for longitude in 0..=longitudes {
            // sin(π) isn't quite 0, so the poles are pinned to keep their rings degenerate
            let alpha = match longitude {
                0 => (Real::ZERO, Real::ONE),
                lon if lon == longitudes => (Real::ZERO, -Real::ONE),
                lon => (Real::from_index(lon) * Real::PI() / m).sin_cos(),
            };
            for latitude in 0..latitudes {
                let beta = Real::from_index(latitude) * Real::TWO * Real::PI() / l;
                samples.push(axes.point_sin_cos(radius, alpha, beta.sin_cos()));
            }
        }
        Self {
            longitudes,
            latitudes,
            samples,
        }
    }

    /// Number of longitudinal subdivisions (`M`); there are `M + 1` rings.
    #[inline]
    pub fn longitudes(&self) -> usize {
        self.longitudes
    }

    /// Number of latitudinal subdivisions (`L`), i.e. samples per ring.
    #[inline]
    pub fn latitudes(&self) -> usize {
        self.latitudes
    }

    #[inline]
    pub fn samples(&self) -> &[Point3<Real>] {
        &self.samples
    }

    /// The `latitudes` samples of ring `longitude`.
    ///
    /// # Panics
    ///
    /// * `longitude > self.longitudes()`
    #[inline]
    pub fn ring(&self, longitude: usize) -> &[Point3<Real>] {
        let start = longitude * self.latitudes;
        &self.samples[start..start + self.latitudes]
    }

    /// The samples as one flat `[x, y, z, x, y, z, ...]` array.
    pub fn to_flat(&self) -> Vec<Real> {
        self.samples.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Number of quads between adjacent rings: `longitudes · latitudes`.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.longitudes * self.latitudes
    }

    /// Corners of the quad whose top-left corner is sample `(longitude, latitude)`.
    pub fn quad_corners(&self, longitude: usize, latitude: usize, seam: SeamMode) -> QuadCorners {
        let ring = self.latitudes * 3;
        let one = longitude * ring + latitude * 3;
        let two = one + ring;
        let (three, four) = match seam {
            SeamMode::Carry => (one + 3, two + 3),
            SeamMode::Wrap => {
                let next = longitude * ring + ((latitude + 1) % self.latitudes) * 3;
                (next, next + ring)
            }
        };
        QuadCorners {
            one,
            two,
            three,
            four,
        }
    }

    /// Every quad's corners, ordered by longitude then latitude.
    pub fn quads(&self, seam: SeamMode) -> impl Iterator<Item = ((usize, usize), QuadCorners)> + '_ {
        (0..self.longitudes).flat_map(move |longitude| {
            (0..self.latitudes).map(move |latitude| {
                (
                    (longitude, latitude),
                    self.quad_corners(longitude, latitude, seam),
                )
            })
        })
    }

    /// Flat-array offsets of every triangle corner, six per quad.
    pub fn triangle_offsets(&self, seam: SeamMode) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.quad_count() * 6);
        for (_, quad) in self.quads(seam) {
            offsets.extend(quad.triangles());
        }
        offsets
    }

    /// Expand `offsets` into a flat, unindexed `xyz` array: one copy of the addressed sample per
    /// offset.
    ///
    /// An offset past the end of the grid is clamped to the last sample rather than producing
    /// an undefined coordinate; under [AxisConvention::PolarY] that is the south pole. On an
    /// empty grid it resolves to NaN.
    pub fn dereference(&self, offsets: &[usize]) -> Vec<Real> {
        let mut out = Vec::with_capacity(offsets.len() * 3);
        let mut clamped = 0usize;
        for &offset in offsets {
            let p = match self.samples.get(offset / 3) {
                Some(p) => p,
                None => {
                    clamped += 1;
                    match self.samples.last() {
                        Some(p) => p,
                        None => {
                            out.extend([Real::nan(); 3]);
                            continue;
                        }
                    }
                }
            };
            out.extend([p.x, p.y, p.z]);
        }
        if clamped > 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                clamped,
                samples = self.samples.len(),
                "sphere offsets past the end of the grid resolved to the last sample"
            );
        }
        out
    }
}
