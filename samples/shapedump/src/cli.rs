use std::str::FromStr;

use nalgebra::Point3;
use tessera::shapes::{AxisConvention, SeamMode, SphereColoring, SphereParams};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum OutputFormat {
    /// Shape metadata, attribute layout, and the recorded draw commands
    Summary,
    /// One `index,x,y,z,r,g,b` row per vertex
    Csv,
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,tessera=info,vertexbuf=info,shapedump=info",
        env = "SHAPEDUMP_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// What to write to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,
    #[command(subcommand)]
    pub shape: ShapeCmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum ShapeCmd {
    /// A single red/green/blue triangle
    Triangle,
    /// A nine-vertex triangle fan
    Fan,
    /// An axis-aligned cube
    Cube {
        /// Length of each edge
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        edge_length: f32,
    },
    /// A latitude/longitude sphere
    Sphere(SphereArgs),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Axes {
    PolarY,
    Legacy,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Seam {
    Carry,
    Wrap,
}

#[derive(Debug, clap::Args)]
pub struct SphereArgs {
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub radius: f64,
    /// Longitudinal subdivisions (bands between the poles)
    #[arg(
        short = 'm',
        long,
        default_value_t = SphereParams::DEFAULT_LONGITUDES,
        value_parser = subdivisions()
    )]
    pub longitudes: usize,
    /// Latitudinal subdivisions (samples per ring); defaults to twice the longitudes
    #[arg(short = 'l', long, value_parser = subdivisions())]
    pub latitudes: Option<usize>,
    #[arg(long, value_enum, default_value_t = Axes::PolarY)]
    pub axes: Axes,
    #[arg(long, value_enum, default_value_t = Seam::Carry)]
    pub seam: Seam,
    /// Color of even quads, or of every vertex with `--solid`
    #[arg(long, default_value = "1,0,0", value_parser = parse_point3::<f32>, value_name = "R,G,B")]
    pub color_a: Point3<f32>,
    /// Color of odd quads
    #[arg(long, default_value = "0,0,1", value_parser = parse_point3::<f32>, value_name = "R,G,B")]
    pub color_b: Point3<f32>,
    /// Paint every vertex with `--color-a` instead of a checkerboard
    #[arg(long)]
    pub solid: bool,
}

impl SphereArgs {
    pub fn params(&self) -> SphereParams {
        let coloring = if self.solid {
            SphereColoring::Solid(self.color_a)
        } else {
            SphereColoring::Checker(self.color_a, self.color_b)
        };
        SphereParams::default()
            .with_radius(self.radius)
            .with_resolution(
                self.longitudes,
                self.latitudes.unwrap_or(self.longitudes * 2),
            )
            .with_axes(match self.axes {
                Axes::PolarY => AxisConvention::PolarY,
                Axes::Legacy => AxisConvention::Legacy,
            })
            .with_seam(match self.seam {
                Seam::Carry => SeamMode::Carry,
                Seam::Wrap => SeamMode::Wrap,
            })
            .with_coloring(coloring)
    }
}

/// Upper bound on either sphere resolution; 2048 × 4096 quads is already ~600 MB of positions alone.
pub const MAX_SUBDIVISIONS: u64 = 2048;

fn subdivisions() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::new().range(0..=MAX_SUBDIVISIONS)
}

fn parse_point3<R: FromStr + nalgebra::Scalar>(
    s: &str,
) -> Result<Point3<R>, Box<dyn std::error::Error + Send + Sync + 'static>>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let mut split = s.trim().split(',');
    let mut next = || {
        split
            .next()
            .ok_or_else(|| format!("expected three comma-separated values, found {s:?}"))
    };
    let x = R::from_str(next()?.trim())?;
    let y = R::from_str(next()?.trim())?;
    let z = R::from_str(next()?.trim())?;
    Ok(Point3::new(x, y, z))
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn sphere_args(args: &[&str]) -> Result<SphereArgs, clap::Error> {
        let cli = Cli::try_parse_from(["shapedump", "sphere"].iter().chain(args))?;
        match cli.shape {
            ShapeCmd::Sphere(sphere) => Ok(sphere),
            other => panic!("parsed {other:?} instead of a sphere"),
        }
    }

    #[test]
    fn latitudes_default_to_twice_the_longitudes() {
        let params = sphere_args(&["-m", "7"]).unwrap().params();
        assert_eq!((params.longitudes, params.latitudes), (7, 14));
        assert_eq!(params.coloring, SphereColoring::default());
    }

    #[test]
    fn resolution_is_bounded() {
        let params = sphere_args(&["-m", "2048"]).unwrap().params();
        assert_eq!(params.latitudes, 4096);
        assert!(sphere_args(&["-m", "2049"]).is_err());
        assert!(sphere_args(&["-l", "18446744073709551615"]).is_err());
        assert!(sphere_args(&["-m", "-1"]).is_err());
    }

    #[test]
    fn solid_and_checker_colors() {
        let params = sphere_args(&["--solid", "--color-a", "0, 1, 0"]).unwrap().params();
        assert_eq!(
            params.coloring,
            SphereColoring::Solid(Point3::new(0.0, 1.0, 0.0))
        );
        assert!(sphere_args(&["--color-b", "1,2"]).is_err());
    }
}
