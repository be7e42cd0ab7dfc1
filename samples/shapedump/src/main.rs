use std::io::{BufWriter, Write};

use clap::Parser;
use tessera::shapes;
use vertexbuf::record::{ProgramLayout, RecordingBackend};

mod cli;
mod dump;

use cli::{Cli, OutputFormat, ShapeCmd};
use dump::DumpError;

pub fn main() -> Result<(), DumpError> {
    let args = Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);

    let shape = match &args.shape {
        ShapeCmd::Triangle => shapes::triangle(),
        ShapeCmd::Fan => shapes::triangle_fan(),
        ShapeCmd::Cube { edge_length } => shapes::cube(*edge_length),
        ShapeCmd::Sphere(sphere) => shapes::sphere_with(&sphere.params()),
    };
    tracing::info!(
        topology = ?shape.topology(),
        vertices = shape.vertex_count(),
        "generated shape"
    );

    // a program consuming exactly the attributes the shape provides
    let program = ProgramLayout::for_attributes(shape.attributes().map(|a| a.name()));
    let mut backend = RecordingBackend::new();
    shape.draw(&mut backend, &program)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.output {
        OutputFormat::Summary => dump::summary(&mut out, &shape, &backend)?,
        OutputFormat::Csv => dump::csv(&mut out, &shape)?,
    }
    out.flush()?;
    Ok(())
}
