use std::io::{self, Write};

use tessera::{AttributeName, VertexShape};
use vertexbuf::record::{Command, RecordingBackend};

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Record(#[from] vertexbuf::record::RecordError),
    #[error("shape has no {0} attribute")]
    MissingAttribute(AttributeName),
}

pub fn summary(out: &mut impl Write, shape: &VertexShape, backend: &RecordingBackend) -> Result<(), DumpError> {
    let topology = shape.topology();
    writeln!(out, "topology:   {topology:?} (GL {})", topology.to_gl())?;
    writeln!(out, "vertices:   {}", shape.vertex_count())?;
    writeln!(out, "primitives: {}", topology.primitive_count(shape.vertex_count()))?;

    writeln!(out, "attributes:")?;
    for (_location, attr) in shape.attributes().enumerate() {
        writeln!(
            out,
            "  {} -> {}: {:?} (GL {}) x {:?}, {} vertices, stride {} bytes",
            attr.name(),
            attr.name().shader_input(),
            attr.attr_component(),
            attr.attr_component().to_gl(),
            attr.attr_type(),
            attr.vertex_count(),
            attr.stride(),
        )?;
        #[cfg(feature = "wgpu")]
        match attr.wgpu_attribute(_location as u32) {
            Some(wgpu_attr) => writeln!(out, "    wgpu: {:?} @ {}", wgpu_attr.format, wgpu_attr.shader_location)?,
            None => writeln!(out, "    wgpu: no vertex format")?,
        }
    }

    if let Some(pos) = shape.attribute(&AttributeName::Position).and_then(|a| a.vertices::<f32>()) {
        let (lo, hi) = pos.fold(([f32::INFINITY; 3], [f32::NEG_INFINITY; 3]), |(mut lo, mut hi), v| {
            for i in 0..3.min(v.len()) {
                lo[i] = lo[i].min(v[i]);
                hi[i] = hi[i].max(v[i]);
            }
            (lo, hi)
        });
        writeln!(out, "bounds:     {lo:?} .. {hi:?}")?;
    }

    if !shape.diagnostics().is_empty() {
        writeln!(out, "warnings:")?;
        for diag in shape.diagnostics() {
            writeln!(out, "  {diag}")?;
        }
    }

    writeln!(out, "commands:")?;
    for cmd in backend.commands() {
        match cmd {
            Command::Upload {
                buffer,
                attribute,
                bytes,
            } => writeln!(out, "  upload   #{} {attribute} ({bytes} bytes)", buffer.0)?,
            Command::Activate {
                buffer,
                attribute,
                location: Some(loc),
            } => writeln!(out, "  activate #{} {attribute} @ {loc}", buffer.0)?,
            Command::Activate {
                buffer,
                attribute,
                location: None,
            } => writeln!(out, "  activate #{} {attribute} (unused)", buffer.0)?,
            Command::Draw {
                topology,
                first,
                count,
            } => writeln!(out, "  draw     {topology:?} {first}..{}", first + count)?,
        }
    }
    Ok(())
}

pub fn csv(out: &mut impl Write, shape: &VertexShape) -> Result<(), DumpError> {
    let attr = |name: AttributeName| {
        shape
            .attribute(&name)
            .and_then(|a| a.vertices::<f32>())
            .ok_or(DumpError::MissingAttribute(name))
    };
    let positions = attr(AttributeName::Position)?;
    let colors = attr(AttributeName::COLOR)?;

    writeln!(out, "index,x,y,z,r,g,b")?;
    for (i, (p, c)) in positions.zip(colors).enumerate() {
        writeln!(out, "{i},{},{},{},{},{},{}", p[0], p[1], p[2], c[0], c[1], c[2])?;
    }
    Ok(())
}
