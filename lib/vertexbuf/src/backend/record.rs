//! A [GraphicsBackend] that draws nothing and remembers everything.

use crate::{AttributeBuffer, AttributeName, GraphicsBackend, Topology};

/// Errors produced by a [RecordingBackend].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("attempted to activate buffer {0}, which was never created by this backend")]
    UnknownBuffer(usize),
}

/// Handle to a buffer uploaded to a [RecordingBackend]; an index into
/// [RecordingBackend::buffers].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub usize);

/// The attribute inputs of a shader program, in location order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramLayout {
    inputs: Vec<String>,
}

impl ProgramLayout {
    pub fn new<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Layout of a program declaring an input for each of `names`.
    pub fn for_attributes<'a>(names: impl IntoIterator<Item = &'a AttributeName>) -> Self {
        Self::new(names.into_iter().map(AttributeName::shader_input))
    }

    /// Location of the input called `input`, if the program declares one.
    pub fn location(&self, input: &str) -> Option<u32> {
        self.inputs
            .iter()
            .position(|i| i == input)
            .map(|loc| loc as u32)
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Upload {
        buffer: BufferHandle,
        attribute: AttributeName,
        bytes: usize,
    },
    /// `location` is `None` when the program has no input for the attribute.
    Activate {
        buffer: BufferHandle,
        attribute: AttributeName,
        location: Option<u32>,
    },
    Draw {
        topology: Topology,
        first: usize,
        count: usize,
    },
}

/// Keeps a copy of every uploaded buffer and a log of every call made to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    buffers: Vec<AttributeBuffer>,
    commands: Vec<Command>,
}

impl RecordingBackend {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn buffers(&self) -> &[AttributeBuffer] {
        &self.buffers
    }

    #[inline]
    pub fn buffer(&self, handle: BufferHandle) -> Option<&AttributeBuffer> {
        self.buffers.get(handle.0)
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Only the [Command::Draw] entries of the log.
    pub fn draws(&self) -> impl Iterator<Item = (Topology, usize, usize)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::Draw {
                topology,
                first,
                count,
            } => Some((*topology, *first, *count)),
            _ => None,
        })
    }

    /// Forget the command log, keeping uploaded buffers.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl GraphicsBackend for RecordingBackend {
    type Buffer = BufferHandle;
    type Program = ProgramLayout;
    type Error = RecordError;

    fn create_buffer(&mut self, attr: &AttributeBuffer) -> Result<Self::Buffer, Self::Error> {
        let handle = BufferHandle(self.buffers.len());
        tracing::trace!(
            buffer = handle.0,
            attribute = %attr.name(),
            component = ?attr.attr_component(),
            ty = ?attr.attr_type(),
            vertices = attr.vertex_count(),
            "uploading attribute buffer"
        );
        self.commands.push(Command::Upload {
            buffer: handle,
            attribute: attr.name().clone(),
            bytes: attr.data().size_bytes(),
        });
        self.buffers.push(attr.clone());
        Ok(handle)
    }

    fn activate(
        &mut self,
        buffer: &Self::Buffer,
        name: &AttributeName,
        program: &Self::Program,
    ) -> Result<(), Self::Error> {
        if buffer.0 >= self.buffers.len() {
            return Err(RecordError::UnknownBuffer(buffer.0));
        }
        let input = name.shader_input();
        let location = program.location(&input);
        if location.is_none() {
            tracing::debug!(attribute = %name, input = %input, "program has no input for attribute");
        }
        self.commands.push(Command::Activate {
            buffer: *buffer,
            attribute: name.clone(),
            location,
        });
        Ok(())
    }

    fn draw_arrays(&mut self, topology: Topology, first: usize, count: usize) -> Result<(), Self::Error> {
        self.commands.push(Command::Draw {
            topology,
            first,
            count,
        });
        Ok(())
    }
}
