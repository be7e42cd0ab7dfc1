//! Helpers shared between the crates of the `tessera` workspace.

pub mod macros;
