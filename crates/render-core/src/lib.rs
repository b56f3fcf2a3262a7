//! Core rendering abstractions for page output.
//!
//! This crate provides the seam between the paginator and concrete page
//! backends: the `PageRenderer` trait, the serializable `DrawCommand`
//! stream a page-description consumer reads, and the rendering error
//! type.

mod commands;
mod error;
mod traits;

pub use commands::{CommandRecorder, DrawCommand, PageCommands};
pub use error::RenderError;
pub use traits::PageRenderer;
