//! houndstitch: compiles a dog's detected geometry and coloring into a
//! complete, paginated crochet pattern document.
//!
//! The crates layer bottom-up: `houndstitch-types` (colors, ids),
//! `houndstitch-template` (presets and analysis records),
//! `houndstitch-compile` (the pattern compiler), `houndstitch-layout`
//! (the paginator), and the render crates (draw commands, markdown).
//! This root crate wires them into [`PatternPipeline`].

pub mod pipeline;

pub use pipeline::{PatternPipeline, PipelineError};

// Re-export the layer crates under stable names.
pub use houndstitch_compile::{
    CompileError, CompiledInstruction, CompiledSection, ColorAssignment, Customizations,
    Customizer, Difficulty, Pattern, PatternMaterials, StitchType, compile,
};
pub use houndstitch_layout::{Block, LayoutElement, Page, PageGeometry, PositionedElement, Theme};
pub use houndstitch_render_core::{CommandRecorder, DrawCommand, PageCommands, PageRenderer};
pub use houndstitch_render_text::to_markdown;
pub use houndstitch_template::{
    BodyPart, BodyPartAnalysis, BodyPartTemplate, BodyProportions, BreedPreset, ColorZone,
    DogAnalysis, EarShape, RowTemplate, SizeKey, SizeVariant, TailType,
};
pub use houndstitch_types::{Color, PatternId, classify, name_for_hex};
