//! The pattern compilation engine.
//!
//! A synchronous, single-threaded pure computation: every compile call is
//! independent and re-entrant, all state is function-local except the
//! fixed read-only lookup tables, and the output `Pattern` is a fresh
//! value the engine keeps no reference to.

pub mod compiler;
pub mod customize;
pub mod difficulty;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod materials;
pub mod palette;

pub use compiler::{CompiledSection, Pattern, compile};
pub use customize::{Customizations, Customizer, MULTIPLIER_MAX, MULTIPLIER_MIN};
pub use difficulty::Difficulty;
pub use error::CompileError;
pub use instruction::{CompiledInstruction, STITCH_VOCABULARY, StitchType, extract_stitches};
pub use interpreter::{InterpretOptions, interpret};
pub use materials::{PatternMaterials, base_yardage, compute_materials};
pub use palette::{ColorAssignment, seed_palette, yarn_label};
