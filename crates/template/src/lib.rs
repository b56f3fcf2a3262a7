//! Input boundary model: breed presets, row templates, and the
//! vision-analysis record. Immutable once loaded; the compiler only
//! ever reads these.

pub mod analysis;
pub mod part;
pub mod preset;

pub use analysis::{BodyPartAnalysis, BodyProportions, DogAnalysis, EarShape, TailType};
pub use part::{BodyPart, CANONICAL_ORDER};
pub use preset::{
    BodyPartTemplate, BreedPreset, ColorZone, RowTemplate, SizeKey, SizeVariant, TemplateError,
};
