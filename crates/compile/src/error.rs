//! Error types for pattern compilation.

use houndstitch_template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    /// No preset exists for the requested breed. There is nothing to
    /// compile from, so this is surfaced instead of silently defaulting.
    #[error("no preset available for breed '{0}'")]
    MissingPreset(String),
    /// A customizer mutation was requested before any pattern was compiled.
    #[error("no pattern has been compiled yet")]
    NoCurrentPattern,
    /// The preset failed its load-time invariants.
    #[error("invalid preset: {0}")]
    Template(#[from] TemplateError),
}
