pub mod classify;
pub mod color;
pub mod ids;

pub use classify::{classify, name_for_hex};
pub use color::Color;
pub use ids::PatternId;
