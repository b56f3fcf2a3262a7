//! The document paginator.
//!
//! Streams a compiled pattern's sections into fixed-size pages with
//! running headers and footers. Block-granularity: every block's height
//! is known before it is drawn, so no block ever splits across a page.

pub mod block;
pub mod config;
pub mod document;
pub mod paginator;
pub mod text;

pub use block::Block;
pub use config::{PageGeometry, Theme};
pub use document::{find_part_notes, paginate, paginate_with_preview};
pub use paginator::{LayoutElement, LayoutError, Page, Paginator, PositionedElement};
pub use text::wrap_text;
