//! The fixed block vocabulary the paginator draws.
//!
//! Every block computes its own full height up front, so the paginator
//! can request space for it atomically; a block is never split across a
//! page boundary.

use crate::config::{PageGeometry, Theme};
use crate::text::line_count;
use houndstitch_types::Color;

/// Horizontal gap between a swatch or marker and its text.
pub const INSET_GAP: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Cover-page title line.
    Title { text: String },
    /// Section heading; level 1 for section titles, 2 for sub-headings.
    Heading { level: u8, text: String },
    /// Wrapped body text.
    Paragraph { text: String },
    /// Smaller wrapped note text.
    Note { text: String },
    /// Fixed-size color box followed by wrapped text.
    SwatchRow { color: Color, text: String },
    /// Circular step marker aligned to the first wrapped line.
    NumberedItem { number: u32, text: String },
    /// Pattern preview; always starts a fresh page.
    Image { src: String },
    /// Fixed vertical gap.
    Spacer { height: f32 },
    /// Unconditional page break.
    SectionBreak,
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading { level: 1, text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Block::Note { text: text.into() }
    }

    /// The block's full height in points. This is the single number the
    /// paginator passes to `ensure_space` before drawing.
    pub fn height(&self, geometry: &PageGeometry, theme: &Theme) -> f32 {
        let full_width = geometry.content_width();
        match self {
            Block::Title { text } => {
                let lines = line_count(text, theme.char_width(theme.title_size), full_width);
                lines as f32 * theme.line_height(theme.title_size) + theme.block_gap
            }
            Block::Heading { level, text } => {
                let size = if *level <= 1 {
                    theme.heading_size
                } else {
                    theme.heading_size - 2.0
                };
                let lines = line_count(text, theme.char_width(size), full_width);
                lines as f32 * theme.line_height(size) + theme.block_gap * 2.0
            }
            Block::Paragraph { text } => {
                let lines = line_count(text, theme.char_width(theme.body_size), full_width);
                lines as f32 * theme.line_height(theme.body_size) + theme.block_gap
            }
            Block::Note { text } => {
                let lines = line_count(text, theme.char_width(theme.note_size), full_width);
                lines as f32 * theme.line_height(theme.note_size) + theme.block_gap
            }
            Block::SwatchRow { text, .. } => {
                let text_width = full_width - theme.swatch_size - INSET_GAP;
                let lines = line_count(text, theme.char_width(theme.body_size), text_width);
                let text_height = lines as f32 * theme.line_height(theme.body_size);
                text_height.max(theme.swatch_size) + theme.block_gap
            }
            Block::NumberedItem { text, .. } => {
                let text_width = full_width - 2.0 * theme.marker_radius - INSET_GAP;
                let lines = line_count(text, theme.char_width(theme.body_size), text_width);
                let text_height = lines as f32 * theme.line_height(theme.body_size);
                text_height.max(2.0 * theme.marker_radius) + theme.block_gap
            }
            Block::Image { .. } => theme.image_max_height + theme.block_gap,
            Block::Spacer { height } => *height,
            Block::SectionBreak => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_height_scales_with_wrap_count() {
        let geo = PageGeometry::default();
        let theme = Theme::default();
        let short = Block::paragraph("sc around");
        let long = Block::paragraph("sc around ".repeat(40));
        assert!(long.height(&geo, &theme) > short.height(&geo, &theme) * 3.0);
    }

    #[test]
    fn swatch_row_is_at_least_swatch_tall() {
        let geo = PageGeometry::default();
        let theme = Theme::default();
        let row = Block::SwatchRow {
            color: Color::BLACK,
            text: "x".into(),
        };
        assert!(row.height(&geo, &theme) >= theme.swatch_size);
    }

    #[test]
    fn section_break_occupies_no_height() {
        let geo = PageGeometry::default();
        let theme = Theme::default();
        assert_eq!(Block::SectionBreak.height(&geo, &theme), 0.0);
    }
}
