//! The pagination state machine.
//!
//! A cursor tracks the current page and vertical offset. `ensure_space`
//! is the single overflow primitive: every block-drawing routine calls it
//! once, with the block's full height, before rendering anything. Blocks
//! are therefore atomic; overflow decisions happen only between blocks.

use crate::block::{Block, INSET_GAP};
use crate::config::{PageGeometry, Theme};
use crate::text::wrap_text;
use houndstitch_types::Color;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("page geometry leaves no content area ({0:.1}pt)")]
    NoContentArea(f32),
}

/// One positioned draw primitive on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub element: LayoutElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text {
        content: String,
        font_size: f32,
        bold: bool,
    },
    /// Filled color box (yarn swatches).
    Swatch { size: f32, color: Color },
    /// Circular step marker with the step number inside.
    StepMarker { radius: f32, number: u32 },
    Image {
        src: String,
        width: f32,
        height: f32,
    },
    /// Horizontal rule under the running header.
    Rule { width: f32 },
}

/// Pages of positioned elements ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub elements: Vec<PositionedElement>,
}

pub struct Paginator {
    geometry: PageGeometry,
    theme: Theme,
    /// Reused on every header.
    title: String,
    pages: Vec<Page>,
    y: f32,
}

// Small epsilon to absorb floating point inaccuracies in fit checks.
const EPSILON: f32 = 0.01;

impl Paginator {
    pub fn new(
        geometry: PageGeometry,
        theme: Theme,
        title: impl Into<String>,
    ) -> Result<Self, LayoutError> {
        let content = geometry.content_height();
        if content <= 0.0 {
            return Err(LayoutError::NoContentArea(content));
        }
        let mut paginator = Self {
            geometry,
            theme,
            title: title.into(),
            pages: Vec::new(),
            y: 0.0,
        };
        paginator.start_page();
        Ok(paginator)
    }

    fn start_page(&mut self) {
        let number = self.pages.len() + 1;
        let mut elements = Vec::new();
        // Running header: title line plus a rule across the content width.
        elements.push(PositionedElement {
            x: self.geometry.margin,
            y: self.geometry.margin,
            element: LayoutElement::Text {
                content: self.title.clone(),
                font_size: self.theme.note_size,
                bold: true,
            },
        });
        elements.push(PositionedElement {
            x: self.geometry.margin,
            y: self.geometry.margin + self.theme.line_height(self.theme.note_size),
            element: LayoutElement::Rule {
                width: self.geometry.content_width(),
            },
        });
        self.pages.push(Page { number, elements });
        self.y = self.geometry.content_top();
    }

    fn emit_footer(&mut self) {
        let number = self.pages.len();
        let y = self.geometry.height - self.geometry.margin - self.theme.note_size;
        let content = format!("Page {}", number);
        let x = (self.geometry.width
            - content.len() as f32 * self.theme.char_width(self.theme.note_size))
            / 2.0;
        let note_size = self.theme.note_size;
        self.current_page().elements.push(PositionedElement {
            x,
            y,
            element: LayoutElement::Text {
                content,
                font_size: note_size,
                bold: false,
            },
        });
    }

    fn current_page(&mut self) -> &mut Page {
        self.pages.last_mut().expect("paginator always has a page")
    }

    /// Start a fresh page unconditionally: footer out, header in.
    pub fn hard_break(&mut self) {
        // A hard break on a still-empty page would emit a blank sheet.
        if self.y > self.geometry.content_top() {
            self.emit_footer();
            self.start_page();
        }
    }

    /// The single overflow primitive: break the page if `height` would
    /// cross the bottom content boundary, otherwise do nothing.
    pub fn ensure_space(&mut self, height: f32) {
        if self.y + height > self.geometry.content_bottom() + EPSILON {
            log::debug!(
                "page {} overflow at y={:.1}, block height {:.1}",
                self.pages.len(),
                self.y,
                height
            );
            self.emit_footer();
            self.start_page();
        }
    }

    /// Draw one block at the cursor, breaking the page first if needed.
    pub fn push(&mut self, block: &Block) {
        match block {
            Block::SectionBreak => self.hard_break(),
            Block::Image { src } => self.push_image(src),
            _ => {
                let height = block.height(&self.geometry, &self.theme);
                self.ensure_space(height);
                self.draw_block(block);
                self.y += height;
            }
        }
    }

    fn draw_block(&mut self, block: &Block) {
        let x = self.geometry.margin;
        let full_width = self.geometry.content_width();
        match block {
            Block::Title { text } => {
                self.draw_wrapped(text, x, full_width, self.theme.title_size, true);
            }
            Block::Heading { level, text } => {
                let size = if *level <= 1 {
                    self.theme.heading_size
                } else {
                    self.theme.heading_size - 2.0
                };
                self.draw_wrapped(text, x, full_width, size, true);
            }
            Block::Paragraph { text } => {
                self.draw_wrapped(text, x, full_width, self.theme.body_size, false);
            }
            Block::Note { text } => {
                self.draw_wrapped(text, x, full_width, self.theme.note_size, false);
            }
            Block::SwatchRow { color, text } => {
                let swatch = self.theme.swatch_size;
                let page_y = self.y;
                self.current_page().elements.push(PositionedElement {
                    x,
                    y: page_y,
                    element: LayoutElement::Swatch {
                        size: swatch,
                        color: *color,
                    },
                });
                self.draw_wrapped(
                    text,
                    x + swatch + INSET_GAP,
                    full_width - swatch - INSET_GAP,
                    self.theme.body_size,
                    false,
                );
            }
            Block::NumberedItem { number, text } => {
                let radius = self.theme.marker_radius;
                // Marker center aligned to the first wrapped line.
                let page_y = self.y + radius;
                self.current_page().elements.push(PositionedElement {
                    x: x + radius,
                    y: page_y,
                    element: LayoutElement::StepMarker {
                        radius,
                        number: *number,
                    },
                });
                self.draw_wrapped(
                    text,
                    x + 2.0 * radius + INSET_GAP,
                    full_width - 2.0 * radius - INSET_GAP,
                    self.theme.body_size,
                    false,
                );
            }
            // Handled in push().
            Block::Image { .. } | Block::Spacer { .. } | Block::SectionBreak => {}
        }
    }

    fn draw_wrapped(&mut self, text: &str, x: f32, width: f32, font_size: f32, bold: bool) {
        let char_width = self.theme.char_width(font_size);
        let line_height = self.theme.line_height(font_size);
        let lines = wrap_text(text, char_width, width);
        let base_y = self.y;
        for (i, line) in lines.into_iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = base_y + i as f32 * line_height;
            self.current_page().elements.push(PositionedElement {
                x,
                y,
                element: LayoutElement::Text {
                    content: line,
                    font_size,
                    bold,
                },
            });
        }
    }

    /// Image blocks request a hard break first, then render inside the
    /// fixed maximum box. A missing source degrades to a placeholder
    /// line; pagination always continues.
    fn push_image(&mut self, src: &str) {
        self.hard_break();
        if src.trim().is_empty() {
            log::warn!("preview image unavailable, emitting placeholder");
            let placeholder = Block::note("[Preview image unavailable]");
            let height = placeholder.height(&self.geometry, &self.theme);
            self.ensure_space(height);
            self.draw_block(&placeholder);
            self.y += height;
            return;
        }
        let height = self.theme.image_max_height + self.theme.block_gap;
        self.ensure_space(height);
        let page_y = self.y;
        let x = self.geometry.margin;
        let width = self
            .theme
            .image_max_width
            .min(self.geometry.content_width());
        let image_max_height = self.theme.image_max_height;
        self.current_page().elements.push(PositionedElement {
            x,
            y: page_y,
            element: LayoutElement::Image {
                src: src.to_string(),
                width,
                height: image_max_height,
            },
        });
        self.y += height;
    }

    /// Close the final page and hand the pages over.
    pub fn finish(mut self) -> Vec<Page> {
        self.emit_footer();
        self.pages
    }
}
