//! Fixed page geometry and type metrics.
//!
//! One page size, one margin set, one small type ramp. This engine does
//! no font shaping; widths come from a fixed average glyph advance.

#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    /// Page size in points. Defaults to US letter.
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Height reserved at the top of every page for the running header.
    pub header_band: f32,
    /// Height reserved at the bottom for the running footer.
    pub footer_band: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 54.0,
            header_band: 30.0,
            footer_band: 24.0,
        }
    }
}

impl PageGeometry {
    /// Top of the content band (y grows downward).
    pub fn content_top(&self) -> f32 {
        self.margin + self.header_band
    }

    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin - self.footer_band
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub note_size: f32,
    /// Line height as a multiple of font size.
    pub line_height_factor: f32,
    /// Average glyph advance as a multiple of font size.
    pub avg_char_ratio: f32,
    /// Side of the fixed square color swatch.
    pub swatch_size: f32,
    /// Radius of the circular step marker on numbered lists.
    pub marker_radius: f32,
    /// Fixed maximum box for image blocks.
    pub image_max_width: f32,
    pub image_max_height: f32,
    /// Vertical gap appended below most blocks.
    pub block_gap: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title_size: 22.0,
            heading_size: 14.0,
            body_size: 10.0,
            note_size: 9.0,
            line_height_factor: 1.45,
            avg_char_ratio: 0.5,
            swatch_size: 12.0,
            marker_radius: 8.0,
            image_max_width: 300.0,
            image_max_height: 220.0,
            block_gap: 4.0,
        }
    }
}

impl Theme {
    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_height_factor
    }

    pub fn char_width(&self, font_size: f32) -> f32 {
        font_size * self.avg_char_ratio
    }
}
