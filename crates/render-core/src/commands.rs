//! The serializable draw-command stream.
//!
//! This is the binary page-description output boundary: one flat list of
//! commands per page, positions in points from the page's top-left.

use crate::error::RenderError;
use crate::traits::PageRenderer;
use houndstitch_layout::{LayoutElement, Page};
use houndstitch_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        content: String,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    StrokeCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        label: String,
    },
    Line {
        x: f32,
        y: f32,
        width: f32,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        src: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCommands {
    pub page_number: usize,
    pub commands: Vec<DrawCommand>,
}

/// A `PageRenderer` that records the command stream instead of drawing.
#[derive(Default)]
pub struct CommandRecorder {
    pages: Vec<PageCommands>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageRenderer for CommandRecorder {
    type Output = Vec<PageCommands>;

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError> {
        let commands = page
            .elements
            .iter()
            .map(|positioned| {
                let (x, y) = (positioned.x, positioned.y);
                match &positioned.element {
                    LayoutElement::Text {
                        content,
                        font_size,
                        bold,
                    } => DrawCommand::Text {
                        x,
                        y,
                        size: *font_size,
                        bold: *bold,
                        content: content.clone(),
                    },
                    LayoutElement::Swatch { size, color } => DrawCommand::FillRect {
                        x,
                        y,
                        width: *size,
                        height: *size,
                        color: *color,
                    },
                    LayoutElement::StepMarker { radius, number } => DrawCommand::StrokeCircle {
                        cx: x,
                        cy: y,
                        radius: *radius,
                        label: number.to_string(),
                    },
                    LayoutElement::Image { src, width, height } => DrawCommand::Image {
                        x,
                        y,
                        width: *width,
                        height: *height,
                        src: src.clone(),
                    },
                    LayoutElement::Rule { width } => DrawCommand::Line {
                        x,
                        y,
                        width: *width,
                    },
                }
            })
            .collect();
        self.pages.push(PageCommands {
            page_number: page.number,
            commands,
        });
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, RenderError> {
        Ok(self.pages)
    }
}
