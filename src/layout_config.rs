//! Layout config – the intermediate representation between pagination and
//! PDF rendering. This is the "frozen" structure that encodes exactly what
//! goes on each page.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::TextAlign;

/// A complete document layout ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Document title embedded in the PDF metadata.
    pub title: String,
    /// Width of each page in PDF points (1 pt = 1/72 inch).
    pub page_width_pt: f32,
    /// Height of each page in PDF points.
    pub page_height_pt: f32,
    /// Ordered list of pages.
    pub pages: Vec<PageLayout>,
}

/// One page of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_index: usize,
    pub boxes: Vec<LayoutBox>,
}

/// A positioned block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    /// Position relative to page top-left, in points.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// Pre-wrapped lines of text.
    pub lines: Vec<TextLine>,
    pub font_size: f32,
    pub bold: bool,
    pub line_height: f32,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    /// X offset within the layout box (for alignment)
    pub x_offset: f32,
    /// Y offset from the top of the box
    pub y_offset: f32,
}

impl LayoutConfig {
    /// Create an empty A4 layout.
    #[cfg(test)]
    pub fn a4(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            // A4: 210mm × 297mm = 595.28 × 841.89 points
            page_width_pt: 595.28,
            page_height_pt: 841.89,
            pages: Vec::new(),
        }
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All text lines of the document in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|p| p.boxes.iter())
            .flat_map(|b| b.text.lines.iter())
            .map(|l| l.text.as_str())
    }
}

impl LayoutBox {
    /// Bottom edge relative to page top, in points.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
