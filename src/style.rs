//! Paragraph stylesheet – the four named styles the report uses, plus unit
//! helpers shared by the story builder and pagination.

use serde::{Deserialize, Serialize};

/// One centimetre in PDF points.
pub const CM: f32 = 72.0 / 2.54;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Resolved typography for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub name: &'static str,
    pub font_size: f32,
    /// Baseline-to-baseline distance in points.
    pub leading: f32,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    /// Extra space above the paragraph, skipped at the top of a page.
    pub space_before: f32,
    pub space_after: f32,
}

impl ParagraphStyle {
    pub const fn title() -> Self {
        Self {
            name: "Title",
            font_size: 18.0,
            leading: 22.0,
            font_weight: FontWeight::Bold,
            text_align: TextAlign::Center,
            space_before: 0.0,
            space_after: 6.0,
        }
    }

    pub const fn heading1() -> Self {
        Self {
            name: "Heading1",
            font_size: 18.0,
            leading: 22.0,
            font_weight: FontWeight::Bold,
            text_align: TextAlign::Left,
            space_before: 0.0,
            space_after: 6.0,
        }
    }

    pub const fn heading2() -> Self {
        Self {
            name: "Heading2",
            font_size: 14.0,
            leading: 18.0,
            font_weight: FontWeight::Bold,
            text_align: TextAlign::Left,
            space_before: 12.0,
            space_after: 6.0,
        }
    }

    pub const fn normal() -> Self {
        Self {
            name: "Normal",
            font_size: 10.0,
            leading: 12.0,
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
        }
    }

    /// Style for a heading of the given level. Anything deeper than 2 uses
    /// the level-2 style.
    pub fn for_heading(level: u8) -> Self {
        match level {
            0 | 1 => Self::heading1(),
            _ => Self::heading2(),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight == FontWeight::Bold
    }
}
