//! Story – the ordered list of flowables handed to pagination.
//!
//! A story is built from the fixed [`TitlePage`] followed by the content
//! table. Every content block becomes a paragraph plus a small spacer, except
//! separators, which become a taller spacer on their own.

use crate::content::{Block, TitlePage};
use crate::style::{ParagraphStyle, CM};

/// Number of elements the title page contributes to every story.
pub const TITLE_PAGE_ELEMENTS: usize = 10;

/// Gap emitted after each paragraph of the body.
pub const PARAGRAPH_GAP: f32 = 0.3 * CM;

/// Gap emitted for a [`Block::Separator`].
pub const SEPARATOR_GAP: f32 = 0.5 * CM;

/// A page-level element.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    /// Fixed vertical space, in points.
    Spacer { height: f32 },
    Paragraph {
        text: String,
        style: ParagraphStyle,
    },
    /// Forces the next element onto a new page.
    PageBreak,
}

impl Flowable {
    pub fn spacer(height: f32) -> Self {
        Flowable::Spacer { height }
    }

    pub fn paragraph(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Flowable::Paragraph {
            text: text.into(),
            style,
        }
    }
}

/// Flowables for the cover page, ending with a page break.
pub fn title_page_story(page: &TitlePage) -> Vec<Flowable> {
    let title = ParagraphStyle::title();
    let subtitle = ParagraphStyle::heading2();
    let normal = ParagraphStyle::normal();

    let mut story = Vec::with_capacity(TITLE_PAGE_ELEMENTS);
    story.push(Flowable::spacer(3.0 * CM));
    story.extend(page.title.iter().map(|t| Flowable::paragraph(*t, title)));
    story.push(Flowable::spacer(1.0 * CM));
    story.extend(page.subtitle.iter().map(|t| Flowable::paragraph(*t, subtitle)));
    story.push(Flowable::spacer(2.0 * CM));
    story.push(Flowable::paragraph(page.organisation, normal));
    story.push(Flowable::paragraph(page.date, normal));
    story.push(Flowable::PageBreak);
    story
}

/// Flowables for one content block.
fn block_story(block: &Block, story: &mut Vec<Flowable>) {
    let (text, style) = match *block {
        Block::Separator => {
            story.push(Flowable::spacer(SEPARATOR_GAP));
            return;
        }
        Block::Heading { level, text } => (text, ParagraphStyle::for_heading(level)),
        Block::Paragraph(text) => (text, ParagraphStyle::normal()),
    };
    story.push(Flowable::paragraph(text, style));
    story.push(Flowable::spacer(PARAGRAPH_GAP));
}

/// Build the full story: cover page, then the content table.
pub fn build_story(title_page: &TitlePage, blocks: &[Block]) -> Vec<Flowable> {
    let mut story = title_page_story(title_page);
    for block in blocks {
        block_story(block, &mut story);
    }
    log::debug!(
        "story built: {} flowables from {} blocks",
        story.len(),
        blocks.len()
    );
    story
}
