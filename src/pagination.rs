//! Pagination – flows a story of [`Flowable`]s into fixed-size page frames.
//!
//! Handles:
//! - Explicit page breaks
//! - Paragraph splitting across pages, line by line
//! - Spacers swallowed at the top of a page reached by overflow
//! - `space_before` suppressed at the top of a frame

use crate::fonts::{normalize_text, wrap_text, FontManager};
use crate::layout_config::*;
use crate::story::Flowable;
use crate::style::{ParagraphStyle, TextAlign};

/// The printable area of a page and the running cursor within it.
struct Frame {
    page: PageLayout,
    /// Distance consumed from the top of the frame, in points.
    cursor: f32,
    /// Whether this page was started because the previous one filled up.
    from_overflow: bool,
}

impl Frame {
    fn new(page_index: usize, from_overflow: bool) -> Self {
        Self {
            page: PageLayout {
                page_index,
                boxes: Vec::new(),
            },
            cursor: 0.0,
            from_overflow,
        }
    }

    fn at_top(&self) -> bool {
        self.cursor == 0.0 && self.page.boxes.is_empty()
    }
}

struct Paginator<'a> {
    config: LayoutConfig,
    frame: Frame,
    margin: f32,
    frame_width: f32,
    frame_height: f32,
    fonts: &'a FontManager,
}

impl Paginator<'_> {
    fn next_page(&mut self, from_overflow: bool) {
        let index = self.config.pages.len() + 1;
        let done = std::mem::replace(&mut self.frame, Frame::new(index, from_overflow));
        self.config.pages.push(done.page);
    }

    fn add_spacer(&mut self, height: f32) {
        if self.frame.at_top() && self.frame.from_overflow {
            return;
        }
        self.frame.cursor = (self.frame.cursor + height).min(self.frame_height);
    }

    fn add_paragraph(&mut self, text: &str, style: &ParagraphStyle) {
        let text = normalize_text(text);
        let lines = wrap_text(
            &text,
            style.font_size,
            style.is_bold(),
            self.frame_width,
            self.fonts,
        );

        let mut remaining = lines.as_slice();
        let mut first_chunk = true;
        while !remaining.is_empty() {
            let gap = if first_chunk && !self.frame.at_top() {
                style.space_before
            } else {
                0.0
            };
            let available = self.frame_height - self.frame.cursor - gap;
            let mut fit =
                ((available / style.leading).floor().max(0.0) as usize).min(remaining.len());
            if fit == 0 {
                if !self.frame.at_top() {
                    self.next_page(true);
                    continue;
                }
                // A single line taller than the frame still has to go somewhere.
                fit = 1;
            }

            self.frame.cursor += gap;
            let (chunk, rest) = remaining.split_at(fit);
            let lbox = self.place_lines(chunk, style);
            self.frame.cursor = lbox.bottom() - self.margin;
            self.frame.page.boxes.push(lbox);

            remaining = rest;
            first_chunk = false;
            if !remaining.is_empty() {
                self.next_page(true);
            }
        }

        self.frame.cursor = (self.frame.cursor + style.space_after).min(self.frame_height);
    }

    fn place_lines(&self, chunk: &[String], style: &ParagraphStyle) -> LayoutBox {
        let text_lines = chunk
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let x_offset = match style.text_align {
                    TextAlign::Left => 0.0,
                    TextAlign::Center => {
                        let w = self
                            .fonts
                            .measure_text_width(line, style.font_size, style.is_bold());
                        ((self.frame_width - w) / 2.0).max(0.0)
                    }
                };
                TextLine {
                    text: line.clone(),
                    x_offset,
                    y_offset: i as f32 * style.leading,
                }
            })
            .collect();

        LayoutBox {
            x: self.margin,
            y: self.margin + self.frame.cursor,
            width: self.frame_width,
            height: chunk.len() as f32 * style.leading,
            text: TextContent {
                lines: text_lines,
                font_size: style.font_size,
                bold: style.is_bold(),
                line_height: style.leading,
                text_align: style.text_align,
            },
        }
    }

    fn finish(mut self) -> LayoutConfig {
        if !self.frame.page.boxes.is_empty() || self.config.pages.is_empty() {
            self.config.pages.push(self.frame.page);
        }
        self.config
    }
}

/// Flow a story onto pages of the given size. The returned config carries
/// an empty title; callers fill it in.
pub fn paginate(
    story: &[Flowable],
    page_width: f32,
    page_height: f32,
    page_margin: f32,
    fonts: &FontManager,
) -> LayoutConfig {
    let mut paginator = Paginator {
        config: LayoutConfig {
            title: String::new(),
            page_width_pt: page_width,
            page_height_pt: page_height,
            pages: Vec::new(),
        },
        frame: Frame::new(0, false),
        margin: page_margin,
        frame_width: page_width - 2.0 * page_margin,
        frame_height: page_height - 2.0 * page_margin,
        fonts,
    };

    for flowable in story {
        match flowable {
            Flowable::PageBreak => {
                if !paginator.frame.at_top() {
                    paginator.next_page(false);
                }
            }
            Flowable::Spacer { height } => paginator.add_spacer(*height),
            Flowable::Paragraph { text, style } => paginator.add_paragraph(text, style),
        }
    }

    let config = paginator.finish();
    log::debug!("paginated {} flowables into {} pages", story.len(), config.pages.len());
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CM;

    const A4_W: f32 = 595.28;
    const A4_H: f32 = 841.89;
    const MARGIN: f32 = 2.0 * CM;

    fn run(story: &[Flowable]) -> LayoutConfig {
        paginate(story, A4_W, A4_H, MARGIN, &FontManager::default())
    }

    #[test]
    fn empty_story_yields_one_blank_page() {
        let config = run(&[]);
        assert_eq!(config.pages.len(), 1);
        assert!(config.pages[0].boxes.is_empty());
    }

    #[test]
    fn page_break_starts_new_page() {
        let normal = ParagraphStyle::normal();
        let story = vec![
            Flowable::paragraph("capa", normal),
            Flowable::PageBreak,
            Flowable::paragraph("corpo", normal),
        ];
        let config = run(&story);
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.pages[1].page_index, 1);
        assert_eq!(config.pages[1].boxes[0].y, MARGIN);
    }

    #[test]
    fn trailing_page_break_adds_no_blank_page() {
        let story = vec![
            Flowable::paragraph("só", ParagraphStyle::normal()),
            Flowable::PageBreak,
        ];
        assert_eq!(run(&story).pages.len(), 1);
    }

    #[test]
    fn spacer_moves_cursor_down() {
        let story = vec![
            Flowable::spacer(3.0 * CM),
            Flowable::paragraph("título", ParagraphStyle::title()),
        ];
        let config = run(&story);
        let lbox = &config.pages[0].boxes[0];
        assert!((lbox.y - (MARGIN + 3.0 * CM)).abs() < 0.01);
    }

    #[test]
    fn centered_text_is_offset() {
        let story = vec![Flowable::paragraph("Capa", ParagraphStyle::title())];
        let config = run(&story);
        let line = &config.pages[0].boxes[0].text.lines[0];
        assert!(line.x_offset > 100.0, "x_offset = {}", line.x_offset);
    }

    #[test]
    fn long_story_overflows_and_splits() {
        let normal = ParagraphStyle::normal();
        let story: Vec<Flowable> = (0..200)
            .flat_map(|i| {
                vec![
                    Flowable::paragraph(format!("Parágrafo {i}"), normal),
                    Flowable::spacer(0.3 * CM),
                ]
            })
            .collect();
        let config = run(&story);
        assert!(config.pages.len() > 1, "got {} pages", config.pages.len());

        let frame_bottom = A4_H - MARGIN;
        for page in &config.pages {
            for lbox in &page.boxes {
                assert!(lbox.bottom() <= frame_bottom + 0.01);
            }
            // Overflow pages start flush with the top margin.
            assert_eq!(page.boxes[0].y, MARGIN);
        }
    }

    #[test]
    fn paragraph_taller_than_remaining_space_is_split() {
        let normal = ParagraphStyle::normal();
        let words = "palavra ".repeat(3000);
        let story = vec![Flowable::paragraph(words, normal)];
        let config = run(&story);
        assert!(config.pages.len() >= 2);
        let total_lines: usize = config
            .pages
            .iter()
            .flat_map(|p| &p.boxes)
            .map(|b| b.text.lines.len())
            .sum();
        let expected = wrap_text(
            "palavra ".repeat(3000).trim_end(),
            normal.font_size,
            false,
            A4_W - 2.0 * MARGIN,
            &FontManager::default(),
        )
        .len();
        assert_eq!(total_lines, expected);
    }

    #[test]
    fn arrows_are_normalized_before_layout() {
        let story = vec![Flowable::paragraph(
            "3.1 Cliente → IA (WhatsApp)",
            ParagraphStyle::heading2(),
        )];
        let config = run(&story);
        assert_eq!(
            config.lines().collect::<Vec<_>>(),
            vec!["3.1 Cliente -> IA (WhatsApp)"]
        );
    }
}
