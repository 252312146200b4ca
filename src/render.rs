//! PDF renderer – takes a [`LayoutConfig`] and produces PDF bytes using
//! `printpdf` (v0.8 ops-based API).

use printpdf::*;

use crate::error::{Error, Result};
use crate::layout_config::*;

/// PDF points to millimetres.
const PT_TO_MM: f32 = 0.352778;

/// Render a LayoutConfig into PDF bytes.
pub fn render_pdf(config: &LayoutConfig) -> Result<Vec<u8>> {
    if config.page_width_pt <= 0.0 || config.page_height_pt <= 0.0 {
        return Err(Error::Render(format!(
            "invalid page size {}x{} pt",
            config.page_width_pt, config.page_height_pt
        )));
    }
    let page_w = Mm(config.page_width_pt * PT_TO_MM);
    let page_h = Mm(config.page_height_pt * PT_TO_MM);

    let mut doc = PdfDocument::new(&config.title);

    let mut pages = Vec::with_capacity(config.pages.len().max(1));
    for page_layout in &config.pages {
        let mut ops = Vec::new();
        for lbox in &page_layout.boxes {
            render_box(&mut ops, lbox, config.page_height_pt);
        }
        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    // Ensure at least one page.
    if pages.is_empty() {
        pages.push(PdfPage::new(page_w, page_h, Vec::new()));
    }

    doc.with_pages(pages);
    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("printpdf reported {} warnings while saving", warnings.len());
    }

    Ok(bytes)
}

/// Convert a UTF-8 string to raw Windows-1252 bytes then wrap in a String so
/// printpdf writes the bytes unchanged into the PDF stream (builtin fonts use
/// WinAnsiEncoding, so each glyph is one byte 0x00–0xFF).
fn to_winlatin(s: &str) -> String {
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80, // euro
            '\u{2026}' => 0x85, // ellipsis
            '\u{2018}' => 0x91, // left single quote
            '\u{2019}' => 0x92, // right single quote
            '\u{201C}' => 0x93, // left double quote
            '\u{201D}' => 0x94, // right double quote
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en-dash
            '\u{2014}' => 0x97, // em-dash
            '\u{00A0}' => 0x20, // non-breaking space -> space
            c if (c as u32) < 256 => c as u8,
            _ => b'?',
        })
        .collect();
    // SAFETY: intentionally non-UTF-8 for 0x80-0xFF; printpdf passes these
    // bytes straight to the PDF stream, decoded by WinAnsiEncoding.
    #[allow(unsafe_code)]
    unsafe {
        String::from_utf8_unchecked(bytes)
    }
}

/// Render one text box into PDF ops.
fn render_box(ops: &mut Vec<Op>, lbox: &LayoutBox, page_height: f32) {
    // PDF coordinate system: origin at bottom-left.
    // Our layout uses origin at top-left. Convert:
    let pdf_y = page_height - lbox.y;

    let text = &lbox.text;
    let font = if text.bold {
        BuiltinFont::HelveticaBold
    } else {
        BuiltinFont::Helvetica
    };

    for tline in &text.lines {
        if tline.text.is_empty() {
            continue;
        }
        let text_x = lbox.x + tline.x_offset;
        // Baseline ≈ top of line + ascender (approx 0.75 × font_size)
        let text_y = pdf_y - tline.y_offset - text.font_size * 0.75;

        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point {
                x: Pt(text_x),
                y: Pt(text_y),
            },
        });
        ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(text.font_size),
            font,
        });
        ops.push(Op::SetLineHeight {
            lh: Pt(text.line_height),
        });
        ops.push(Op::SetFillColor {
            col: Color::Rgb(Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                icc_profile: None,
            }),
        });
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(to_winlatin(&tline.text))],
            font,
        });
        ops.push(Op::EndTextSection);
    }
}
