//! Text measurement for the builtin Helvetica faces.
//!
//! The report is set in the PDF base-14 Helvetica and Helvetica-Bold, which
//! need no embedding. Advances come from the Adobe AFM metrics (units of
//! 1/1000 em) so wrapping and centering match what the viewer draws.

use std::borrow::Cow;

/// Advances for ASCII 0x20..=0x7E, Helvetica.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advances for ASCII 0x20..=0x7E, Helvetica-Bold.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const UNITS_PER_EM: f32 = 1000.0;
const FALLBACK_ADVANCE: u16 = 556;

/// Metrics for the two builtin faces.
pub struct FontManager {
    regular: &'static [u16; 95],
    bold: &'static [u16; 95],
}

impl FontManager {
    pub fn new() -> Self {
        Self {
            regular: &HELVETICA,
            bold: &HELVETICA_BOLD,
        }
    }

    fn advance(&self, c: char, bold: bool) -> u16 {
        let table = if bold { self.bold } else { self.regular };
        let base = fold_accent(c);
        match base {
            ' '..='~' => table[base as usize - 0x20],
            '\u{2022}' => 350, // bullet
            '\u{2013}' => 556, // en-dash
            '\u{2014}' | '\u{2026}' => 1000,
            '\u{2018}' | '\u{2019}' => if bold { 278 } else { 222 },
            '\u{201C}' | '\u{201D}' => if bold { 500 } else { 333 },
            '\u{00A0}' => 278,
            '\u{00DF}' => 611, // sharp s
            _ => FALLBACK_ADVANCE,
        }
    }

    /// Measure the width of a string in points.
    pub fn measure_text_width(&self, text: &str, font_size: f32, bold: bool) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.advance(c, bold))).sum();
        units as f32 * font_size / UNITS_PER_EM
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an accented Latin-1 letter to its base letter. Accented glyphs share
/// the advance of the unaccented one in Helvetica.
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'À'..='Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è'..='ë' => 'e',
        'È'..='Ë' => 'E',
        'ì'..='ï' => 'i',
        'Ì'..='Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò'..='ö' => 'o',
        'Ò'..='Ö' => 'O',
        'ù'..='ü' => 'u',
        'Ù'..='Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}

/// Replace characters the WinAnsi-encoded builtin fonts cannot draw with an
/// ASCII spelling. Text is returned unchanged when nothing needs replacing.
pub fn normalize_text(text: &str) -> Cow<'_, str> {
    if !text.contains(&['\u{2192}', '\u{2190}'][..]) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('\u{2192}', "->").replace('\u{2190}', "<-"))
}

/// Word-wrap text to fit within `max_width` points. Returns a vec of lines.
pub fn wrap_text(
    text: &str,
    font_size: f32,
    bold: bool,
    max_width: f32,
    fonts: &FontManager,
) -> Vec<String> {
    if max_width <= 0.0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in &words {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };
            let w = fonts.measure_text_width(&candidate, font_size, bold);
            if w > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = word.to_string();
            } else {
                current_line = candidate;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
