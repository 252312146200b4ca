//! Native renderer – ties together the story builder, pagination and the
//! printpdf backend, and writes the report to disk.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::content::{
    Block, TitlePage, DOCUMENT_TITLE, HTML_PATH, MARKDOWN_PATH, PDF_PATH, PLAN_CONTENT,
    TITLE_PAGE,
};
use crate::error::Result;
use crate::fonts::FontManager;
use crate::layout_config::LayoutConfig;
use crate::pagination::paginate;
use crate::render::render_pdf;
use crate::story::build_story;
use crate::style::CM;

/// Configuration for the native renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Document title embedded in the PDF metadata.
    pub title: String,
    /// Where the PDF is written (default: `docs/planejamento-bi-ia.pdf`).
    pub output_path: PathBuf,
    /// Page width in points (default: A4 = 595.28).
    pub page_width: f32,
    /// Page height in points (default: A4 = 841.89).
    pub page_height: f32,
    /// Margin on all four sides in points (default: 2 cm).
    pub margin: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            output_path: PathBuf::from(PDF_PATH),
            page_width: 595.28,
            page_height: 841.89,
            margin: 2.0 * CM,
        }
    }
}

/// What [`generate_report`] produced.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub output_path: PathBuf,
    pub bytes: usize,
    pub pages: usize,
}

/// Lay out a cover page and content table without rendering. Useful for
/// inspecting page breaks.
pub fn compute_layout_config(
    title_page: &TitlePage,
    blocks: &[Block],
    config: &RenderConfig,
) -> LayoutConfig {
    let story = build_story(title_page, blocks);
    let fonts = FontManager::default();
    let mut layout = paginate(
        &story,
        config.page_width,
        config.page_height,
        config.margin,
        &fonts,
    );
    layout.title = config.title.clone();
    layout
}

/// Full pipeline for arbitrary content: story → pages → PDF bytes.
pub fn render_document(
    title_page: &TitlePage,
    blocks: &[Block],
    config: &RenderConfig,
) -> Result<(Vec<u8>, LayoutConfig)> {
    let layout = compute_layout_config(title_page, blocks, config);
    let bytes = render_pdf(&layout)?;
    Ok((bytes, layout))
}

/// Render the planning report into memory.
pub fn render_report(config: &RenderConfig) -> Result<(Vec<u8>, LayoutConfig)> {
    render_document(&TITLE_PAGE, PLAN_CONTENT, config)
}

/// Render the planning report and write it to `config.output_path`,
/// creating the parent directory if necessary.
pub fn generate_report(config: &RenderConfig) -> Result<RenderSummary> {
    let (bytes, layout) = render_report(config)?;

    let output = &config.output_path;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, &bytes)?;
    log::info!(
        "wrote '{}' ({} bytes, {} pages)",
        output.display(),
        bytes.len(),
        layout.pages.len()
    );

    Ok(RenderSummary {
        output_path: output.clone(),
        bytes: bytes.len(),
        pages: layout.pages.len(),
    })
}

/// Manual alternatives shown when native generation fails.
pub fn write_fallback_guidance(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "💡 Alternativas:")?;
    writeln!(out, "1. Abra {HTML_PATH} no navegador")?;
    writeln!(out, "2. Use Ctrl+P (ou Cmd+P) > Salvar como PDF")?;
    writeln!(out, "3. Ou leia o arquivo Markdown: {MARKDOWN_PATH}")?;
    Ok(())
}
