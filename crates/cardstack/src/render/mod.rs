//! PDF rendering of a sequenced card stack
//!
//! This module orchestrates the render pass:
//! 1. Validate options and compute the grid
//! 2. Sequence cards onto front/back page pairs
//! 3. Emit one PDF page per page-content list, with decorations
//! 4. Assemble the document bytes in memory and write them once
//!
//! A failure anywhere aborts the run before the output file is touched.

mod font;
mod marks;
mod page;

use std::path::Path;

use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt};

use crate::layout::{compute_grid, sequence_cards};
use crate::options::StackOptions;
use crate::types::{Card, Result};

use font::resolve_font;
use page::PageMetrics;

/// Generate the card stack PDF and write it to `output_path`
pub async fn generate_pdf(
    cards: &[Card],
    options: &StackOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let cards = cards.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes =
        tokio::task::spawn_blocking(move || generate_pdf_bytes(&cards, &options)).await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Generate the card stack PDF fully in memory
pub fn generate_pdf_bytes(cards: &[Card], options: &StackOptions) -> Result<Vec<u8>> {
    options.validate()?;

    let page_width_pt = options.page_width_pt();
    let page_height_pt = options.page_height_pt();

    let grid = compute_grid(
        page_width_pt,
        page_height_pt,
        options.card_width_pt(),
        options.card_height_pt(),
        options.margin_pt(),
    )?;
    log::debug!(
        "grid: {}×{} cells, offsets {:.1}pt/{:.1}pt",
        grid.columns,
        grid.rows,
        grid.offset_x_pt,
        grid.offset_y_pt
    );

    // Sequencing runs to completion before any drawing starts.
    let pages = sequence_cards(cards, &grid);
    if pages.is_empty() {
        log::warn!("no cards in input; producing an empty document");
    }

    let mut doc = PdfDocument::new(&options.title);
    let stack_font = resolve_font(&mut doc, options)?;

    let metrics = PageMetrics {
        page_width_pt,
        page_height_pt,
        font_size_pt: options.font_size_pt,
        show_frames: options.show_frames,
        page_labels: options.page_labels,
        horizontal_cut_lines: options.horizontal_cut_lines,
        vertical_cut_lines: options.vertical_cut_lines,
    };

    for (index, page_content) in pages.iter().enumerate() {
        let ops = page::render_page(
            &mut doc,
            page_content,
            &grid,
            &metrics,
            &stack_font,
            index + 1,
        )?;
        doc.pages.push(PdfPage::new(
            Mm::from(Pt(page_width_pt)),
            Mm::from(Pt(page_height_pt)),
            ops,
        ));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}
