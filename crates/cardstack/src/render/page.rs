//! Rendering one physical page of the card grid
//!
//! Consumes a sequenced [`PageContent`], placing each slot's face into its
//! grid cell and emitting the page's decorations. All drawing is expressed
//! as printpdf ops; nothing is written to disk here.

use printpdf::{
    Op, PdfDocument, Pt, RawImage, TextItem, TextMatrix, XObjectTransform,
};

use crate::constants::BORDER_PAD_PT;
use crate::layout::{Frame, GridLayout, PageContent, cell_frame, vertical_padding};
use crate::types::{FaceContent, Result, StackError};

use super::font::StackFont;
use super::marks;

/// Page-level rendering parameters, resolved to points once per document
pub(crate) struct PageMetrics {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub font_size_pt: f32,
    pub show_frames: bool,
    pub page_labels: bool,
    pub horizontal_cut_lines: bool,
    pub vertical_cut_lines: bool,
}

/// Render one physical page into a list of ops.
///
/// `page_number` is the 1-based physical page index used for the label.
pub(crate) fn render_page(
    doc: &mut PdfDocument,
    page: &PageContent,
    grid: &GridLayout,
    metrics: &PageMetrics,
    font: &StackFont,
    page_number: usize,
) -> Result<Vec<Op>> {
    let mut ops = Vec::new();

    for (slot_index, slot) in page.slots.iter().enumerate() {
        let pos = grid.position_of(slot_index);
        let frame = cell_frame(grid, pos, metrics.page_height_pt);

        match &slot.content {
            FaceContent::Text(text) => {
                ops.extend(text_ops(text, &frame, font, metrics.font_size_pt));
            }
            FaceContent::Image(path) => {
                let card = slot.card.unwrap_or(0);
                ops.extend(image_ops(doc, path, &frame, card)?);
            }
            // An empty face still consumed its slot; only the border below
            FaceContent::Empty => {}
        }

        if metrics.show_frames {
            ops.extend(marks::frame_border_ops(&frame));
        }
    }

    if metrics.vertical_cut_lines || metrics.horizontal_cut_lines {
        ops.extend(marks::cut_line_ops(
            grid,
            metrics.page_width_pt,
            metrics.page_height_pt,
            metrics.horizontal_cut_lines,
            metrics.vertical_cut_lines,
        ));
    }

    if metrics.page_labels {
        ops.extend(marks::page_label_ops(
            page_number,
            page.face,
            metrics.page_width_pt,
        ));
    }

    Ok(ops)
}

/// Write a wrapped, vertically-centered text block into a frame
fn text_ops(text: &str, frame: &Frame, font: &StackFont, font_size_pt: f32) -> Vec<Op> {
    let measure = font.measure(font_size_pt);
    let wrap_width = frame.width - 2.0 * BORDER_PAD_PT;
    let lines = measure.wrap(text, wrap_width);
    let measured_height = lines.len() as f32 * measure.line_height();

    // Top padding is computed fresh for this frame and applied only here.
    let top_pad = vertical_padding(frame.height, measured_height, 0.0, 0.0, BORDER_PAD_PT);

    let x = frame.x + BORDER_PAD_PT;
    let mut baseline = frame.top() - top_pad - font_size_pt;

    let mut ops = vec![Op::StartTextSection];
    ops.push(font.size_op(font_size_pt));

    for line in lines {
        ops.push(Op::SetTextMatrix {
            matrix: TextMatrix::Translate(Pt(x), Pt(baseline)),
        });
        ops.push(font.write_op(vec![TextItem::Text(line)]));
        baseline -= measure.line_height();
    }

    ops.push(Op::EndTextSection);
    ops
}

/// Place an image filling the frame exactly (no padding).
///
/// A missing or undecodable image aborts the whole render, naming the
/// offending card's 1-based index.
fn image_ops(
    doc: &mut PdfDocument,
    path: &std::path::Path,
    frame: &Frame,
    card: usize,
) -> Result<Vec<Op>> {
    let bytes = std::fs::read(path).map_err(|e| StackError::Content {
        card,
        message: format!("cannot read image {:?}: {}", path, e),
    })?;

    let mut warnings = Vec::new();
    let image = RawImage::decode_from_bytes(&bytes, &mut warnings).map_err(|e| {
        StackError::Content {
            card,
            message: format!("cannot decode image {:?}: {}", path, e),
        }
    })?;

    let width_px = image.width.max(1) as f32;
    let height_px = image.height.max(1) as f32;
    let id = doc.add_image(&image);

    // At 72 dpi one pixel maps to one point, so the scale factors stretch
    // the bitmap to the frame dimensions exactly.
    Ok(vec![Op::UseXobject {
        id,
        transform: XObjectTransform {
            translate_x: Some(Pt(frame.x)),
            translate_y: Some(Pt(frame.y)),
            rotate: None,
            scale_x: Some(frame.width / width_px),
            scale_y: Some(frame.height / height_px),
            dpi: Some(72.0),
        },
    }])
}
