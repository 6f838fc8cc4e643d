//! Page decorations: frame borders, cut-line guides, page labels

use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Op, Point, Pt, Rgb, TextItem,
};

use crate::constants::{
    CUT_LINE_WIDTH, FRAME_BORDER_WIDTH, PAGE_LABEL_FONT_SIZE, PAGE_LABEL_OFFSET,
};
use crate::layout::{Frame, GridLayout};
use crate::text::TextMeasure;
use crate::types::PageFace;

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

fn segment(x1: f32, y1: f32, x2: f32, y2: f32) -> Op {
    Op::DrawLine {
        line: Line {
            points: vec![point(x1, y1), point(x2, y2)],
            is_closed: false,
        },
    }
}

fn black() -> Color {
    Color::Rgb(Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        icc_profile: None,
    })
}

/// Stroke the outline of a card frame
pub(crate) fn frame_border_ops(frame: &Frame) -> Vec<Op> {
    vec![
        Op::SaveGraphicsState,
        Op::SetOutlineColor { col: black() },
        Op::SetOutlineThickness {
            pt: Pt(FRAME_BORDER_WIDTH),
        },
        Op::DrawLine {
            line: Line {
                points: vec![
                    point(frame.x, frame.y),
                    point(frame.right(), frame.y),
                    point(frame.right(), frame.top()),
                    point(frame.x, frame.top()),
                ],
                is_closed: true,
            },
        },
        Op::RestoreGraphicsState,
    ]
}

/// Cut-line guides at the card edges.
///
/// Vertical guides are drawn in pairs at the top and bottom centering
/// margins for both edges of every card column; horizontal guides likewise
/// at the left and right margins for every card row. Each guide runs from
/// the page edge to the card boundary so trimming with a straightedge
/// lines up two opposing marks.
pub(crate) fn cut_line_ops(
    grid: &GridLayout,
    page_width_pt: f32,
    page_height_pt: f32,
    horizontal: bool,
    vertical: bool,
) -> Vec<Op> {
    let mut ops = vec![
        Op::SaveGraphicsState,
        Op::SetOutlineColor { col: black() },
        Op::SetOutlineThickness {
            pt: Pt(CUT_LINE_WIDTH),
        },
    ];

    if vertical {
        let top_reach = grid.offset_y_pt + grid.margin_pt;
        for col in 0..grid.columns {
            let left = grid.offset_x_pt + col as f32 * grid.slot_width_pt() + grid.margin_pt;
            for x in [left, left + grid.cell_width_pt] {
                ops.push(segment(x, page_height_pt, x, page_height_pt - top_reach));
                ops.push(segment(x, 0.0, x, top_reach));
            }
        }
    }

    if horizontal {
        let side_reach = grid.offset_x_pt + grid.margin_pt;
        for row in 0..grid.rows {
            let top = page_height_pt
                - grid.offset_y_pt
                - row as f32 * grid.slot_height_pt()
                - grid.margin_pt;
            for y in [top, top - grid.cell_height_pt] {
                ops.push(segment(0.0, y, side_reach, y));
                ops.push(segment(page_width_pt, y, page_width_pt - side_reach, y));
            }
        }
    }

    ops.push(Op::RestoreGraphicsState);
    ops
}

/// Centered page number label, e.g. "3 (Front)"
pub(crate) fn page_label_ops(page_number: usize, face: PageFace, page_width_pt: f32) -> Vec<Op> {
    let text = format!("{} ({})", page_number, face.label());
    let width = TextMeasure::builtin(PAGE_LABEL_FONT_SIZE).line_width(&text);
    let x = (page_width_pt - width) / 2.0;

    vec![
        Op::StartTextSection,
        Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(PAGE_LABEL_FONT_SIZE),
        },
        Op::SetTextCursor {
            pos: Point {
                x: Pt(x),
                y: Pt(PAGE_LABEL_OFFSET),
            },
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text)],
            font: BuiltinFont::Helvetica,
        },
        Op::EndTextSection,
    ]
}
