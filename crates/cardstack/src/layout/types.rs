//! Layout data types for the card grid
//!
//! These types represent the intermediate layout calculations between
//! grid geometry, card sequencing and PDF rendering.

use crate::types::{FaceContent, PageFace};

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Derived grid geometry for one page size and card size
///
/// Computed once per document; all dimensions in points.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Number of card columns that fit on a page
    pub columns: usize,
    /// Number of card rows that fit on a page
    pub rows: usize,
    /// Card cell width in points (content area, excluding margin)
    pub cell_width_pt: f32,
    /// Card cell height in points
    pub cell_height_pt: f32,
    /// Margin around each cell in points (applied on all four sides)
    pub margin_pt: f32,
    /// Horizontal offset that centers the grid on the page
    pub offset_x_pt: f32,
    /// Vertical offset that centers the grid on the page
    pub offset_y_pt: f32,
}

impl GridLayout {
    /// Total card slots on one physical page
    pub fn slots_per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Horizontal space one slot occupies (cell plus margins)
    pub fn slot_width_pt(&self) -> f32 {
        self.cell_width_pt + 2.0 * self.margin_pt
    }

    /// Vertical space one slot occupies
    pub fn slot_height_pt(&self) -> f32 {
        self.cell_height_pt + 2.0 * self.margin_pt
    }

    /// Grid position of a flat slot index (left-to-right, top-to-bottom)
    pub fn position_of(&self, slot: usize) -> GridPosition {
        GridPosition::new(slot / self.columns, slot % self.columns)
    }
}

/// A rectangular frame on the page, in points
///
/// `x`/`y` name the bottom-left corner (PDF coordinate convention).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// One grid slot's content on a physical page
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub content: FaceContent,
    /// 1-based index of the card this face came from (None for padding)
    pub card: Option<usize>,
}

impl Slot {
    pub fn padding() -> Self {
        Self {
            content: FaceContent::Empty,
            card: None,
        }
    }
}

/// All content assigned to one physical page
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    /// Whether this page carries fronts or backs
    pub face: PageFace,
    /// Index of the front/back page pair this page belongs to
    pub pair: usize,
    /// Fully-enumerated slots, `rows × columns` entries, left-to-right and
    /// top-to-bottom; trailing unused slots are explicit padding
    pub slots: Vec<Slot>,
}
