//! Shared constants for card stack generation
//!
//! This module centralizes magic numbers and constants used throughout
//! the layout and rendering process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert inches to points
#[inline]
pub fn inch_to_pt(inch: f32) -> f32 {
    inch * POINTS_PER_INCH
}

// =============================================================================
// Default Geometry
// =============================================================================

/// Default page width (US Letter: 8.5" × 11"), in the default inch unit
pub const DEFAULT_PAGE_WIDTH_IN: f32 = 8.5;

/// Default page height (US Letter)
pub const DEFAULT_PAGE_HEIGHT_IN: f32 = 11.0;

/// Default card cell width in inches
pub const DEFAULT_CARD_WIDTH_IN: f32 = 3.5;

/// Default card cell height in inches
pub const DEFAULT_CARD_HEIGHT_IN: f32 = 3.5;

/// Default margin around each card cell in inches
pub const DEFAULT_MARGIN_IN: f32 = 0.25;

// =============================================================================
// Text
// =============================================================================

/// Default font size for card text (points)
pub const DEFAULT_FONT_SIZE_PT: f32 = 12.0;

/// Inner padding between a frame edge and its text block (points)
pub const BORDER_PAD_PT: f32 = 6.0;

/// Leading factor: baseline-to-baseline distance as a multiple of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Approximate character width ratio for built-in (non-embedded) fonts
pub const BUILTIN_CHAR_WIDTH_RATIO: f32 = 0.5;

// =============================================================================
// Page Decorations
// =============================================================================

/// Line width for frame borders (points)
pub const FRAME_BORDER_WIDTH: f32 = 0.5;

/// Line width for cut lines (points)
pub const CUT_LINE_WIDTH: f32 = 0.5;

/// Font size for the page number label (points)
pub const PAGE_LABEL_FONT_SIZE: f32 = 8.0;

/// Vertical offset of the page number label from the page bottom (points)
pub const PAGE_LABEL_OFFSET: f32 = 10.0;
