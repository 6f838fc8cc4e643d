use crate::constants::*;
use crate::types::*;
use crate::xml::PageConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement unit for page and card dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    #[default]
    Inches,
    Millimeters,
    Points,
}

impl Unit {
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
            Unit::Points => "pt",
        }
    }

    pub fn to_pt(&self, value: f32) -> f32 {
        match self {
            Unit::Inches => inch_to_pt(value),
            Unit::Millimeters => mm_to_pt(value),
            Unit::Points => value,
        }
    }
}

/// Card stack generation configuration
///
/// Dimensional fields are expressed in `unit`; font sizes are always points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StackOptions {
    // Page geometry
    pub page_width: f32,
    pub page_height: f32,
    pub unit: Unit,

    // Card cell geometry (fixed for the whole document)
    pub card_width: f32,
    pub card_height: f32,
    pub margin: f32,

    // Text style
    /// Built-in font name ("Helvetica", "Times", "Courier") or a path to a
    /// .ttf/.otf file to embed
    pub font: String,
    pub font_size_pt: f32,

    // Page decorations
    pub show_frames: bool,
    pub page_labels: bool,
    pub horizontal_cut_lines: bool,
    pub vertical_cut_lines: bool,

    // Document metadata
    pub title: String,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH_IN,
            page_height: DEFAULT_PAGE_HEIGHT_IN,
            unit: Unit::Inches,
            card_width: DEFAULT_CARD_WIDTH_IN,
            card_height: DEFAULT_CARD_HEIGHT_IN,
            margin: DEFAULT_MARGIN_IN,
            font: "Helvetica".to_string(),
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            show_frames: false,
            page_labels: false,
            horizontal_cut_lines: false,
            vertical_cut_lines: false,
            title: "Card Stack".to_string(),
        }
    }
}

impl StackOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| StackError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StackError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Overlay the overrides from a document's pageConfig section.
    ///
    /// Dimensions in the document are interpreted in the already-configured
    /// unit; they never change the unit itself.
    pub fn apply_page_config(&mut self, config: &PageConfig) {
        if let Some(w) = config.page_width {
            self.page_width = w;
        }
        if let Some(h) = config.page_height {
            self.page_height = h;
        }
        if let Some(font) = &config.font {
            self.font = font.clone();
        }
        if let Some(size) = config.font_size_pt {
            self.font_size_pt = size;
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(StackError::Config(format!(
                "Page dimensions must be positive (got {} × {} {})",
                self.page_width,
                self.page_height,
                self.unit.name()
            )));
        }
        if self.card_width <= 0.0 || self.card_height <= 0.0 {
            return Err(StackError::Config(format!(
                "Card dimensions must be positive (got {} × {} {})",
                self.card_width,
                self.card_height,
                self.unit.name()
            )));
        }
        if self.margin < 0.0 {
            return Err(StackError::Config(format!(
                "Margin must not be negative (got {} {})",
                self.margin,
                self.unit.name()
            )));
        }
        if self.font_size_pt <= 0.0 {
            return Err(StackError::Config(format!(
                "Font size must be positive (got {} pt)",
                self.font_size_pt
            )));
        }
        Ok(())
    }

    /// Page width in points
    pub fn page_width_pt(&self) -> f32 {
        self.unit.to_pt(self.page_width)
    }

    /// Page height in points
    pub fn page_height_pt(&self) -> f32 {
        self.unit.to_pt(self.page_height)
    }

    /// Card cell width in points
    pub fn card_width_pt(&self) -> f32 {
        self.unit.to_pt(self.card_width)
    }

    /// Card cell height in points
    pub fn card_height_pt(&self) -> f32 {
        self.unit.to_pt(self.card_height)
    }

    /// Margin in points
    pub fn margin_pt(&self) -> f32 {
        self.unit.to_pt(self.margin)
    }
}
