//! Font resolution for card text
//!
//! The `font` option is either a built-in PDF font name or a path to a
//! .ttf/.otf file. Built-in fonts need no embedding but only have
//! approximate metrics; embedded fonts are parsed once and measured with
//! their real glyph advances.

use printpdf::{BuiltinFont, FontId, Op, ParsedFont, PdfDocument, Pt, TextItem};

use crate::options::StackOptions;
use crate::text::TextMeasure;
use crate::types::{Result, StackError};

/// The font the renderer writes card text with
pub(crate) enum StackFont {
    Builtin(BuiltinFont),
    Embedded { id: FontId, font: ParsedFont },
}

impl StackFont {
    /// Measurement handle for this font at the given size
    pub(crate) fn measure(&self, font_size_pt: f32) -> TextMeasure<'_> {
        match self {
            StackFont::Builtin(_) => TextMeasure::builtin(font_size_pt),
            StackFont::Embedded { font, .. } => TextMeasure::embedded(font, font_size_pt),
        }
    }

    /// Op that selects this font at the given size
    pub(crate) fn size_op(&self, font_size_pt: f32) -> Op {
        match self {
            StackFont::Builtin(font) => Op::SetFontSizeBuiltinFont {
                font: font.clone(),
                size: Pt(font_size_pt),
            },
            StackFont::Embedded { id, .. } => Op::SetFontSize {
                font: id.clone(),
                size: Pt(font_size_pt),
            },
        }
    }

    /// Op that writes a text run in this font
    pub(crate) fn write_op(&self, items: Vec<TextItem>) -> Op {
        match self {
            StackFont::Builtin(font) => Op::WriteTextBuiltinFont {
                items,
                font: font.clone(),
            },
            StackFont::Embedded { id, .. } => Op::WriteText {
                items,
                font: id.clone(),
            },
        }
    }
}

/// Resolve the configured font, embedding a font file when one is given
pub(crate) fn resolve_font(doc: &mut PdfDocument, options: &StackOptions) -> Result<StackFont> {
    let spec = options.font.trim();
    let lower = spec.to_ascii_lowercase();

    if lower.ends_with(".ttf") || lower.ends_with(".otf") {
        let bytes = std::fs::read(spec)?;
        let mut warnings = Vec::new();
        let font = ParsedFont::from_bytes(&bytes, 0, &mut warnings)
            .ok_or_else(|| StackError::Pdf(format!("Failed to parse font file {:?}", spec)))?;
        let id = doc.add_font(&font);
        log::debug!("embedded font {:?}", spec);
        return Ok(StackFont::Embedded { id, font });
    }

    let builtin = match lower.as_str() {
        "helvetica" => BuiltinFont::Helvetica,
        "helvetica-bold" => BuiltinFont::HelveticaBold,
        "helvetica-oblique" => BuiltinFont::HelveticaOblique,
        "times" | "times-roman" => BuiltinFont::TimesRoman,
        "times-bold" => BuiltinFont::TimesBold,
        "times-italic" => BuiltinFont::TimesItalic,
        "courier" => BuiltinFont::Courier,
        "courier-bold" => BuiltinFont::CourierBold,
        "symbol" => BuiltinFont::Symbol,
        other => {
            return Err(StackError::Config(format!(
                "Unknown font {:?}: expected a built-in font name or a .ttf/.otf path",
                other
            )));
        }
    };

    Ok(StackFont::Builtin(builtin))
}
