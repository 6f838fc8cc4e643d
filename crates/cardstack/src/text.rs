//! Text measurement and word wrapping
//!
//! The renderer needs to know how tall a wrapped paragraph will be before
//! it can center it in a card frame. With an embedded font the width of a
//! line comes from per-glyph horizontal advances; for the built-in PDF
//! fonts there are no metrics available here, so a flat per-character
//! ratio approximates them.

use printpdf::ParsedFont;

use crate::constants::{BUILTIN_CHAR_WIDTH_RATIO, LINE_HEIGHT_FACTOR};

/// Width/height measurement for a single text style
pub struct TextMeasure<'a> {
    font: Option<&'a ParsedFont>,
    font_size_pt: f32,
}

impl<'a> TextMeasure<'a> {
    /// Measurement against a built-in font (approximate advances)
    pub fn builtin(font_size_pt: f32) -> Self {
        Self {
            font: None,
            font_size_pt,
        }
    }

    /// Measurement against an embedded font (exact glyph advances)
    pub fn embedded(font: &'a ParsedFont, font_size_pt: f32) -> Self {
        Self {
            font: Some(font),
            font_size_pt,
        }
    }

    /// Baseline-to-baseline distance
    pub fn line_height(&self) -> f32 {
        self.font_size_pt * LINE_HEIGHT_FACTOR
    }

    /// Width of a single unwrapped line in points
    pub fn line_width(&self, text: &str) -> f32 {
        match self.font {
            Some(font) => {
                let mut width = 0.0;
                for ch in text.chars() {
                    match font.lookup_glyph_index(ch as u32) {
                        Some(glyph_id) => {
                            let advance = font.get_horizontal_advance(glyph_id);
                            width += (advance as f32 / 1000.0) * self.font_size_pt;
                        }
                        None => width += self.font_size_pt * BUILTIN_CHAR_WIDTH_RATIO,
                    }
                }
                width
            }
            None => text.chars().count() as f32 * self.font_size_pt * BUILTIN_CHAR_WIDTH_RATIO,
        }
    }

    /// Greedy word wrap into lines no wider than `max_width_pt`.
    ///
    /// Newlines in the input are hard breaks. A single word wider than the
    /// limit gets a line of its own rather than being split mid-word.
    pub fn wrap(&self, text: &str, max_width_pt: f32) -> Vec<String> {
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();

            for word in paragraph.split_whitespace() {
                if current.is_empty() {
                    current = word.to_string();
                    continue;
                }

                let candidate = format!("{} {}", current, word);
                if self.line_width(&candidate) <= max_width_pt {
                    current = candidate;
                } else {
                    lines.push(current);
                    current = word.to_string();
                }
            }

            if !current.is_empty() {
                lines.push(current);
            }
        }

        lines
    }

    /// Height the text occupies after wrapping to `max_width_pt`
    pub fn wrapped_height(&self, text: &str, max_width_pt: f32) -> f32 {
        self.wrap(text, max_width_pt).len() as f32 * self.line_height()
    }
}
