mod encoding;
mod font;
mod metrics;

pub use encoding::TextEncoding;
pub use font::Font;
pub use metrics::{font_metrics, measure_text, FontMetrics};

use crate::error::Result;
use crate::graphics::Color;
use std::fmt::Write;

/// Accumulates text objects (`BT ... ET`) for a page's content stream.
#[derive(Clone)]
pub struct TextContext {
    operations: String,
    current_font: Font,
    font_size: f64,
    position: (f64, f64),
    used_fonts: Vec<Font>,
}

impl Default for TextContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            current_font: Font::Helvetica,
            font_size: 12.0,
            position: (0.0, 0.0),
            used_fonts: Vec::new(),
        }
    }

    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.current_font = font;
        self.font_size = size;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        writeln!(&mut self.operations, "{}", color.fill_operator()).unwrap();
        self
    }

    /// Moves the baseline origin of the next run.
    pub fn at(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = (x, y);
        self
    }

    /// Writes one run at the current position.
    ///
    /// Fails if the current font has no metrics, since such a font cannot be
    /// referenced from the page resources either.
    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        font_metrics(&self.current_font)?;
        if !self.used_fonts.contains(&self.current_font) {
            self.used_fonts.push(self.current_font.clone());
        }

        self.operations.push_str("BT\n");

        writeln!(
            &mut self.operations,
            "/{} {} Tf",
            self.current_font.pdf_name(),
            self.font_size
        )
        .unwrap();

        writeln!(
            &mut self.operations,
            "{:.2} {:.2} Td",
            self.position.0, self.position.1
        )
        .unwrap();

        writeln!(
            &mut self.operations,
            "{} Tj",
            TextEncoding::WinAnsiEncoding.literal_string(text)
        )
        .unwrap();

        self.operations.push_str("ET\n");

        Ok(self)
    }

    /// Fonts referenced so far, in first-use order.
    pub fn used_fonts(&self) -> &[Font] {
        &self.used_fonts
    }

    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub(crate) fn generate_operations(&self) -> Result<Vec<u8>> {
        Ok(self.operations.as_bytes().to_vec())
    }
}
