use crate::error::Result;
use crate::graphics::GraphicsContext;
use crate::text::{Font, TextContext};

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// A single page of a PDF document.
///
/// Swatch rectangles go to the graphics context and all text to the text
/// context; graphics are emitted first so labels are never covered.
///
/// # Example
///
/// ```rust
/// use swatchsheet::{Color, Font, Page};
///
/// let mut page = Page::from_inches(11.61, 15.24);
///
/// page.graphics()
///     .set_fill_color(Color::cmyk(1.0, 0.1, 0.02, 0.32))
///     .rect(100.0, 100.0, 44.0, 44.0)
///     .fill();
///
/// page.text()
///     .set_font(Font::Helvetica, 7.0)
///     .at(100.0, 91.0)
///     .write("C:0   M:0")?;
/// # Ok::<(), swatchsheet::SwatchError>(())
/// ```
#[derive(Clone)]
pub struct Page {
    width: f64,
    height: f64,
    graphics_context: GraphicsContext,
    text_context: TextContext,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            graphics_context: GraphicsContext::new(),
            text_context: TextContext::new(),
        }
    }

    /// Creates a page measured in inches.
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self::new(width * POINTS_PER_INCH, height * POINTS_PER_INCH)
    }

    /// Returns a mutable reference to the graphics context for drawing shapes.
    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics_context
    }

    /// Returns a mutable reference to the text context for adding text.
    pub fn text(&mut self) -> &mut TextContext {
        &mut self.text_context
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn used_fonts(&self) -> &[Font] {
        self.text_context.used_fonts()
    }

    /// The page's content stream, uncompressed.
    pub fn generate_content(&self) -> Result<Vec<u8>> {
        let mut final_content = Vec::new();

        final_content.extend_from_slice(&self.graphics_context.generate_operations()?);
        final_content.extend_from_slice(&self.text_context.generate_operations()?);

        Ok(final_content)
    }
}
