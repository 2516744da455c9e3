//! The printable swatch sheet.
//!
//! Rendering happens in two steps: [`SheetLayout::plan`] computes every
//! position, then [`SheetPlan::draw`] emits the content stream. Nothing is
//! drawn unless planning succeeds, so a failed render never leaves a
//! partial page behind.

mod layout;
mod plan;

pub use layout::{SheetLayout, TextStyle};
pub use plan::{PlacedSwatch, PlacedText, SheetPlan};

use crate::cmyk::CmykColor;
use crate::document::Document;
use crate::error::Result;
use crate::page::Page;
use crate::variants::{generate_variants, Deviation, VariantGrid};
use crate::writer::WriterConfig;

/// Name of the file offered for download.
pub const DEFAULT_FILE_NAME: &str = "cmyk_variants.pdf";

/// Renders variant grids with a fixed layout.
#[derive(Debug, Clone, Default)]
pub struct SwatchSheet {
    layout: SheetLayout,
}

impl SwatchSheet {
    pub fn new(layout: SheetLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Builds a one-page document for `grid`.
    pub fn render(
        &self,
        grid: &VariantGrid,
        base: CmykColor,
        deviation: Deviation,
        comment: Option<&str>,
        title_name: Option<&str>,
    ) -> Result<Document> {
        let plan = self.layout.plan(grid, base, comment, title_name)?;

        let mut page = Page::new(self.layout.page_width, self.layout.page_height);
        plan.draw(&mut page)?;

        let mut document = Document::new();
        let title = plan
            .titles()
            .first()
            .map(|line| line.text.clone())
            .unwrap_or_else(|| base.plain_title());
        document.set_title(title);
        document.set_subject(format!("CMYK variants, deviation {deviation}"));
        document.add_page(page);

        tracing::debug!(deviation = deviation.value(), "rendered swatch sheet");
        Ok(document)
    }
}

/// Renders `grid` with the default layout.
pub fn render_sheet(
    grid: &VariantGrid,
    base: CmykColor,
    deviation: Deviation,
    comment: Option<&str>,
    title_name: Option<&str>,
) -> Result<Document> {
    SwatchSheet::default().render(grid, base, deviation, comment, title_name)
}

/// Everything needed to produce one sheet.
///
/// ```rust
/// use swatchsheet::{CmykColor, Deviation, RenderRequest};
///
/// let pdf = RenderRequest::new(CmykColor::new(100.0, 10.0, 2.0, 32.0), Deviation::new(5)?)
///     .with_comment("press check")
///     .render()?;
/// assert!(pdf.starts_with(b"%PDF-1.7"));
/// # Ok::<(), swatchsheet::SwatchError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub base: CmykColor,
    pub deviation: Deviation,
    pub comment: Option<String>,
    /// Reference color name; used as the title when present.
    pub reference_name: Option<String>,
}

impl RenderRequest {
    pub fn new(base: CmykColor, deviation: Deviation) -> Self {
        Self {
            base,
            deviation,
            comment: None,
            reference_name: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_reference_name(mut self, name: impl Into<String>) -> Self {
        self.reference_name = Some(name.into());
        self
    }

    pub fn document(&self) -> Result<Document> {
        let grid = generate_variants(self.base, self.deviation);
        render_sheet(
            &grid,
            self.base,
            self.deviation,
            self.comment.as_deref(),
            self.reference_name.as_deref(),
        )
    }

    /// Renders the sheet to PDF bytes with the default writer options.
    pub fn render(&self) -> Result<Vec<u8>> {
        self.render_with_config(WriterConfig::default())
    }

    pub fn render_with_config(&self, config: WriterConfig) -> Result<Vec<u8>> {
        let bytes = self.document()?.to_bytes_with_config(config)?;
        tracing::debug!(bytes = bytes.len(), "serialized swatch sheet");
        Ok(bytes)
    }
}
