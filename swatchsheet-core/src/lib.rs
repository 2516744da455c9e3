//! # swatchsheet
//!
//! Print-ready CMYK proof sheets: a base color, every combination of a
//! symmetric step on each ink channel, laid out as a labeled swatch grid on
//! a single PDF page.
//!
//! ## Features
//!
//! - **Variant generation**: 9 groups × 9 variants around a base color, each
//!   tagged with its per-channel offsets
//! - **Sheet layout**: centered title block, optional comment, 3×3 grid of
//!   3×3 swatch groups with delta labels
//! - **Deterministic PDF output**: device CMYK fills and standard Type1
//!   fonts, byte-identical for identical input
//! - **Reference tables**: lookup and search of named colors, plus
//!   conversion of vendor tables
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchsheet::{generate_variants, render_sheet, CmykColor, Deviation, Result};
//!
//! # fn main() -> Result<()> {
//! let base = CmykColor::new(100.0, 10.0, 2.0, 32.0);
//! let deviation = Deviation::new(5)?;
//!
//! let grid = generate_variants(base, deviation);
//! let document = render_sheet(&grid, base, deviation, Some("press check"), None)?;
//!
//! let bytes = document.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`variants`] - Variant grid generation
//! - [`sheet`] - Layout planning and rendering
//! - [`reference`] - Named reference colors
//! - [`document`], [`page`], [`graphics`], [`text`], [`writer`] - The PDF
//!   generation layer the sheet is drawn with

pub mod cmyk;
pub mod document;
pub mod error;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod reference;
pub mod sheet;
pub mod text;
pub mod variants;
pub mod writer;

pub use cmyk::CmykColor;
pub use document::{Document, DocumentMetadata};
pub use error::{Result, SwatchError};
pub use graphics::{Color, GraphicsContext};
pub use page::Page;
pub use reference::{convert_vendor_table, ReferenceColor, ReferenceTable};
pub use sheet::{
    render_sheet, PlacedSwatch, PlacedText, RenderRequest, SheetLayout, SheetPlan, SwatchSheet,
    DEFAULT_FILE_NAME,
};
pub use text::{Font, TextContext};
pub use variants::{
    generate_variants, ChannelDeltas, Deviation, Variant, VariantGrid, VariantGroup,
};
pub use writer::{PdfWriter, WriterConfig};

/// Current version of swatchsheet
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
