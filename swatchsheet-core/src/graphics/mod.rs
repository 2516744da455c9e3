mod color;

pub use color::Color;

use crate::error::Result;
use std::fmt::Write;

/// Accumulates path and fill operators for a page's content stream.
#[derive(Clone)]
pub struct GraphicsContext {
    operations: String,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        writeln!(
            &mut self.operations,
            "{x:.2} {y:.2} {width:.2} {height:.2} re"
        )
        .unwrap();
        self
    }

    /// Fills the current path with the current fill color; nothing is stroked.
    pub fn fill(&mut self) -> &mut Self {
        self.operations.push_str("f\n");
        self
    }

    /// Color operators are not allowed inside a path object, so the operator
    /// is written immediately rather than deferred to `fill`.
    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        writeln!(&mut self.operations, "{}", color.fill_operator()).unwrap();
        self
    }

    pub(crate) fn generate_operations(&self) -> Result<Vec<u8>> {
        Ok(self.operations.as_bytes().to_vec())
    }

    /// Get the operations string
    pub fn operations(&self) -> &str {
        &self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphics_context_new() {
        let ctx = GraphicsContext::new();
        assert!(ctx.operations().is_empty());
    }

    #[test]
    fn test_rect() {
        let mut ctx = GraphicsContext::new();
        ctx.rect(143.96, 795.64, 44.0, 44.0);
        assert_eq!(ctx.operations(), "143.96 795.64 44.00 44.00 re\n");
    }

    #[test]
    fn test_fill_color_precedes_path() {
        let mut ctx = GraphicsContext::new();
        ctx.set_fill_color(Color::cmyk(1.0, 0.1, 0.02, 0.32))
            .rect(0.0, 0.0, 44.0, 44.0)
            .fill();

        assert_eq!(
            ctx.operations(),
            "1.0000 0.1000 0.0200 0.3200 k\n0.00 0.00 44.00 44.00 re\nf\n"
        );
    }

    #[test]
    fn test_fill_never_strokes() {
        let mut ctx = GraphicsContext::new();
        ctx.rect(0.0, 0.0, 10.0, 10.0).fill();
        let ops = ctx.operations();
        assert!(!ops.contains("\nS\n"));
        assert!(!ops.contains("\nB\n"));
        assert!(!ops.contains(" K\n"));
    }

    #[test]
    fn test_generate_operations() {
        let mut ctx = GraphicsContext::new();
        ctx.rect(1.0, 2.0, 3.0, 4.0);
        let bytes = ctx.generate_operations().unwrap();
        assert_eq!(bytes, b"1.00 2.00 3.00 4.00 re\n".to_vec());
    }
}
