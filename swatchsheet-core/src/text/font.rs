/// Fonts a sheet can be typeset in.
///
/// The standard Type 1 fonts are available in every PDF reader and are not
/// embedded; their widths come from the built-in metric tables. A custom font
/// has no metrics here, so any attempt to measure or lay out text with it
/// fails the render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Font referenced by name only
    Custom(String),
}

impl Font {
    /// Get the PDF name for this font
    pub fn pdf_name(&self) -> String {
        match self {
            Font::Helvetica => "Helvetica".to_string(),
            Font::HelveticaBold => "Helvetica-Bold".to_string(),
            Font::Custom(name) => name.clone(),
        }
    }

    /// Create a custom font reference
    pub fn custom(name: impl Into<String>) -> Self {
        Font::Custom(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_font_pdf_names() {
        assert_eq!(Font::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(Font::HelveticaBold.pdf_name(), "Helvetica-Bold");
        assert_eq!(Font::custom("Roboto").pdf_name(), "Roboto");
    }

    #[test]
    fn test_font_hash() {
        let mut set = HashSet::new();
        set.insert(Font::Helvetica);
        set.insert(Font::HelveticaBold);
        set.insert(Font::Helvetica);
        assert_eq!(set.len(), 2);
    }
}
