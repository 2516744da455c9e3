/// A device color as written into a content stream.
///
/// Channel values are fractions in 0.0-1.0, the range PDF operators expect.
/// Percent-based ink values live in [`crate::CmykColor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// CMYK color (cyan, magenta, yellow, key/black) with values from 0.0 to 1.0
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// Creates a CMYK color with values clamped to 0.0-1.0.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Color::Cmyk(
            c.clamp(0.0, 1.0),
            m.clamp(0.0, 1.0),
            y.clamp(0.0, 1.0),
            k.clamp(0.0, 1.0),
        )
    }

    /// Pure key black (CMYK 0,0,0,1), used for all text on the sheet.
    pub fn key_black() -> Self {
        Color::Cmyk(0.0, 0.0, 0.0, 1.0)
    }

    /// Content stream operator setting this as the non-stroking color.
    pub fn fill_operator(&self) -> String {
        match self {
            Color::Cmyk(c, m, y, k) => format!("{c:.4} {m:.4} {y:.4} {k:.4} k"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmyk_clamps() {
        assert_eq!(Color::cmyk(1.5, -0.2, 0.5, 0.0), Color::Cmyk(1.0, 0.0, 0.5, 0.0));
    }

    #[test]
    fn test_fill_operator() {
        assert_eq!(
            Color::cmyk(1.0, 0.1, 0.02, 0.32).fill_operator(),
            "1.0000 0.1000 0.0200 0.3200 k"
        );
        assert_eq!(Color::key_black().fill_operator(), "0.0000 0.0000 0.0000 1.0000 k");
    }
}
