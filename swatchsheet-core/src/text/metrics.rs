use crate::error::{Result, SwatchError};
use crate::text::{Font, TextEncoding};
use std::collections::HashMap;

/// Character width information for standard PDF fonts
/// All widths are in 1/1000 of a unit (font size 1.0)
#[derive(Clone)]
pub struct FontMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl FontMetrics {
    fn new(default_width: u16) -> Self {
        Self {
            widths: HashMap::new(),
            default_width,
        }
    }

    fn with_widths(mut self, widths: &[(char, u16)]) -> Self {
        for &(ch, width) in widths {
            self.widths.insert(ch, width);
        }
        self
    }

    pub fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

lazy_static::lazy_static! {
    static ref FONT_METRICS: HashMap<Font, FontMetrics> = {
        let mut metrics = HashMap::new();

        // Helvetica
        metrics.insert(Font::Helvetica, FontMetrics::new(556).with_widths(&[
            (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
            ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
            (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
            ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
            ('8', 556), ('9', 556), (':', 278), (';', 278), ('<', 584), ('=', 584),
            ('>', 584), ('?', 556), ('@', 1015), ('A', 667), ('B', 667), ('C', 722),
            ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
            ('J', 500), ('K', 667), ('L', 556), ('M', 833), ('N', 722), ('O', 778),
            ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
            ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 278),
            ('\\', 278), (']', 278), ('^', 469), ('_', 556), ('`', 333), ('a', 556),
            ('b', 556), ('c', 500), ('d', 556), ('e', 556), ('f', 278), ('g', 556),
            ('h', 556), ('i', 222), ('j', 222), ('k', 500), ('l', 222), ('m', 833),
            ('n', 556), ('o', 556), ('p', 556), ('q', 556), ('r', 333), ('s', 500),
            ('t', 278), ('u', 556), ('v', 500), ('w', 722), ('x', 500), ('y', 500),
            ('z', 500), ('{', 334), ('|', 260), ('}', 334), ('~', 584),
        ]).with_widths(&[
            // Windows-1252 extras
            ('\u{20AC}', 556), ('\u{201A}', 222), ('\u{0192}', 556), ('\u{201E}', 333),
            ('\u{2026}', 1000), ('\u{2020}', 556), ('\u{2021}', 556), ('\u{02C6}', 333),
            ('\u{2030}', 1000), ('\u{0160}', 667), ('\u{2039}', 333), ('\u{0152}', 1000),
            ('\u{017D}', 611), ('\u{2018}', 222), ('\u{2019}', 222), ('\u{201C}', 333),
            ('\u{201D}', 333), ('\u{2022}', 350), ('\u{2013}', 556), ('\u{2014}', 1000),
            ('\u{02DC}', 333), ('\u{2122}', 1000), ('\u{0161}', 500), ('\u{203A}', 333),
            ('\u{0153}', 944), ('\u{017E}', 500), ('\u{0178}', 667),
            // Latin-1 Supplement
            ('\u{A0}', 278), ('¡', 333), ('¢', 556), ('£', 556), ('¤', 556), ('¥', 556),
            ('¦', 260), ('§', 556), ('¨', 333), ('©', 737), ('ª', 370), ('«', 556),
            ('¬', 584), ('\u{AD}', 333), ('®', 737), ('¯', 333), ('°', 400), ('±', 584),
            ('²', 333), ('³', 333), ('´', 333), ('µ', 556), ('¶', 537), ('·', 278),
            ('¸', 333), ('¹', 333), ('º', 365), ('»', 556), ('¼', 834), ('½', 834),
            ('¾', 834), ('¿', 611), ('À', 667), ('Á', 667), ('Â', 667), ('Ã', 667),
            ('Ä', 667), ('Å', 667), ('Æ', 1000), ('Ç', 722), ('È', 667), ('É', 667),
            ('Ê', 667), ('Ë', 667), ('Ì', 278), ('Í', 278), ('Î', 278), ('Ï', 278),
            ('Ð', 722), ('Ñ', 722), ('Ò', 778), ('Ó', 778), ('Ô', 778), ('Õ', 778),
            ('Ö', 778), ('×', 584), ('Ø', 778), ('Ù', 722), ('Ú', 722), ('Û', 722),
            ('Ü', 722), ('Ý', 667), ('Þ', 667), ('ß', 611), ('à', 556), ('á', 556),
            ('â', 556), ('ã', 556), ('ä', 556), ('å', 556), ('æ', 889), ('ç', 500),
            ('è', 556), ('é', 556), ('ê', 556), ('ë', 556), ('ì', 278), ('í', 278),
            ('î', 278), ('ï', 278), ('ð', 556), ('ñ', 556), ('ò', 556), ('ó', 556),
            ('ô', 556), ('õ', 556), ('ö', 556), ('÷', 584), ('ø', 611), ('ù', 556),
            ('ú', 556), ('û', 556), ('ü', 556), ('ý', 500), ('þ', 556), ('ÿ', 500),
        ]));

        // Helvetica Bold
        metrics.insert(Font::HelveticaBold, FontMetrics::new(611).with_widths(&[
            (' ', 278), ('!', 333), ('"', 474), ('#', 556), ('$', 556), ('%', 889),
            ('&', 722), ('\'', 238), ('(', 333), (')', 333), ('*', 389), ('+', 584),
            (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
            ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
            ('8', 556), ('9', 556), (':', 333), (';', 333), ('<', 584), ('=', 584),
            ('>', 584), ('?', 611), ('@', 975), ('A', 722), ('B', 722), ('C', 722),
            ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
            ('J', 556), ('K', 722), ('L', 611), ('M', 833), ('N', 722), ('O', 778),
            ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
            ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 333),
            ('\\', 278), (']', 333), ('^', 584), ('_', 556), ('`', 333), ('a', 556),
            ('b', 611), ('c', 556), ('d', 611), ('e', 556), ('f', 333), ('g', 611),
            ('h', 611), ('i', 278), ('j', 278), ('k', 556), ('l', 278), ('m', 889),
            ('n', 611), ('o', 611), ('p', 611), ('q', 611), ('r', 389), ('s', 556),
            ('t', 333), ('u', 611), ('v', 556), ('w', 778), ('x', 556), ('y', 556),
            ('z', 500), ('{', 389), ('|', 280), ('}', 389), ('~', 584),
        ]).with_widths(&[
            // Windows-1252 extras
            ('\u{20AC}', 556), ('\u{201A}', 278), ('\u{0192}', 556), ('\u{201E}', 500),
            ('\u{2026}', 1000), ('\u{2020}', 556), ('\u{2021}', 556), ('\u{02C6}', 333),
            ('\u{2030}', 1000), ('\u{0160}', 667), ('\u{2039}', 333), ('\u{0152}', 1000),
            ('\u{017D}', 611), ('\u{2018}', 278), ('\u{2019}', 278), ('\u{201C}', 500),
            ('\u{201D}', 500), ('\u{2022}', 350), ('\u{2013}', 556), ('\u{2014}', 1000),
            ('\u{02DC}', 333), ('\u{2122}', 1000), ('\u{0161}', 556), ('\u{203A}', 333),
            ('\u{0153}', 944), ('\u{017E}', 500), ('\u{0178}', 667),
            // Latin-1 Supplement
            ('\u{A0}', 278), ('¡', 333), ('¢', 556), ('£', 556), ('¤', 556), ('¥', 556),
            ('¦', 280), ('§', 556), ('¨', 333), ('©', 737), ('ª', 370), ('«', 556),
            ('¬', 584), ('\u{AD}', 333), ('®', 737), ('¯', 333), ('°', 400), ('±', 584),
            ('²', 333), ('³', 333), ('´', 333), ('µ', 611), ('¶', 556), ('·', 278),
            ('¸', 333), ('¹', 333), ('º', 365), ('»', 556), ('¼', 834), ('½', 834),
            ('¾', 834), ('¿', 611), ('À', 722), ('Á', 722), ('Â', 722), ('Ã', 722),
            ('Ä', 722), ('Å', 722), ('Æ', 1000), ('Ç', 722), ('È', 667), ('É', 667),
            ('Ê', 667), ('Ë', 667), ('Ì', 278), ('Í', 278), ('Î', 278), ('Ï', 278),
            ('Ð', 722), ('Ñ', 722), ('Ò', 778), ('Ó', 778), ('Ô', 778), ('Õ', 778),
            ('Ö', 778), ('×', 584), ('Ø', 778), ('Ù', 722), ('Ú', 722), ('Û', 722),
            ('Ü', 722), ('Ý', 667), ('Þ', 667), ('ß', 611), ('à', 556), ('á', 556),
            ('â', 556), ('ã', 556), ('ä', 556), ('å', 556), ('æ', 889), ('ç', 556),
            ('è', 556), ('é', 556), ('ê', 556), ('ë', 556), ('ì', 278), ('í', 278),
            ('î', 278), ('ï', 278), ('ð', 611), ('ñ', 611), ('ò', 611), ('ó', 611),
            ('ô', 611), ('õ', 611), ('ö', 611), ('÷', 584), ('ø', 611), ('ù', 611),
            ('ú', 611), ('û', 611), ('ü', 611), ('ý', 556), ('þ', 611), ('ÿ', 556),
        ]));

        metrics
    };
}

/// Width table for `font`.
///
/// Fails for fonts without built-in metrics; a sheet cannot be laid out
/// without them.
pub fn font_metrics(font: &Font) -> Result<&'static FontMetrics> {
    FONT_METRICS
        .get(font)
        .ok_or_else(|| SwatchError::FontError(format!("no metrics for font '{}'", font.pdf_name())))
}

/// Measure the width of a text string in a given font and size
///
/// Characters the WinAnsi encoding cannot represent are measured as the `?`
/// that ends up on the page.
pub fn measure_text(text: &str, font: &Font, font_size: f64) -> Result<f64> {
    let metrics = font_metrics(font)?;
    let encoding = TextEncoding::WinAnsiEncoding;

    let width_units: u32 = text
        .chars()
        .map(|ch| metrics.char_width(encoding.displayed_char(ch)) as u32)
        .sum();

    Ok((width_units as f64 / 1000.0) * font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_metrics_with_widths() {
        let widths = [('A', 600), ('B', 700), ('C', 650)];
        let metrics = FontMetrics::new(500).with_widths(&widths);

        assert_eq!(metrics.char_width('A'), 600);
        assert_eq!(metrics.char_width('B'), 700);
        assert_eq!(metrics.char_width('Z'), 500); // Default for unmapped
    }

    #[test]
    fn test_measure_text_helvetica() {
        let width = measure_text("Hello", &Font::Helvetica, 12.0).unwrap();

        // Helvetica "H" = 722, "e" = 556, "l" = 222, "l" = 222, "o" = 556
        // Total = 2278 units = 2.278 at size 1.0, * 12.0 = 27.336
        assert!((width - 27.336).abs() < 0.01);
    }

    #[test]
    fn test_measure_delta_label() {
        // C=722 :=278 0=556 spaces=3*278 M=833 :=278 0=556 -> 4057 units
        let width = measure_text("C:0   M:0", &Font::Helvetica, 7.0).unwrap();
        assert!((width - 28.399).abs() < 1e-9);
    }

    #[test]
    fn test_measure_text_bold_is_wider() {
        let regular = measure_text("CMYK 100,10,2,32", &Font::Helvetica, 18.0).unwrap();
        let bold = measure_text("CMYK 100,10,2,32", &Font::HelveticaBold, 18.0).unwrap();
        assert!(bold > regular);
    }

    fn assert_width(text: &str, font: Font, expected: f64) {
        let width = measure_text(text, &font, 10.0).unwrap();
        assert!((width - expected).abs() < 1e-9, "{text}: {width}");
    }

    #[test]
    fn test_measure_latin1_characters() {
        // Ø=778 against the 556 default, é=556 bold against the 611 default
        assert_width("Ø", Font::Helvetica, 7.78);
        assert_width("é", Font::HelveticaBold, 5.56);
        assert_width("Æ", Font::Helvetica, 10.0);
    }

    #[test]
    fn test_measure_windows_1252_extras() {
        assert_width("\u{2014}", Font::Helvetica, 10.0);
        assert_width("\u{201C}", Font::HelveticaBold, 5.0);
        assert_width("\u{2022}", Font::Helvetica, 3.5);
    }

    #[test]
    fn test_every_encodable_character_has_a_width() {
        let encoding = TextEncoding::WinAnsiEncoding;
        for font in [Font::Helvetica, Font::HelveticaBold] {
            let metrics = font_metrics(&font).unwrap();
            for code in (0x20u32..=0x7E).chain(0xA0..=0xFF) {
                let ch = char::from_u32(code).unwrap();
                assert!(encoding.encode_char(ch).is_some());
                assert!(metrics.widths.contains_key(&ch), "{font:?} {ch:?}");
            }
        }
    }

    #[test]
    fn test_measure_text_empty_string() {
        assert_eq!(measure_text("", &Font::Helvetica, 12.0).unwrap(), 0.0);
    }

    #[test]
    fn test_unencodable_characters_measure_as_question_mark() {
        let cyrillic = measure_text("Шаг", &Font::Helvetica, 10.0).unwrap();
        let marks = measure_text("???", &Font::Helvetica, 10.0).unwrap();
        assert_eq!(cyrillic, marks);
    }

    #[test]
    fn test_custom_font_has_no_metrics() {
        let result = measure_text("Hello", &Font::custom("Roboto"), 12.0);
        match result {
            Err(SwatchError::FontError(msg)) => assert!(msg.contains("Roboto")),
            _ => panic!("Expected FontError"),
        }
    }

    #[test]
    fn test_font_size_scaling() {
        let small = measure_text("Pantone", &Font::HelveticaBold, 10.0).unwrap();
        let large = measure_text("Pantone", &Font::HelveticaBold, 20.0).unwrap();
        assert!((large - 2.0 * small).abs() < 1e-9);
    }
}
