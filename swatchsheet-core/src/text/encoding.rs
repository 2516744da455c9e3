/// Single-byte encoding used for every text run on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    WinAnsiEncoding,
}

impl TextEncoding {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            TextEncoding::WinAnsiEncoding => "WinAnsiEncoding",
        }
    }

    /// Encodes one character, `None` when the encoding has no code for it.
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        match self {
            TextEncoding::WinAnsiEncoding => match ch as u32 {
                // ASCII range
                0x00..=0x7F => Some(ch as u8),
                // Latin-1 Supplement that overlaps with Windows-1252
                0xA0..=0xFF => Some(ch as u8),
                0x20AC => Some(0x80), // Euro sign
                0x201A => Some(0x82), // Single low quotation mark
                0x0192 => Some(0x83), // Latin small letter f with hook
                0x201E => Some(0x84), // Double low quotation mark
                0x2026 => Some(0x85), // Horizontal ellipsis
                0x2020 => Some(0x86), // Dagger
                0x2021 => Some(0x87), // Double dagger
                0x02C6 => Some(0x88), // Circumflex accent
                0x2030 => Some(0x89), // Per mille sign
                0x0160 => Some(0x8A), // Latin capital letter S with caron
                0x2039 => Some(0x8B), // Single left angle quotation mark
                0x0152 => Some(0x8C), // Latin capital ligature OE
                0x017D => Some(0x8E), // Latin capital letter Z with caron
                0x2018 => Some(0x91), // Left single quotation mark
                0x2019 => Some(0x92), // Right single quotation mark
                0x201C => Some(0x93), // Left double quotation mark
                0x201D => Some(0x94), // Right double quotation mark
                0x2022 => Some(0x95), // Bullet
                0x2013 => Some(0x96), // En dash
                0x2014 => Some(0x97), // Em dash
                0x02DC => Some(0x98), // Small tilde
                0x2122 => Some(0x99), // Trade mark sign
                0x0161 => Some(0x9A), // Latin small letter s with caron
                0x203A => Some(0x9B), // Single right angle quotation mark
                0x0153 => Some(0x9C), // Latin small ligature oe
                0x017E => Some(0x9E), // Latin small letter z with caron
                0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
                _ => None,
            },
        }
    }

    /// Encodes a string, replacing unmapped characters with `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| self.encode_char(ch).unwrap_or(b'?'))
            .collect()
    }

    /// Encodes `text` as a PDF literal string, parentheses included.
    pub fn literal_string(&self, text: &str) -> String {
        let mut literal = String::with_capacity(text.len() + 2);
        literal.push('(');
        for byte in self.encode(text) {
            match byte {
                b'(' => literal.push_str("\\("),
                b')' => literal.push_str("\\)"),
                b'\\' => literal.push_str("\\\\"),
                b'\n' => literal.push_str("\\n"),
                b'\r' => literal.push_str("\\r"),
                b'\t' => literal.push_str("\\t"),
                0x20..=0x7E => literal.push(byte as char),
                _ => literal.push_str(&format!("\\{:03o}", byte)),
            }
        }
        literal.push(')');
        literal
    }

    /// The character a reader will actually show for `ch`.
    pub fn displayed_char(&self, ch: char) -> char {
        if self.encode_char(ch).is_some() {
            ch
        } else {
            '?'
        }
    }
}
