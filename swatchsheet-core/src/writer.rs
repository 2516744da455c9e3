use crate::document::Document;
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::page::Page;
use crate::text::{Font, TextEncoding};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialization options.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Version written in the `%PDF-x.y` header.
    pub pdf_version: String,
    /// Flate-encode content streams. Ignored without the `compression` feature.
    pub compress_streams: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pdf_version: "1.7".to_string(),
            compress_streams: cfg!(feature = "compression"),
        }
    }
}

impl WriterConfig {
    pub fn uncompressed() -> Self {
        Self {
            compress_streams: false,
            ..Self::default()
        }
    }
}

/// Writes a [`Document`] as a classic-xref PDF.
///
/// Object numbers are assigned in a fixed order (catalog, page tree, then
/// each page followed by its content stream, then the info dictionary), so
/// the same document always produces the same bytes.
pub struct PdfWriter<W: Write> {
    writer: W,
    config: WriterConfig,
    xref_positions: HashMap<ObjectId, u64>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::default())
    }

    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        Self {
            writer,
            config,
            xref_positions: HashMap::new(),
            current_position: 0,
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        self.write_header()?;

        let catalog_id = self.write_catalog()?;
        self.write_pages(document)?;
        let info_id = self.write_info(document)?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;

        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        let header = format!("%PDF-{}\n", self.config.pdf_version);
        self.write_bytes(header.as_bytes())?;
        // Binary comment so transfer tools treat the file as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_catalog(&mut self) -> Result<ObjectId> {
        let catalog_id = ObjectId::new(1, 0);
        let pages_id = ObjectId::new(2, 0);

        let mut catalog = Dictionary::typed("Catalog");
        catalog.set("Pages", pages_id);

        self.write_object(catalog_id, Object::Dictionary(catalog))?;
        Ok(catalog_id)
    }

    fn write_pages(&mut self, document: &Document) -> Result<ObjectId> {
        let pages_id = ObjectId::new(2, 0);
        let page_ids: Vec<(ObjectId, ObjectId)> = (0..document.pages.len() as u32)
            .map(|i| (ObjectId::new(3 + i * 2, 0), ObjectId::new(4 + i * 2, 0)))
            .collect();

        let mut pages_dict = Dictionary::typed("Pages");
        pages_dict.set(
            "Kids",
            page_ids
                .iter()
                .map(|(page_id, _)| Object::Reference(*page_id))
                .collect::<Vec<_>>(),
        );
        pages_dict.set("Count", document.pages.len() as i64);

        self.write_object(pages_id, Object::Dictionary(pages_dict))?;

        for (page, (page_id, content_id)) in document.pages.iter().zip(page_ids) {
            self.write_page(page_id, pages_id, content_id, page)?;
            self.write_page_content(content_id, page)?;
        }

        Ok(pages_id)
    }

    fn write_page(
        &mut self,
        page_id: ObjectId,
        parent_id: ObjectId,
        content_id: ObjectId,
        page: &Page,
    ) -> Result<()> {
        let mut page_dict = Dictionary::typed("Page");
        page_dict.set("Parent", parent_id);
        page_dict.set(
            "MediaBox",
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ],
        );

        let mut resources = Dictionary::new();
        if !page.used_fonts().is_empty() {
            resources.set("Font", font_resources(page.used_fonts()));
        }
        page_dict.set("Resources", resources);
        page_dict.set("Contents", content_id);

        self.write_object(page_id, Object::Dictionary(page_dict))
    }

    fn write_page_content(&mut self, content_id: ObjectId, page: &Page) -> Result<()> {
        #[allow(unused_mut)]
        let mut stream = Stream::new(page.generate_content()?);

        #[cfg(feature = "compression")]
        {
            if self.config.compress_streams {
                stream.compress_flate()?;
            }
        }

        self.write_object(content_id, Object::Stream(stream))
    }

    fn write_info(&mut self, document: &Document) -> Result<ObjectId> {
        let info_id = ObjectId::new(3 + document.pages.len() as u32 * 2, 0);
        let metadata = &document.metadata;
        let mut info_dict = Dictionary::new();

        let text_entries = [
            ("Title", &metadata.title),
            ("Subject", &metadata.subject),
            ("Keywords", &metadata.keywords),
            ("Creator", &metadata.creator),
            ("Producer", &metadata.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                info_dict.set(key, value.as_str());
            }
        }

        if let Some(creation_date) = metadata.creation_date {
            info_dict.set("CreationDate", format_pdf_date(creation_date));
        }
        if let Some(mod_date) = metadata.modification_date {
            info_dict.set("ModDate", format_pdf_date(mod_date));
        }

        self.write_object(info_id, Object::Dictionary(info_dict))?;
        Ok(info_id)
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    pub fn new(path: impl AsRef<Path>, config: WriterConfig) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::with_config(BufWriter::new(file), config))
    }
}

impl<W: Write> PdfWriter<W> {
    fn write_object(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(&object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) => {
                let literal = TextEncoding::WinAnsiEncoding.literal_string(s);
                self.write_bytes(literal.as_bytes())?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(stream) => {
                self.write_object_value(&Object::Dictionary(stream.dictionary().clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(stream.data())?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                self.write_bytes(id.to_string().as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;

        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        self.write_bytes(format!("0 {}\n", max_obj_num + 1).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        for obj_num in 1..=max_obj_num {
            let entry = match self.xref_positions.get(&ObjectId::new(obj_num, 0)) {
                Some(position) => format!("{position:010} 00000 n \n"),
                None => "0000000000 00000 f \n".to_string(),
            };
            self.write_bytes(entry.as_bytes())?;
        }

        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        let mut trailer = Dictionary::new();
        trailer.set("Size", (max_obj_num + 1) as i64);
        trailer.set("Root", catalog_id);
        trailer.set("Info", info_id);

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// Font resource dictionary naming each used font by its base font name.
fn font_resources(fonts: &[Font]) -> Dictionary {
    fonts
        .iter()
        .map(|font| {
            let mut entry = Dictionary::typed("Font");
            entry.set("Subtype", Object::name("Type1"));
            entry.set("BaseFont", Object::name(font.pdf_name()));
            entry.set(
                "Encoding",
                Object::name(TextEncoding::WinAnsiEncoding.pdf_name()),
            );
            (font.pdf_name(), Object::Dictionary(entry))
        })
        .collect()
}

fn format_real(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm')
fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");

    // UTC offset is always +00'00'
    format!("{formatted}+00'00'")
}
