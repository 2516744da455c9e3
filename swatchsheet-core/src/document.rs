use crate::error::Result;
use crate::page::Page;
use crate::writer::{PdfWriter, WriterConfig};
use chrono::{DateTime, Utc};

/// A PDF document: pages plus the info dictionary.
///
/// # Example
///
/// ```rust
/// use swatchsheet::{Document, Page};
///
/// let mut doc = Document::new();
/// doc.set_title("CMYK 100,10,2,32");
/// doc.add_page(Page::from_inches(11.61, 15.24));
///
/// let bytes = doc.to_bytes()?;
/// assert!(bytes.starts_with(b"%PDF-1.7"));
/// # Ok::<(), swatchsheet::SwatchError>(())
/// ```
#[derive(Clone)]
pub struct Document {
    pub(crate) pages: Vec<Page>,
    pub(crate) metadata: DocumentMetadata,
}

/// Metadata for a PDF document.
///
/// Dates are never filled in automatically; output stays byte-identical
/// unless the caller sets them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords
    pub keywords: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
    /// Date and time the document was last modified
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: None,
            subject: None,
            keywords: None,
            creator: Some("swatchsheet".to_string()),
            producer: Some(format!("swatchsheet v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: None,
            modification_date: None,
        }
    }
}

impl Document {
    /// Creates a new empty PDF document.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            metadata: DocumentMetadata::default(),
        }
    }

    /// Adds a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Sets the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    /// Sets the document subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    /// Sets the document keywords.
    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.metadata.keywords = Some(keywords.into());
    }

    /// Sets the document creator (software that created the original document).
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.metadata.creator = Some(creator.into());
    }

    /// Sets the document producer (software that produced the PDF).
    pub fn set_producer(&mut self, producer: impl Into<String>) {
        self.metadata.producer = Some(producer.into());
    }

    /// Sets the document creation date.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    /// Sets the document modification date.
    pub fn set_modification_date(&mut self, date: DateTime<Utc>) {
        self.metadata.modification_date = Some(date);
    }

    /// Gets the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Saves the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.save_with_config(path, WriterConfig::default())
    }

    /// Saves the document to a file with explicit writer options.
    pub fn save_with_config(
        &self,
        path: impl AsRef<std::path::Path>,
        config: WriterConfig,
    ) -> Result<()> {
        let mut writer = PdfWriter::new(path, config)?;
        writer.write_document(self)
    }

    /// Writes the document to a buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF cannot be generated.
    pub fn write(&self, buffer: &mut Vec<u8>) -> Result<()> {
        let mut writer = PdfWriter::new_with_writer(buffer);
        writer.write_document(self)
    }

    /// Serializes the document with the default writer options.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bytes_with_config(WriterConfig::default())
    }

    pub fn to_bytes_with_config(&self, config: WriterConfig) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        PdfWriter::with_config(&mut buffer, config).write_document(self)?;
        Ok(buffer)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
