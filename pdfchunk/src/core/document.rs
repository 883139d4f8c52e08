use crate::error::PdfChunkError;
use std::path::Path;

/// Text extracted from a single page of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Zero based position of the page in the document.
    pub index: usize,

    /// Raw text of the page.
    pub content: String,
}

impl Page {
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
        }
    }
}

/// Implement on anything that can turn a file into ordered page texts.
pub trait DocumentLoader {
    /// Load the pages of the document at `path`, in document order.
    fn load(&self, path: &Path) -> Result<Vec<Page>, PdfChunkError>;
}
