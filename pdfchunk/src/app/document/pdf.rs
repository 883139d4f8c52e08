use crate::{
    core::document::{DocumentLoader, Page},
    err,
    error::PdfChunkError,
    map_err,
};
use std::{path::Path, time::Instant};
use tracing::{debug, info};

/// Loads PDFs with [lopdf], producing one [Page] per PDF page.
///
/// Pages without text are kept as empty pages so indices match the document.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfLoader;

impl DocumentLoader for PdfLoader {
    fn load(&self, path: &Path) -> Result<Vec<Page>, PdfChunkError> {
        let start = Instant::now();

        if !path.is_file() {
            return err!(DoesNotExist, "not a file: {}", path.display());
        }

        let document = map_err!(lopdf::Document::load(path));

        let mut pages = vec![];

        // Keys are page numbers starting from 1, in order.
        for (index, page_num) in document.get_pages().into_keys().enumerate() {
            let content = map_err!(document.extract_text(&[page_num]));
            pages.push(Page::new(index, content));
        }

        info!("Loaded {} pages from {}", pages.len(), path.display());
        debug!(
            "Finished processing PDF, took {}ms",
            Instant::now().duration_since(start).as_millis()
        );

        Ok(pages)
    }
}
