use super::document::Page;
use crate::{
    config::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS},
    error::PdfChunkError,
    map_err,
};
use serde::{Deserialize, Serialize};
use splitx::{RecursiveSplitter, SeparatorPlacement};
use tracing::{debug, info};

/// Configuration of the recursive splitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkConfig {
    /// Maximum chunk length, in characters.
    pub size: usize,

    /// Maximum amount of characters shared by consecutive chunks.
    pub overlap: usize,

    /// Separators to split by, coarsest first. Must end with `""`.
    pub separators: Vec<String>,

    #[serde(default)]
    pub placement: SeparatorPlacement,
}

impl ChunkConfig {
    pub fn new(size: usize, overlap: usize, separators: Vec<String>) -> Self {
        Self {
            size,
            overlap,
            separators,
            placement: SeparatorPlacement::default(),
        }
    }

    /// Build the splitter, failing on invalid sizes or separators.
    pub fn splitter(&self) -> Result<RecursiveSplitter, PdfChunkError> {
        let splitter = map_err!(RecursiveSplitter::new(
            self.size,
            self.overlap,
            self.separators.iter().cloned()
        ));
        Ok(splitter.keep_separator(self.placement))
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_CHUNK_SIZE,
            DEFAULT_CHUNK_OVERLAP,
            DEFAULT_SEPARATORS.iter().map(ToString::to_string).collect(),
        )
    }
}

/// A piece of page text produced by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Index of the page the chunk was cut from.
    pub page: usize,
    pub content: String,
}

/// Split every page on its own, keeping page order.
/// Chunks never span two pages.
pub fn chunk_pages(splitter: &RecursiveSplitter, pages: &[Page]) -> Vec<Chunk> {
    let mut chunks = vec![];

    for page in pages {
        let before = chunks.len();

        chunks.extend(
            splitter
                .split(&page.content)
                .into_iter()
                .map(|content| Chunk {
                    page: page.index,
                    content,
                }),
        );

        debug!("Page {} produced {} chunks", page.index, chunks.len() - before);
    }

    info!("Split {} pages into {} chunks", pages.len(), chunks.len());

    chunks
}
