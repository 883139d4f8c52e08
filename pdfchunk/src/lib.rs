use crate::core::{
    chunk::{chunk_pages, ChunkConfig},
    document::DocumentLoader,
    output::write_chunks_to_file,
};
use error::PdfChunkError;
use std::path::Path;
use tracing::info;

/// Concrete implementations of the [core] module.
pub mod app;

/// Application starting arguments and configuration.
pub mod config;

/// Core business logic.
pub mod core;

/// Error types.
pub mod error;

/// Load the document at `path` with `loader`, split its pages according to
/// `config` and write the chunks, one per line, to `out`.
///
/// The configuration is checked before the document is touched.
/// Returns the amount of chunks written.
pub fn run(
    loader: &impl DocumentLoader,
    path: &Path,
    config: &ChunkConfig,
    out: &Path,
) -> Result<usize, PdfChunkError> {
    let splitter = config.splitter()?;

    info!("Chunking {}", path.display());

    let pages = loader.load(path)?;
    let chunks = chunk_pages(&splitter, &pages);

    write_chunks_to_file(out, &chunks)
}
