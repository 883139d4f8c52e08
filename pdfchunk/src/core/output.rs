use super::chunk::Chunk;
use crate::{error::PdfChunkError, map_err};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};
use tracing::{debug, info, trace};

/// Trim the chunk and replace every line break in it with a single space,
/// so that it occupies exactly one line.
pub fn normalize(chunk: &str) -> String {
    chunk
        .trim()
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// Write each chunk as a single line to `out` and return the number of chunks written.
pub fn write_chunks<W: Write>(mut out: W, chunks: &[Chunk]) -> Result<usize, PdfChunkError> {
    for (i, chunk) in chunks.iter().enumerate() {
        trace!("Writing chunk {i} from page {}", chunk.page);
        map_err!(writeln!(out, "{}", normalize(&chunk.content)));
    }

    map_err!(out.flush());

    Ok(chunks.len())
}

/// Create (or truncate) the file at `path` and write the chunks to it.
///
/// The file is not written atomically, a failure midway leaves whatever
/// was written so far.
pub fn write_chunks_to_file(path: &Path, chunks: &[Chunk]) -> Result<usize, PdfChunkError> {
    let start = Instant::now();

    let file = map_err!(File::create(path));
    let count = write_chunks(BufWriter::new(file), chunks)?;

    info!("Wrote {count} chunks to {}", path.display());
    debug!(
        "Finished writing chunks, took {}ms",
        Instant::now().duration_since(start).as_millis()
    );

    Ok(count)
}
