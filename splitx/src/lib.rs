pub mod recursive;

pub use recursive::{RecursiveSplitter, SeparatorPlacement};

/// Default chunk size, in characters.
pub const DEFAULT_SIZE: usize = 500;

/// Default overlap between consecutive chunks, in characters.
pub const DEFAULT_OVERLAP: usize = 50;

/// Default separators, coarsest first. The trailing empty separator
/// splits between every character and guarantees termination.
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", ".", " ", ""];

#[derive(Debug, thiserror::Error)]
pub enum ChunkerError {
    #[error("{0}")]
    Config(String),
}
