use clap::Parser;
use std::path::PathBuf;

/// Maximum chunk length, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = splitx::DEFAULT_SIZE;
/// Characters carried over from the end of one chunk into the next.
pub const DEFAULT_CHUNK_OVERLAP: usize = splitx::DEFAULT_OVERLAP;
/// Separators tried when splitting, coarsest first.
pub const DEFAULT_SEPARATORS: &[&str] = splitx::DEFAULT_SEPARATORS;
/// The file chunks are written to, relative to the working directory.
pub const OUTPUT_FILE: &str = "chunks.txt";

#[derive(Debug, Parser)]
#[command(name = "pdfchunk", version = "0.1", about = "Split a PDF into overlapping text chunks, one per line", long_about = None)]
pub struct StartArgs {
    /// Path to the PDF file.
    pub file: PathBuf,

    /// RUST_LOG string to use as the env filter.
    #[arg(short, long)]
    log: Option<String>,
}

/// Implement a getter method on [StartArgs], using the `$var` environment variable as a fallback
/// and a default if neither the argument nor the environment variable is set.
macro_rules! arg {
    ($id:ident, $var:literal, default $value:expr) => {
        impl StartArgs {
            pub fn $id(&self) -> String {
                match &self.$id {
                    Some(val) => val.to_string(),
                    None => match std::env::var($var) {
                        Ok(val) => val,
                        Err(_) => $value,
                    },
                }
            }
        }
    };
}

arg!(log, "RUST_LOG", default "info".to_string());
