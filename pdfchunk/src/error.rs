use std::error::Error as _;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PdfChunkErr {
    #[error("Does not exist; {0}")]
    DoesNotExist(String),

    #[error("Parse pdf; {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("chunker: {0}")]
    Chunker(#[from] splitx::ChunkerError),

    #[error("IO; {0}")]
    IO(#[from] std::io::Error),
}

/// A [PdfChunkErr] along with the place it was raised.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct PdfChunkError {
    file: &'static str,
    line: u32,
    column: u32,
    pub error: PdfChunkErr,
}

impl PdfChunkError {
    pub fn new(file: &'static str, line: u32, column: u32, error: PdfChunkErr) -> PdfChunkError {
        PdfChunkError {
            file,
            line,
            column,
            error,
        }
    }

    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }

    pub fn print(&self) {
        let location = self.location();

        error!("{location} | {self}");

        if self.error.source().is_some() {
            error!("Causes:");
        }

        let mut src = self.error.source();
        while let Some(source) = src {
            error!(" - {source}");
            src = source.source();
        }
    }
}

#[macro_export]
macro_rules! err {
    ($ty:ident $(, $l:literal $(,)? $($args:expr),* )?) => {
        Err($crate::error::PdfChunkError::new(
            file!(),
            line!(),
            column!(),
            $crate::error::PdfChunkErr::$ty $( (format!($l, $( $args, )*)) )?,
        ))
    };
}

#[macro_export]
macro_rules! map_err {
    ($ex:expr) => {
        $ex.map_err(|e| $crate::error::PdfChunkError::new(file!(), line!(), column!(), e.into()))?
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing() -> Result<(), PdfChunkError> {
        err!(DoesNotExist, "no such file: {}", "foo.pdf")
    }

    fn io() -> Result<(), PdfChunkError> {
        map_err!(Err::<(), _>(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied"
        )));
        Ok(())
    }

    #[test]
    fn err_records_location() {
        let error = missing().unwrap_err();
        assert!(matches!(error.error, PdfChunkErr::DoesNotExist(_)));
        assert!(error.location().starts_with(file!()));
        assert_eq!("Does not exist; no such file: foo.pdf", error.to_string());
    }

    #[test]
    fn map_err_converts() {
        let error = io().unwrap_err();
        assert!(matches!(error.error, PdfChunkErr::IO(_)));
        assert!(error.location().contains(file!()));
    }
}
