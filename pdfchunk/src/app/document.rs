pub mod pdf;

pub use pdf::PdfLoader;
