//! The core module defines the business logic of pdfchunk.
//! It provides the traits and models the adapters in [app][crate::app] implement.

pub mod chunk;
pub mod document;
pub mod output;
