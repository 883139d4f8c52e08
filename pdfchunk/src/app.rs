//! Module containing concrete implementations from the [core](crate::core) module.

/// Document loader implementations.
pub mod document;
