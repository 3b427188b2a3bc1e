//! Error types for Slugline operations.
//!
//! This module provides the main error type [`SluglineError`] which wraps
//! the error conditions that can occur while loading, storing, or
//! exporting screenplays. Classification itself never fails.

use std::io;

use thiserror::Error;

use slugline_parser::error::ParseError;

/// The main error type for Slugline operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the project file text alongside the
/// diagnostics so that callers can render source snippets.
#[derive(Debug, Error)]
pub enum SluglineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SluglineError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SluglineError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
