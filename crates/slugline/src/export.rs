//! Export functionality for Slugline scripts.
//!
//! This module provides the [`Exporter`] trait that defines the interface
//! for turning a classified script into an output document. Exporters only
//! read the script; positioning and formatting rules belong to each
//! backend, not to classification.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ classify
//! Script (elements + derived scenes)
//!     ↓ export (this module)
//! Output document(s)
//! ```
//!
//! # Available Backends
//!
//! - [`text`] - paginated plain text via [`text::TextExporter`]
//! - [`scenes`] - one plain-text file per scene via [`scenes::SceneExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`SluglineError::Export`] at the crate boundary.
//!
//! [`SluglineError::Export`]: crate::SluglineError::Export

pub mod scenes;
pub mod text;

use slugline_core::script::Script;

/// Abstraction for script export backends.
pub trait Exporter {
    /// The document type this backend produces.
    type Output;

    /// Exports a classified script.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the backend's settings cannot produce a
    /// document.
    fn export(&self, script: &Script) -> Result<Self::Output, Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A layout or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
