//! Error and diagnostic system for Slugline project files.
//!
//! Classification itself never fails; diagnostics are produced when a
//! persisted project file cannot be read back. The system provides:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - A collector for accumulating multiple errors
//!
//! # Example
//!
//! ```
//! # use slugline_parser::error::{Diagnostic, ErrorCode};
//! # use slugline_parser::Span;
//!
//! let diag = Diagnostic::error("project name must not be empty")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(7..9), "empty name")
//!     .with_help("give the project a name");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
