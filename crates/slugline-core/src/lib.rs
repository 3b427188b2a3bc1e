//! Slugline Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Slugline
//! screenplay tools. It includes:
//!
//! - **Spans**: Byte ranges into the source text ([`span::Span`])
//! - **Elements**: Classified screenplay lines ([`element::Element`])
//! - **Scripts**: Ordered element sequences and derived scenes ([`script`] module)
//! - **Projects**: The persisted unit of work ([`project::Project`])

pub mod element;
pub mod project;
pub mod script;
pub mod span;
