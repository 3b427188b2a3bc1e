//! Configuration types for Slugline.
//!
//! All types implement [`serde::Deserialize`] and every section falls back
//! to its defaults when omitted, so an empty document is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`ClassifyConfig`] - Classification options (scene numbering).
//! - [`RenderConfig`] - Screen view options (card summaries).
//! - [`ExportConfig`] - Page geometry for plain-text export.
//!
//! # Example
//!
//! ```
//! # use slugline::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.classify().scene_numbers());
//! assert_eq!(config.export().lines_per_page(), 55);
//! ```

use serde::Deserialize;

pub use slugline_parser::ClassifyConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Classification section.
    #[serde(default)]
    classify: ClassifyConfig,

    /// Screen rendering section.
    #[serde(default)]
    render: RenderConfig,

    /// Plain-text export section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(classify: ClassifyConfig, render: RenderConfig, export: ExportConfig) -> Self {
        Self {
            classify,
            render,
            export,
        }
    }

    pub fn classify(&self) -> &ClassifyConfig {
        &self.classify
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns a copy of this configuration with scene numbering forced
    /// on or off.
    pub fn with_scene_numbers(mut self, enabled: bool) -> Self {
        self.classify = ClassifyConfig::new(enabled);
        self
    }
}

/// Options for the screen views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum characters of action text shown on a scene card.
    card_summary_chars: usize,
}

impl RenderConfig {
    pub fn new(card_summary_chars: usize) -> Self {
        Self { card_summary_chars }
    }

    pub fn card_summary_chars(&self) -> usize {
        self.card_summary_chars
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            card_summary_chars: 120,
        }
    }
}

/// Page geometry for plain-text export, in monospace character cells.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Lines per page, including the page number header.
    lines_per_page: usize,

    /// Width of the text area in characters.
    page_width: usize,
}

impl ExportConfig {
    pub fn new(lines_per_page: usize, page_width: usize) -> Self {
        Self {
            lines_per_page,
            page_width,
        }
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    pub fn page_width(&self) -> usize {
        self.page_width
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            lines_per_page: 55,
            page_width: 60,
        }
    }
}
