//! # Slugline Parser
//!
//! Turns screenplay source text into a [`Script`]: an ordered sequence of
//! typed elements, one per source line. Also reads and writes project files.
//!
//! ## Usage
//!
//! ```
//! use slugline_core::element::ElementKind;
//!
//! let script = slugline_parser::classify("INT. OFFICE - DAY\n\nJOHN\nHello there.\n", true);
//!
//! let kinds: Vec<_> = script.iter().map(|element| element.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         ElementKind::SceneHeading,
//!         ElementKind::Empty,
//!         ElementKind::Character,
//!         ElementKind::Dialogue,
//!     ]
//! );
//! ```

pub mod error;

mod classifier;
mod lines;
mod matchers;
mod project;

pub use project::{PROJECT_VERSION, parse_project, render_project};
pub use slugline_core::span::Span;

use log::debug;
use serde::Deserialize;

use slugline_core::script::Script;

use classifier::Classifier;

/// Options for a classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Assign sequential numbers to scene headings.
    scene_numbers: bool,
}

impl ClassifyConfig {
    pub fn new(scene_numbers: bool) -> Self {
        Self { scene_numbers }
    }

    pub fn scene_numbers(&self) -> bool {
        self.scene_numbers
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            scene_numbers: true,
        }
    }
}

/// Classify screenplay text into a [`Script`].
///
/// This is a total function: every input, however malformed, yields one
/// element per source line, with anything unrecognized classified as
/// action. The scene counter is local to the call, so numbering always
/// starts at 1.
///
/// # Arguments
///
/// * `source` - The full document text
/// * `scene_numbers` - Whether scene headings receive sequential numbers
pub fn classify(source: &str, scene_numbers: bool) -> Script {
    let script = Classifier::new(source, scene_numbers).run();

    debug!(
        elements = script.len(),
        scenes = script.scenes().len(),
        scene_numbers;
        "Script classified"
    );

    script
}

/// Classify screenplay text using the options in `config`.
pub fn classify_with(source: &str, config: &ClassifyConfig) -> Script {
    classify(source, config.scene_numbers())
}
