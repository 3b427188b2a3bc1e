//! Slugline - screenplay classification, rendering and export.
//!
//! Classifies plain-text screenplays line by line into typed elements
//! (scene headings, action, character cues, dialogue and so on), then
//! renders the result as a formatted screenplay view, scene cards, JSON,
//! paginated plain text, or a per-scene file bundle.

pub mod config;
pub mod editor;
pub mod export;
pub mod render;
pub mod store;

mod error;
mod slug;

pub use slugline_core::{element, project, script, span};

pub use error::SluglineError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, scenes::SceneFile};
use project::Project;
use script::Script;

/// Builder for classifying, rendering and exporting screenplays.
///
/// Holds the application configuration and applies it to each stage.
/// A builder can be reused for any number of scripts.
///
/// # Examples
///
/// ```rust
/// use slugline::{ScriptBuilder, config::AppConfig};
///
/// let source = "INT. OFFICE - DAY\n\nJOHN\nHello there.\n";
///
/// let builder = ScriptBuilder::new(AppConfig::default());
/// let script = builder.classify(source);
/// assert_eq!(script.scenes().len(), 1);
///
/// let html = builder.render_html(&script);
/// assert!(html.contains(r#"<div class="element character">JOHN</div>"#));
///
/// let text = builder.export_text(&script).expect("default page layout");
/// assert!(text.starts_with("1. INT. OFFICE - DAY\n"));
/// ```
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    config: AppConfig,
}

impl ScriptBuilder {
    /// Create a new script builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including numbering, card and page settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Classify source text into a script.
    ///
    /// Classification never fails: every line of the source becomes exactly
    /// one element.
    pub fn classify(&self, source: &str) -> Script {
        info!(source_len = source.len(); "Classifying script");

        let script = slugline_parser::classify_with(source, self.config.classify());

        debug!(
            elements = script.len(),
            scenes = script.scenes().len();
            "Script classified"
        );
        trace!(script:?; "Classified script");

        script
    }

    /// Render the formatted screenplay view as an HTML fragment.
    pub fn render_html(&self, script: &Script) -> String {
        info!("Rendering screenplay view");
        render::html::render(script)
    }

    /// Render the scene-card view as an HTML fragment.
    pub fn render_cards(&self, script: &Script) -> String {
        info!("Rendering scene cards");
        render::cards::render(script, self.config.render().card_summary_chars())
    }

    /// Serialize the classified elements as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `SluglineError::Export` if serialization fails.
    pub fn render_json(&self, script: &Script) -> Result<String, SluglineError> {
        info!("Rendering JSON");
        serde_json::to_string_pretty(script).map_err(|err| SluglineError::Export(Box::new(err)))
    }

    /// Export the script as paginated plain text.
    ///
    /// # Errors
    ///
    /// Returns `SluglineError::Export` if the configured page layout is too
    /// small to lay out a screenplay.
    pub fn export_text(&self, script: &Script) -> Result<String, SluglineError> {
        let exporter = export::text::TextExporter::new(self.config.export());
        let text = exporter.export(script)?;
        info!(bytes = text.len(); "Plain text exported");
        Ok(text)
    }

    /// Split the script into one plain-text file per scene.
    ///
    /// # Errors
    ///
    /// Returns `SluglineError::Export` if the bundle cannot be produced.
    pub fn export_scenes(&self, script: &Script) -> Result<Vec<SceneFile>, SluglineError> {
        Ok(export::scenes::SceneExporter::new().export(script)?)
    }

    /// Parse a project file.
    ///
    /// # Errors
    ///
    /// Returns `SluglineError::Parse` carrying the diagnostics and the
    /// project file text.
    pub fn load_project(&self, source: &str) -> Result<Project, SluglineError> {
        info!("Loading project file");

        let project = slugline_parser::parse_project(source)
            .map_err(|err| SluglineError::new_parse_error(err, source))?;

        debug!(name = project.name(); "Project loaded");
        Ok(project)
    }

    /// Classify a project's text, honoring the project's numbering flag.
    pub fn classify_project(&self, project: &Project) -> Script {
        info!(name = project.name(); "Classifying project");
        slugline_parser::classify(project.text(), project.scene_numbers())
    }
}
