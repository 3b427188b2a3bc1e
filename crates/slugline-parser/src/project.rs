//! Reading and writing project files.
//!
//! A project file is a small TOML document holding the raw screenplay text
//! and its metadata. Reading validates the document and reports every
//! problem as a [`Diagnostic`] pointing into the file.

use log::debug;
use serde::{Deserialize, Serialize};
use toml::Spanned;

use slugline_core::project::Project;

use crate::{
    Span,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
};

/// The only project file version this build reads and writes.
pub const PROJECT_VERSION: i64 = 1;

#[derive(Deserialize)]
struct ProjectFile {
    version: Option<Spanned<i64>>,
    name: Spanned<String>,
    #[serde(default)]
    author: String,
    #[serde(default = "default_scene_numbers")]
    scene_numbers: bool,
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct ProjectFileRef<'a> {
    version: i64,
    name: &'a str,
    author: &'a str,
    scene_numbers: bool,
    text: &'a str,
}

fn default_scene_numbers() -> bool {
    true
}

/// Parse a project file.
///
/// # Errors
///
/// Returns a [`ParseError`] holding:
/// - `E100` if the document is not valid TOML or a field is missing or mistyped
/// - `E101` if the project name is blank
/// - `E102` if the file declares a version other than [`PROJECT_VERSION`]
pub fn parse_project(source: &str) -> Result<Project, ParseError> {
    let file: ProjectFile = toml::from_str(source).map_err(|err| {
        let mut diag = Diagnostic::error(err.message().trim().to_string())
            .with_code(ErrorCode::E100)
            .with_help("project files need at least a `name`; `text`, `author` and `scene_numbers` are optional");
        if let Some(range) = err.span() {
            diag = diag.with_label(Span::new(range), ErrorCode::E100.description());
        }
        ParseError::from(diag)
    })?;

    validate(&file)?;

    let name = file.name.into_inner();
    debug!(name = name.as_str(), text_len = file.text.len(); "Project file parsed");

    Ok(Project::new(name, file.text)
        .with_author(file.author)
        .with_scene_numbers(file.scene_numbers))
}

fn validate(file: &ProjectFile) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    if let Some(version) = &file.version {
        if *version.get_ref() != PROJECT_VERSION {
            collector.emit(
                Diagnostic::error(format!(
                    "unsupported project version {}",
                    version.get_ref()
                ))
                .with_code(ErrorCode::E102)
                .with_label(
                    Span::new(version.span()),
                    format!("only version {PROJECT_VERSION} is supported"),
                )
                .with_help("re-save the project with this version of slugline"),
            );
        }
    }

    if file.name.get_ref().trim().is_empty() {
        collector.emit(
            Diagnostic::error("project name must not be empty")
                .with_code(ErrorCode::E101)
                .with_label(Span::new(file.name.span()), "empty name")
                .with_help("give the project a name, e.g. `name = \"Draft\"`"),
        );
    }

    collector.finish()
}

/// Serialize a project to the project file format.
///
/// # Errors
///
/// Returns the TOML serializer's error if the document cannot be written.
pub fn render_project(project: &Project) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&ProjectFileRef {
        version: PROJECT_VERSION,
        name: project.name(),
        author: project.author(),
        scene_numbers: project.scene_numbers(),
        text: project.text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_project() {
        let project = parse_project("name = \"Draft\"").expect("valid project");

        assert_eq!(project.name(), "Draft");
        assert_eq!(project.author(), "");
        assert_eq!(project.text(), "");
        assert!(project.scene_numbers());
    }

    #[test]
    fn test_parse_full_project() {
        let source = r#"
version = 1
name = "My Film"
author = "Jane Doe"
scene_numbers = false
text = """
INT. OFFICE - DAY

JOHN
Hello there.
"""
"#;
        let project = parse_project(source).expect("valid project");

        assert_eq!(project.name(), "My Film");
        assert_eq!(project.author(), "Jane Doe");
        assert!(!project.scene_numbers());
        assert_eq!(project.text(), "INT. OFFICE - DAY\n\nJOHN\nHello there.\n");
    }

    #[test]
    fn test_render_then_parse_preserves_project() {
        let project = Project::new("Draft", "INT. ROOM - DAY\n\n\"Quoted\" text\\ here\n")
            .with_author("A. Writer")
            .with_scene_numbers(false);

        let rendered = render_project(&project).expect("renders");
        assert!(rendered.contains("version = 1"));
        assert_eq!(parse_project(&rendered).expect("parses"), project);
    }

    #[test]
    fn test_syntax_error_is_e100_with_span() {
        let err = parse_project("name = \"Draft").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert!(diag.severity().is_error());
        assert_eq!(diag.labels().len(), 1);
    }

    #[test]
    fn test_missing_name_is_e100() {
        let err = parse_project("author = \"Jane\"").unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
        assert!(err.diagnostics()[0].message().contains("name"));
    }

    #[test]
    fn test_wrong_type_is_e100() {
        let err = parse_project("name = \"Draft\"\nscene_numbers = \"yes\"").unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_empty_name_is_e101_at_value() {
        let source = "name = \"  \"";
        let err = parse_project(source).unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E101));
        let span = diag.labels()[0].span();
        assert_eq!(source[span.range()].trim_matches('"'), "  ");
    }

    #[test]
    fn test_all_validation_errors_are_reported() {
        let source = "version = 7\nname = \"\"";
        let err = parse_project(source).unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().filter_map(Diagnostic::code).collect();

        assert_eq!(codes, [ErrorCode::E102, ErrorCode::E101]);
        let version_span = err.diagnostics()[0].labels()[0].span();
        assert_eq!(&source[version_span.range()], "7");
    }
}
