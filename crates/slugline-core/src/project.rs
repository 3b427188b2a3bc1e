//! The persisted unit of work.

use serde::Serialize;

/// A screenplay project: raw source text plus minimal metadata.
///
/// Projects never store classified elements; the script is re-derived from
/// `text` whenever it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    name: String,
    author: String,
    text: String,
    scene_numbers: bool,
}

impl Project {
    /// Create a project with the given name and source text.
    ///
    /// The author is empty and scene numbering is enabled.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: String::new(),
            text: text.into(),
            scene_numbers: true,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_scene_numbers(mut self, enabled: bool) -> Self {
        self.scene_numbers = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// The raw screenplay source.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scene_numbers(&self) -> bool {
        self.scene_numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_defaults() {
        let project = Project::new("Draft", "INT. ROOM - DAY");
        assert_eq!(project.name(), "Draft");
        assert_eq!(project.author(), "");
        assert_eq!(project.text(), "INT. ROOM - DAY");
        assert!(project.scene_numbers());
    }

    #[test]
    fn test_project_builders() {
        let project = Project::new("Draft", "")
            .with_author("Jane Doe")
            .with_scene_numbers(false);
        assert_eq!(project.author(), "Jane Doe");
        assert!(!project.scene_numbers());
    }
}
