//! Per-scene export bundle.
//!
//! Each scene becomes one plain-text file holding the scene's lines
//! exactly as they were typed. File names sort in scene order:
//! `001-int-office-day.txt`, `002-ext-street-night.txt`, ...

use std::{fs, path::Path};

use log::{debug, info};

use slugline_core::script::Script;

use super::{Error, Exporter};
use crate::slug::slugify;

/// One file of a scene bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFile {
    name: String,
    contents: String,
}

impl SceneFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// File name, relative to the bundle directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Splits a script into one [`SceneFile`] per scene.
///
/// Elements before the first scene heading belong to no scene and are not
/// exported. A script without headings yields an empty bundle.
#[derive(Debug, Clone, Default)]
pub struct SceneExporter;

impl SceneExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for SceneExporter {
    type Output = Vec<SceneFile>;

    fn export(&self, script: &Script) -> Result<Vec<SceneFile>, Error> {
        let files: Vec<SceneFile> = script
            .scenes()
            .iter()
            .enumerate()
            .map(|(idx, scene)| {
                let heading = scene.heading().text();
                let name = format!("{:03}-{}.txt", idx + 1, slugify(heading, "scene"));

                let mut contents = String::new();
                for element in scene.elements() {
                    contents.push_str(element.original());
                    contents.push('\n');
                }

                debug!(file = name.as_str(), elements = scene.elements().len(); "Scene file");
                SceneFile::new(name, contents)
            })
            .collect();

        info!(scenes = files.len(); "Exported scene bundle");
        Ok(files)
    }
}

/// Writes a scene bundle into `dir`, creating the directory if needed.
/// Existing files with the same names are overwritten.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory or a file cannot be written.
pub fn write_bundle(dir: &Path, files: &[SceneFile]) -> Result<(), Error> {
    fs::create_dir_all(dir)?;
    for file in files {
        fs::write(dir.join(file.name()), file.contents())?;
    }
    info!(dir:? = dir, files = files.len(); "Wrote scene bundle");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
TITLE: Two Rooms
FADE IN:

INT. OFFICE - DAY

JOHN
Hello there.

EXT. STREET - NIGHT
Rain.
";

    fn bundle(source: &str) -> Vec<SceneFile> {
        let script = slugline_parser::classify(source, true);
        SceneExporter::new().export(&script).expect("scene export is infallible")
    }

    #[test]
    fn test_one_file_per_scene() {
        let files = bundle(SOURCE);
        let names: Vec<_> = files.iter().map(SceneFile::name).collect();

        assert_eq!(names, ["001-int-office-day.txt", "002-ext-street-night.txt"]);
    }

    #[test]
    fn test_contents_are_verbatim() {
        let files = bundle(SOURCE);

        assert_eq!(
            files[0].contents(),
            "INT. OFFICE - DAY\n\nJOHN\nHello there.\n\n"
        );
        assert_eq!(files[1].contents(), "EXT. STREET - NIGHT\nRain.\n");
    }

    #[test]
    fn test_keeps_original_whitespace() {
        let files = bundle("  int. kitchen - night  \n   Steam rises.");

        assert_eq!(files[0].name(), "001-int-kitchen-night.txt");
        assert_eq!(files[0].contents(), "  int. kitchen - night  \n   Steam rises.\n");
    }

    #[test]
    fn test_numbering_off_keeps_names() {
        let script = slugline_parser::classify(SOURCE, false);
        let files = SceneExporter::new().export(&script).unwrap();

        assert_eq!(files[0].name(), "001-int-office-day.txt");
    }

    #[test]
    fn test_no_scenes() {
        assert!(bundle("Just some action.\n").is_empty());
    }

    #[test]
    fn test_write_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("scenes");
        let files = bundle(SOURCE);

        write_bundle(&target, &files).unwrap();

        let written = fs::read_to_string(target.join("002-ext-street-night.txt")).unwrap();
        assert_eq!(written, "EXT. STREET - NIGHT\nRain.\n");
    }
}
