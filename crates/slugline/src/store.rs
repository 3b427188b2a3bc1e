//! Project persistence.
//!
//! [`ProjectStore`] is the seam between the editor and wherever projects
//! live. Two implementations ship with the crate:
//!
//! - [`MemoryStore`] keeps projects in memory, for tests and scratch use.
//! - [`DirStore`] keeps one `<slug>.toml` project file per project in a
//!   directory.
//!
//! Stores report failures as [`SluglineError`] values and never panic;
//! callers decide whether to surface the error and carry on.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use slugline_core::project::Project;
use slugline_parser::{parse_project, render_project};

use crate::{error::SluglineError, slug::slugify};

const PROJECT_EXTENSION: &str = "toml";

/// Storage for projects, keyed by project name.
pub trait ProjectStore {
    /// Loads the project called `name`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the project exists but cannot be read.
    fn load(&self, name: &str) -> Result<Option<Project>, SluglineError>;

    /// Saves `project`, replacing any project with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be written.
    fn save(&mut self, project: &Project) -> Result<(), SluglineError>;

    /// Names of all stored projects, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    fn list(&self) -> Result<Vec<String>, SluglineError>;

    /// Removes the project called `name`. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the project exists but cannot be removed.
    fn remove(&mut self, name: &str) -> Result<bool, SluglineError>;
}

/// In-memory project store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    projects: BTreeMap<String, Project>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn load(&self, name: &str) -> Result<Option<Project>, SluglineError> {
        Ok(self.projects.get(name).cloned())
    }

    fn save(&mut self, project: &Project) -> Result<(), SluglineError> {
        self.projects
            .insert(project.name().to_string(), project.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, SluglineError> {
        Ok(self.projects.keys().cloned().collect())
    }

    fn remove(&mut self, name: &str) -> Result<bool, SluglineError> {
        Ok(self.projects.remove(name).is_some())
    }
}

/// Directory-backed project store.
///
/// Each project is stored as `<slug>.toml`, where the slug is derived from
/// the project name. Projects are still keyed by their exact name: a file
/// whose stored name differs from the requested one is treated as absent,
/// and saving over another project's file is refused. The directory is
/// created on first save.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir
            .join(slugify(name, "untitled"))
            .with_extension(PROJECT_EXTENSION)
    }

    fn read_project(path: &Path) -> Result<Project, SluglineError> {
        let source = fs::read_to_string(path)?;
        parse_project(&source).map_err(|err| SluglineError::new_parse_error(err, source))
    }

    /// Reads the file `name` maps to, if it holds the project called `name`.
    fn find(&self, name: &str) -> Result<Option<(PathBuf, Project)>, SluglineError> {
        let path = self.path_for(name);
        if !path.is_file() {
            debug!(path:? = path; "No stored project");
            return Ok(None);
        }

        let project = Self::read_project(&path)?;
        if project.name() != name {
            debug!(
                name = name,
                stored = project.name(),
                path:? = path;
                "Project file holds a different project"
            );
            return Ok(None);
        }

        Ok(Some((path, project)))
    }
}

impl ProjectStore for DirStore {
    fn load(&self, name: &str) -> Result<Option<Project>, SluglineError> {
        let Some((path, project)) = self.find(name)? else {
            return Ok(None);
        };
        info!(name = project.name(), path:? = path; "Loaded project");
        Ok(Some(project))
    }

    fn save(&mut self, project: &Project) -> Result<(), SluglineError> {
        if project.name().trim().is_empty() {
            return Err(SluglineError::Store(
                "cannot save a project without a name".to_string(),
            ));
        }

        let rendered = render_project(project).map_err(|err| {
            SluglineError::Store(format!("failed to serialize `{}`: {err}", project.name()))
        })?;

        let path = self.path_for(project.name());
        if path.is_file() {
            let stored = Self::read_project(&path)?;
            if stored.name() != project.name() {
                return Err(SluglineError::Store(format!(
                    "cannot save `{}`: {} already holds project `{}`",
                    project.name(),
                    path.display(),
                    stored.name()
                )));
            }
        }

        fs::create_dir_all(&self.dir)?;
        fs::write(&path, rendered)?;
        info!(name = project.name(), path:? = path; "Saved project");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, SluglineError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROJECT_EXTENSION) {
                continue;
            }
            match Self::read_project(&path) {
                Ok(project) => names.push(project.name().to_string()),
                Err(err) => warn!(path:? = path, err:% = err; "Skipping unreadable project file"),
            }
        }

        names.sort();
        Ok(names)
    }

    fn remove(&mut self, name: &str) -> Result<bool, SluglineError> {
        let Some((path, _)) = self.find(name)? else {
            return Ok(false);
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(name = name, path:? = path; "Removed project");
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
