//! Editor state machine.
//!
//! The editor surface is modeled as a value ([`EditorState`]) and a pure
//! transition function ([`update`]). Commands from the surface go in; the
//! next state and a list of [`Effect`] descriptors come out. Performing the
//! effects (rendering a view, writing a project, exporting) is up to the
//! host, which keeps this module free of I/O and global state.
//!
//! # Example
//!
//! ```
//! use slugline::editor::{Command, EditorState, Effect, View, update};
//!
//! let state = EditorState::new();
//! let transition = update(state, Command::Edit("INT. OFFICE - DAY".into()));
//!
//! assert!(transition.state.is_dirty());
//! assert_eq!(transition.effects, [Effect::Render(View::Script)]);
//! ```

use std::fmt;

use log::debug;

use slugline_core::{element::SceneId, project::Project, script::Script, span::Span};

/// Default font size of the editor surface, in points.
pub const DEFAULT_FONT_SIZE: u8 = 12;
pub const MIN_FONT_SIZE: u8 = 8;
pub const MAX_FONT_SIZE: u8 = 32;

const UNTITLED: &str = "Untitled";

/// The view shown by the editor surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    /// Formatted screenplay.
    #[default]
    Script,
    /// Scene cards.
    Cards,
    /// Raw source text.
    Source,
}

/// Output formats the editor can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Paginated plain text.
    Text,
    /// One text file per scene.
    Scenes,
    /// Screenplay view markup.
    Html,
    /// Scene card markup.
    Cards,
    /// Classified elements as JSON.
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Scenes => "scenes",
            Self::Html => "html",
            Self::Cards => "cards",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the editor surface needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    text: String,
    scene_numbers: bool,
    view: View,
    font_size: u8,
    name: String,
    author: String,
    dirty: bool,
}

impl EditorState {
    /// An empty, clean, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `project` with the default view and font size.
    pub fn from_project(project: &Project) -> Self {
        Self {
            text: project.text().to_string(),
            scene_numbers: project.scene_numbers(),
            name: project.name().to_string(),
            author: project.author().to_string(),
            ..Self::default()
        }
    }

    /// The project this state would persist.
    pub fn to_project(&self) -> Project {
        Project::new(self.name.as_str(), self.text.as_str())
            .with_author(self.author.as_str())
            .with_scene_numbers(self.scene_numbers)
    }

    /// Classifies the current text.
    pub fn script(&self) -> Script {
        slugline_parser::classify(&self.text, self.scene_numbers)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scene_numbers(&self) -> bool {
        self.scene_numbers
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether there are changes since the last save or load.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            text: String::new(),
            scene_numbers: true,
            view: View::default(),
            font_size: DEFAULT_FONT_SIZE,
            name: UNTITLED.to_string(),
            author: String::new(),
            dirty: false,
        }
    }
}

/// Input from the editor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the document text.
    Edit(String),
    SetView(View),
    ToggleSceneNumbers,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Rename the project. Blank names are ignored.
    Rename(String),
    SetAuthor(String),
    Save,
    /// Replace the document with a stored project.
    Load(Project),
    Export(ExportFormat),
    /// Show the given scene in the script view.
    JumpToScene(SceneId),
}

/// Work requested of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the given view from the current state.
    Render(View),
    /// Write the project to the store.
    Persist(Project),
    /// Produce the document in the given format.
    Export(ExportFormat),
    /// Scroll the script view to the given source range.
    ScrollTo(Span),
}

/// The result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: EditorState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn new(state: EditorState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    fn quiet(state: EditorState) -> Self {
        Self::new(state, Vec::new())
    }
}

/// Applies `command` to `state`.
pub fn update(mut state: EditorState, command: Command) -> Transition {
    debug!(command = command_name(&command); "Editor command");

    match command {
        Command::Edit(text) => {
            if text == state.text {
                return Transition::quiet(state);
            }
            state.text = text;
            state.dirty = true;
            let view = state.view;
            Transition::new(state, vec![Effect::Render(view)])
        }
        Command::SetView(view) => {
            if view == state.view {
                return Transition::quiet(state);
            }
            state.view = view;
            Transition::new(state, vec![Effect::Render(view)])
        }
        Command::ToggleSceneNumbers => {
            state.scene_numbers = !state.scene_numbers;
            state.dirty = true;
            let view = state.view;
            Transition::new(state, vec![Effect::Render(view)])
        }
        Command::ZoomIn => {
            state.font_size = (state.font_size + 1).min(MAX_FONT_SIZE);
            Transition::quiet(state)
        }
        Command::ZoomOut => {
            state.font_size = state.font_size.saturating_sub(1).max(MIN_FONT_SIZE);
            Transition::quiet(state)
        }
        Command::ResetZoom => {
            state.font_size = DEFAULT_FONT_SIZE;
            Transition::quiet(state)
        }
        Command::Rename(name) => {
            let name = name.trim();
            if !name.is_empty() && name != state.name {
                state.name = name.to_string();
                state.dirty = true;
            }
            Transition::quiet(state)
        }
        Command::SetAuthor(author) => {
            if author != state.author {
                state.author = author;
                state.dirty = true;
            }
            Transition::quiet(state)
        }
        Command::Save => {
            state.dirty = false;
            let project = state.to_project();
            Transition::new(state, vec![Effect::Persist(project)])
        }
        Command::Load(project) => {
            let loaded = EditorState {
                view: state.view,
                font_size: state.font_size,
                ..EditorState::from_project(&project)
            };
            let view = loaded.view;
            Transition::new(loaded, vec![Effect::Render(view)])
        }
        Command::Export(format) => Transition::new(state, vec![Effect::Export(format)]),
        Command::JumpToScene(id) => {
            let span = match state.script().scene(id) {
                Some(scene) => scene.heading().span(),
                None => {
                    debug!(scene:% = id; "Jump to unknown scene ignored");
                    return Transition::quiet(state);
                }
            };

            let mut effects = Vec::new();
            if state.view != View::Script {
                state.view = View::Script;
                effects.push(Effect::Render(View::Script));
            }
            effects.push(Effect::ScrollTo(span));
            Transition::new(state, effects)
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Edit(_) => "edit",
        Command::SetView(_) => "set_view",
        Command::ToggleSceneNumbers => "toggle_scene_numbers",
        Command::ZoomIn => "zoom_in",
        Command::ZoomOut => "zoom_out",
        Command::ResetZoom => "reset_zoom",
        Command::Rename(_) => "rename",
        Command::SetAuthor(_) => "set_author",
        Command::Save => "save",
        Command::Load(_) => "load",
        Command::Export(_) => "export",
        Command::JumpToScene(_) => "jump_to_scene",
    }
}
