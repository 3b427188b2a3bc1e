//! Classified screenplay elements.
//!
//! An [`Element`] is one line of source text together with the type the
//! classifier assigned to it. Elements are only built through the
//! kind-specific constructors, so scene metadata can only appear on scene
//! headings and a title prefix only on title fields.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::span::Span;

/// The type assigned to a line of screenplay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A title page field (`TITLE:` or `AUTHOR:`).
    Title,
    /// A blank line.
    Empty,
    /// A scene heading such as `INT. OFFICE - DAY`.
    SceneHeading,
    /// An editing direction such as `CUT TO:`.
    Transition,
    /// The name of the speaker of the following dialogue.
    Character,
    /// An inline stage direction in parentheses.
    Parenthetical,
    /// Spoken lines following a character cue.
    Dialogue,
    /// Prose description; the fallback type.
    Action,
}

impl ElementKind {
    /// Returns the snake_case name of the kind (e.g. `"scene_heading"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Title => "title",
            ElementKind::Empty => "empty",
            ElementKind::SceneHeading => "scene_heading",
            ElementKind::Transition => "transition",
            ElementKind::Character => "character",
            ElementKind::Parenthetical => "parenthetical",
            ElementKind::Dialogue => "dialogue",
            ElementKind::Action => "action",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The title page field a `title` element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TitleField {
    #[serde(rename = "TITLE:")]
    Title,
    #[serde(rename = "AUTHOR:")]
    Author,
}

impl TitleField {
    /// The literal, case-sensitive prefix that introduces this field.
    pub fn prefix(&self) -> &'static str {
        match self {
            TitleField::Title => "TITLE:",
            TitleField::Author => "AUTHOR:",
        }
    }
}

impl fmt::Display for TitleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Identifier of a scene, derived from its 1-based ordinal in the document.
///
/// Unlike the displayed scene number, the identifier exists whether or not
/// scene numbering is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SceneId(u32);

impl SceneId {
    /// Create the identifier for the scene at `ordinal` (1-based).
    pub fn new(ordinal: u32) -> Self {
        Self(ordinal)
    }

    /// The 1-based position of the scene in its document.
    pub fn ordinal(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene-{}", self.0)
    }
}

impl Serialize for SceneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Where an element came from in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Origin {
    /// 0-based line index.
    line: usize,
    /// Byte span of the line content.
    span: Span,
    /// The verbatim line, whitespace and case preserved.
    original: String,
}

impl Origin {
    /// Create a new origin for the line at `line` covering `span`.
    pub fn new(line: usize, span: Span, original: impl Into<String>) -> Self {
        Self {
            line,
            span,
            original: original.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

/// One classified unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    #[serde(rename = "type")]
    kind: ElementKind,
    text: String,
    #[serde(flatten)]
    origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    scene_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scene_id: Option<SceneId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<TitleField>,
}

impl Element {
    /// A blank line. Its text is always empty.
    pub fn empty(origin: Origin) -> Self {
        Self::plain(ElementKind::Empty, String::new(), origin)
    }

    /// A title page field with the prefix already stripped from `text`.
    pub fn title(field: TitleField, text: impl Into<String>, origin: Origin) -> Self {
        Self {
            prefix: Some(field),
            ..Self::plain(ElementKind::Title, text, origin)
        }
    }

    /// A scene heading. `number` is `None` when scene numbering is disabled.
    pub fn scene_heading(
        id: SceneId,
        number: Option<u32>,
        text: impl Into<String>,
        origin: Origin,
    ) -> Self {
        Self {
            scene_id: Some(id),
            scene_number: number,
            ..Self::plain(ElementKind::SceneHeading, text, origin)
        }
    }

    pub fn transition(text: impl Into<String>, origin: Origin) -> Self {
        Self::plain(ElementKind::Transition, text, origin)
    }

    pub fn character(text: impl Into<String>, origin: Origin) -> Self {
        Self::plain(ElementKind::Character, text, origin)
    }

    pub fn parenthetical(text: impl Into<String>, origin: Origin) -> Self {
        Self::plain(ElementKind::Parenthetical, text, origin)
    }

    pub fn dialogue(text: impl Into<String>, origin: Origin) -> Self {
        Self::plain(ElementKind::Dialogue, text, origin)
    }

    pub fn action(text: impl Into<String>, origin: Origin) -> Self {
        Self::plain(ElementKind::Action, text, origin)
    }

    fn plain(kind: ElementKind, text: impl Into<String>, origin: Origin) -> Self {
        Self {
            kind,
            text: text.into(),
            origin,
            scene_number: None,
            scene_id: None,
            prefix: None,
        }
    }

    /// The classified type of this element.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Normalized display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The verbatim source line.
    pub fn original(&self) -> &str {
        self.origin.original()
    }

    /// 0-based index of the source line.
    pub fn line(&self) -> usize {
        self.origin.line()
    }

    /// Byte span of the source line content.
    pub fn span(&self) -> Span {
        self.origin.span()
    }

    /// Sequential scene number, present only on numbered scene headings.
    pub fn scene_number(&self) -> Option<u32> {
        self.scene_number
    }

    /// Scene identifier, present on every scene heading.
    pub fn scene_id(&self) -> Option<SceneId> {
        self.scene_id
    }

    /// Title page field, present only on title elements.
    pub fn prefix(&self) -> Option<TitleField> {
        self.prefix
    }

    /// Returns `true` if this element is of the given kind.
    pub fn is(&self, kind: ElementKind) -> bool {
        self.kind == kind
    }
}
