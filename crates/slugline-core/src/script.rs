//! Classified scripts and the scenes derived from them.
//!
//! A [`Script`] is the full, ordered output of one classification run. It
//! is an immutable value: callers re-classify the source text rather than
//! patching a script in place. [`Scene`]s are borrowed views over a run of
//! the script's elements and are never stored.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    element::{Element, ElementKind, SceneId, TitleField},
    span::Span,
};

/// The ordered element sequence produced by classifying a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Script {
    elements: Vec<Element>,
    scene_numbers: bool,
}

impl Script {
    /// Create a script from classified elements.
    ///
    /// # Arguments
    ///
    /// * `elements` - Elements in source line order.
    /// * `scene_numbers` - Whether scene numbering was enabled when classifying.
    pub fn new(elements: Vec<Element>, scene_numbers: bool) -> Self {
        Self {
            elements,
            scene_numbers,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether scene headings in this script carry scene numbers.
    pub fn scene_numbers(&self) -> bool {
        self.scene_numbers
    }

    /// Returns the scenes of the script in document order.
    ///
    /// Each scene starts at a scene heading and runs up to (not including)
    /// the next heading or the end of the document. Elements before the
    /// first heading belong to no scene.
    pub fn scenes(&self) -> Vec<Scene<'_>> {
        let starts: Vec<usize> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.is(ElementKind::SceneHeading))
            .map(|(idx, _)| idx)
            .collect();

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(self.elements.len());
                Scene {
                    elements: &self.elements[start..end],
                }
            })
            .collect()
    }

    /// Looks up a scene by its identifier.
    pub fn scene(&self, id: SceneId) -> Option<Scene<'_>> {
        self.scenes()
            .into_iter()
            .find(|scene| scene.id() == id)
    }

    /// Text of the first title field of the given kind.
    pub fn title_field(&self, field: TitleField) -> Option<&str> {
        self.elements
            .iter()
            .find(|element| element.prefix() == Some(field))
            .map(Element::text)
    }

    /// Text of the first `TITLE:` field.
    pub fn title(&self) -> Option<&str> {
        self.title_field(TitleField::Title)
    }

    /// Text of the first `AUTHOR:` field.
    pub fn author(&self) -> Option<&str> {
        self.title_field(TitleField::Author)
    }

    /// Distinct character cue names in order of first appearance.
    pub fn characters(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.elements
            .iter()
            .filter(|element| element.is(ElementKind::Character))
            .map(Element::text)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Finds the element on the line containing byte `offset`.
    ///
    /// An offset sitting exactly on a line terminator resolves to the line
    /// it terminates. Returns `None` past the end of the last line or inside
    /// a terminator that spans more than one byte.
    pub fn element_at(&self, offset: usize) -> Option<&Element> {
        let idx = self
            .elements
            .partition_point(|element| element.span().end() < offset);
        self.elements
            .get(idx)
            .filter(|element| element.span().contains(offset))
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A scene heading plus the elements that follow it up to the next heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene<'a> {
    /// Never empty; the first element is always the scene heading.
    elements: &'a [Element],
}

impl<'a> Scene<'a> {
    /// The scene heading element.
    pub fn heading(&self) -> &'a Element {
        &self.elements[0]
    }

    pub fn id(&self) -> SceneId {
        self.heading()
            .scene_id()
            .unwrap_or_else(|| SceneId::new(0))
    }

    /// The displayed scene number, if numbering is enabled.
    pub fn number(&self) -> Option<u32> {
        self.heading().scene_number()
    }

    /// All elements of the scene, heading first.
    pub fn elements(&self) -> &'a [Element] {
        self.elements
    }

    /// The action elements of the scene.
    pub fn actions(&self) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements
            .iter()
            .filter(|element| element.is(ElementKind::Action))
    }

    /// Span from the start of the heading to the end of the last element.
    pub fn span(&self) -> Span {
        let first = self.heading().span();
        self.elements
            .last()
            .map_or(first, |last| first.union(last.span()))
    }

    /// Joins the scene's action text into a single line of at most
    /// `max_chars` characters, followed by `…` when truncated.
    pub fn summary(&self, max_chars: usize) -> String {
        let joined = self
            .actions()
            .map(Element::text)
            .collect::<Vec<_>>()
            .join(" ");

        if joined.chars().count() <= max_chars {
            return joined;
        }

        let mut truncated: String = joined.chars().take(max_chars).collect();
        truncated.truncate(truncated.trim_end().len());
        truncated.push('…');
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Origin;

    /// Builds a script by hand, laying lines out as if joined with `\n`.
    fn script(lines: &[(ElementKind, &str)]) -> Script {
        let mut offset = 0;
        let mut scene = 0;
        let mut elements = Vec::new();

        for (line, (kind, text)) in lines.iter().enumerate() {
            let origin = Origin::new(line, Span::new(offset..offset + text.len()), *text);
            offset += text.len() + 1;
            let element = match kind {
                ElementKind::SceneHeading => {
                    scene += 1;
                    Element::scene_heading(SceneId::new(scene), Some(scene), *text, origin)
                }
                ElementKind::Empty => Element::empty(origin),
                ElementKind::Title => Element::title(TitleField::Title, *text, origin),
                ElementKind::Transition => Element::transition(*text, origin),
                ElementKind::Character => Element::character(*text, origin),
                ElementKind::Parenthetical => Element::parenthetical(*text, origin),
                ElementKind::Dialogue => Element::dialogue(*text, origin),
                ElementKind::Action => Element::action(*text, origin),
            };
            elements.push(element);
        }

        Script::new(elements, true)
    }

    fn sample() -> Script {
        script(&[
            (ElementKind::Title, "MY FILM"),
            (ElementKind::Action, "Before anything."),
            (ElementKind::SceneHeading, "INT. OFFICE - DAY"),
            (ElementKind::Action, "Papers everywhere."),
            (ElementKind::Character, "JOHN"),
            (ElementKind::Dialogue, "Hello there."),
            (ElementKind::Action, "He sits."),
            (ElementKind::SceneHeading, "EXT. STREET - NIGHT"),
            (ElementKind::Character, "MARY"),
            (ElementKind::Dialogue, "Late again."),
            (ElementKind::Character, "JOHN"),
        ])
    }

    #[test]
    fn test_scenes_split_at_headings() {
        let script = sample();
        let scenes = script.scenes();

        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].heading().text(), "INT. OFFICE - DAY");
        assert_eq!(scenes[0].elements().len(), 5);
        assert_eq!(scenes[1].elements().len(), 4);
        assert_eq!(scenes[1].id(), SceneId::new(2));
        assert_eq!(scenes[1].number(), Some(2));
    }

    #[test]
    fn test_scene_actions_and_summary() {
        let script = sample();
        let scene = script.scene(SceneId::new(1)).expect("scene 1 exists");

        let actions: Vec<_> = scene.actions().map(Element::text).collect();
        assert_eq!(actions, ["Papers everywhere.", "He sits."]);
        assert_eq!(scene.summary(100), "Papers everywhere. He sits.");
        assert_eq!(scene.summary(7), "Papers…");
    }

    #[test]
    fn test_summary_trims_before_ellipsis() {
        let script = sample();
        let scene = script.scene(SceneId::new(1)).expect("scene 1 exists");
        assert_eq!(scene.summary(19), "Papers everywhere.…");
        assert_eq!(scene.summary(18), "Papers everywhere.…");
        assert_eq!(scene.summary(20), "Papers everywhere. H…");
    }

    #[test]
    fn test_scene_lookup_missing() {
        assert!(sample().scene(SceneId::new(9)).is_none());
    }

    #[test]
    fn test_scene_span_covers_all_elements() {
        let script = sample();
        let scene = script.scene(SceneId::new(2)).expect("scene 2 exists");
        let elements = scene.elements();
        assert_eq!(scene.span().start(), elements[0].span().start());
        assert_eq!(scene.span().end(), elements[3].span().end());
    }

    #[test]
    fn test_characters_in_first_appearance_order() {
        assert_eq!(sample().characters(), ["JOHN", "MARY"]);
    }

    #[test]
    fn test_title_lookup() {
        let script = sample();
        assert_eq!(script.title(), Some("MY FILM"));
        assert_eq!(script.author(), None);
    }

    #[test]
    fn test_element_at_offsets() {
        let script = script(&[
            (ElementKind::Action, "ab"),
            (ElementKind::Empty, ""),
            (ElementKind::Action, "cd"),
        ]);

        assert_eq!(script.element_at(0).map(Element::line), Some(0));
        assert_eq!(script.element_at(2).map(Element::line), Some(0));
        assert_eq!(script.element_at(3).map(Element::line), Some(1));
        assert_eq!(script.element_at(4).map(Element::line), Some(2));
        assert_eq!(script.element_at(6).map(Element::line), Some(2));
        assert_eq!(script.element_at(7), None);
    }

    #[test]
    fn test_empty_script_has_no_scenes() {
        let script = Script::default();
        assert!(script.is_empty());
        assert!(script.scenes().is_empty());
        assert_eq!(script.element_at(0), None);
    }
}
