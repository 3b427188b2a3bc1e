//! The line classifier.
//!
//! Every line is classified on its own, with a single line of lookback
//! (the previously emitted element) and lookahead (the next non-blank
//! line). Rules are tried in a fixed order and the first one that matches
//! decides the line's type; a line that matches nothing is action.
//!
//! | Order | Rule          | Condition (on the trimmed line)                        |
//! |-------|---------------|--------------------------------------------------------|
//! | 1     | empty         | blank                                                  |
//! | 2     | title         | one of the first ten lines, starts with `TITLE:`/`AUTHOR:` |
//! | 3     | scene heading | `INT.`, `EXT.`, `INT./EXT.` followed by whitespace     |
//! | 4     | transition    | known phrase, or upper-case ending `TO:` under 25 chars |
//! | 5     | character     | cue-shaped and the next non-blank line is not cue-shaped |
//! | 6     | parenthetical | wrapped in `(` `)`                                     |
//! | 7     | dialogue      | directly after a cue, or after a cue's parenthetical   |
//! | 8     | action        | anything else                                          |

use log::trace;

use slugline_core::{
    element::{Element, ElementKind, Origin, SceneId},
    script::Script,
};

use crate::{
    lines::{Line, split_lines},
    matchers,
};

/// Only lines with an index below this can be title fields.
const TITLE_PAGE_LINES: usize = 10;

/// Classifies one document. A classifier is single-use; its scene counter
/// starts at zero for every document.
pub(crate) struct Classifier<'src> {
    lines: Vec<Line<'src>>,
    /// For each line, the index of the next non-blank line after it.
    next_content: Vec<Option<usize>>,
    scene_numbers: bool,
    scene_count: u32,
    elements: Vec<Element>,
}

impl<'src> Classifier<'src> {
    pub fn new(source: &'src str, scene_numbers: bool) -> Self {
        let lines = split_lines(source);
        let next_content = next_content_lines(&lines);

        Self {
            elements: Vec::with_capacity(lines.len()),
            lines,
            next_content,
            scene_numbers,
            scene_count: 0,
        }
    }

    pub fn run(mut self) -> Script {
        for idx in 0..self.lines.len() {
            let element = self.classify_line(idx);
            trace!(
                line = element.line(),
                kind = element.kind().as_str(),
                text = element.text();
                "Classified line"
            );
            self.elements.push(element);
        }

        Script::new(self.elements, self.scene_numbers)
    }

    fn classify_line(&mut self, idx: usize) -> Element {
        let line = self.lines[idx];
        let trimmed = line.trimmed();
        let origin = Origin::new(line.index(), line.span(), line.text());

        if line.is_blank() {
            return Element::empty(origin);
        }

        if idx < TITLE_PAGE_LINES {
            if let Some((field, rest)) = matchers::title_field(line.text()) {
                return Element::title(field, rest.trim(), origin);
            }
        }

        if matchers::is_scene_heading(trimmed) {
            self.scene_count += 1;
            let number = self.scene_numbers.then_some(self.scene_count);
            return Element::scene_heading(
                SceneId::new(self.scene_count),
                number,
                trimmed.to_uppercase(),
                origin,
            );
        }

        if matchers::is_transition(trimmed) {
            return Element::transition(trimmed.to_uppercase(), origin);
        }

        if matchers::is_character_shape(trimmed) && self.cue_confirmed(idx) {
            return Element::character(trimmed, origin);
        }

        if matchers::is_parenthetical(trimmed) {
            return Element::parenthetical(trimmed, origin);
        }

        if self.follows_cue() {
            return Element::dialogue(trimmed, origin);
        }

        Element::action(trimmed, origin)
    }

    /// A cue-shaped line only becomes a cue when the next non-blank line
    /// does not look like another heading, transition or cue. At the end of
    /// the document there is nothing to confirm it.
    fn cue_confirmed(&self, idx: usize) -> bool {
        let Some(next_idx) = self.next_content[idx] else {
            return false;
        };
        let next = self.lines[next_idx].trimmed();

        !matchers::is_scene_heading(next)
            && !(matchers::is_upper(next) && matchers::is_transition(next))
            && !matchers::is_shouted(next)
    }

    /// Whether the previous element opens a dialogue block: a cue, or a
    /// parenthetical directly under a cue.
    fn follows_cue(&self) -> bool {
        match self.elements.as_slice() {
            [.., last] if last.is(ElementKind::Character) => true,
            [.., before, last] => {
                last.is(ElementKind::Parenthetical) && before.is(ElementKind::Character)
            }
            _ => false,
        }
    }
}

/// Index of the next non-blank line after each line, in one backward pass.
fn next_content_lines(lines: &[Line<'_>]) -> Vec<Option<usize>> {
    let mut next = vec![None; lines.len()];
    let mut upcoming = None;

    for (idx, line) in lines.iter().enumerate().rev() {
        next[idx] = upcoming;
        if !line.is_blank() {
            upcoming = Some(idx);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_content_skips_blank_lines() {
        let lines = split_lines("A\n\n  \nB\nC\n\n");
        assert_eq!(
            next_content_lines(&lines),
            [Some(3), Some(3), Some(3), Some(4), None, None]
        );
    }

    #[test]
    fn test_classifier_resets_per_document() {
        let first = Classifier::new("INT. A - DAY\nEXT. B - DAY", true).run();
        let second = Classifier::new("INT. C - DAY", true).run();

        assert_eq!(first.elements()[1].scene_number(), Some(2));
        assert_eq!(second.elements()[0].scene_number(), Some(1));
    }
}
