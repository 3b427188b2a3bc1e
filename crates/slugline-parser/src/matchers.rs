//! Line-shape recognizers used by the classifier.
//!
//! Prefix matching is written with winnow combinators over `&str`; the
//! remaining checks are plain predicates over the trimmed line text.

use winnow::{
    Parser as _,
    ascii::Caseless,
    combinator::{alt, opt},
    error::ModalResult,
    token::one_of,
};

use slugline_core::element::TitleField;

/// Transition phrases recognized regardless of case.
pub(crate) const TRANSITIONS: [&str; 8] = [
    "CUT TO:",
    "DISSOLVE TO:",
    "FADE TO BLACK.",
    "FADE OUT.",
    "FADE IN:",
    "SMASH CUT TO:",
    "MATCH CUT TO:",
    "JUMP CUT TO:",
];

/// Leading words that keep an upper-case line from being a character cue.
const RESERVED_PREFIXES: [&str; 8] = [
    "FADE", "CUT", "DISSOLVE", "SMASH", "MATCH", "JUMP", "INT", "EXT",
];

/// Heuristic transitions must be shorter than this many chars.
const MAX_TRANSITION_CHARS: usize = 25;

/// Character cues (and the lines that veto them) must be shorter than this.
const MAX_CUE_CHARS: usize = 50;

/// `INT.`, `EXT.`, `INT./EXT.` or `INT/EXT`, period optional, then whitespace.
fn scene_heading_prefix(input: &mut &str) -> ModalResult<()> {
    (
        alt((
            Caseless("int./ext"),
            Caseless("int/ext"),
            Caseless("int"),
            Caseless("ext"),
        )),
        opt('.'),
        one_of(char::is_whitespace),
    )
        .void()
        .parse_next(input)
}

/// The case-sensitive title page prefixes.
fn title_prefix(input: &mut &str) -> ModalResult<TitleField> {
    alt((
        TitleField::Title.prefix().value(TitleField::Title),
        TitleField::Author.prefix().value(TitleField::Author),
    ))
    .parse_next(input)
}

/// Matches a title field at the very start of `line`, returning the field
/// and the text after the prefix.
pub(crate) fn title_field(line: &str) -> Option<(TitleField, &str)> {
    let mut input = line;
    let field = title_prefix.parse_next(&mut input).ok()?;
    Some((field, input))
}

pub(crate) fn is_scene_heading(trimmed: &str) -> bool {
    let mut input = trimmed;
    scene_heading_prefix.parse_next(&mut input).is_ok()
}

/// True when upper-casing leaves the text unchanged.
///
/// Text with no cased letters at all (digits, punctuation) counts.
pub(crate) fn is_upper(text: &str) -> bool {
    text.to_uppercase() == text
}

pub(crate) fn is_transition(trimmed: &str) -> bool {
    let upper = trimmed.to_uppercase();
    if TRANSITIONS.contains(&upper.as_str()) {
        return true;
    }

    upper == trimmed
        && trimmed.ends_with("TO:")
        && trimmed.chars().count() < MAX_TRANSITION_CHARS
}

/// An upper-case line short enough to be a cue and free of periods.
///
/// This is the shape that, on the line following a candidate cue, vetoes
/// the candidate.
pub(crate) fn is_shouted(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && is_upper(trimmed)
        && trimmed.chars().count() < MAX_CUE_CHARS
        && !trimmed.contains('.')
}

/// The shape of a character cue, before considering the following line.
pub(crate) fn is_character_shape(trimmed: &str) -> bool {
    is_shouted(trimmed)
        && !trimmed.ends_with(':')
        && !RESERVED_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
}

pub(crate) fn is_parenthetical(trimmed: &str) -> bool {
    trimmed.starts_with('(') && trimmed.ends_with(')')
}
