//! Splitting source text into spanned lines.
//!
//! Lines are separated by `\n`, with an optional preceding `\r` treated as
//! part of the terminator. A terminator at the very end of the input does
//! not open a new line, so `"CUT TO:\n"` is a single line and the empty
//! string has none.

use slugline_core::span::Span;

/// One line of source text, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'src> {
    index: usize,
    span: Span,
    text: &'src str,
}

impl<'src> Line<'src> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The verbatim line content.
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// The line content with surrounding whitespace removed.
    pub fn trimmed(&self) -> &'src str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Split `source` into lines with their byte spans.
pub(crate) fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;

    while start < source.len() {
        let rest = &source[start..];
        let (content_len, terminator_len) = match rest.find('\n') {
            Some(pos) if pos > 0 && rest.as_bytes()[pos - 1] == b'\r' => (pos - 1, 2),
            Some(pos) => (pos, 1),
            None => (rest.len(), 0),
        };

        let end = start + content_len;
        lines.push(Line {
            index: lines.len(),
            span: Span::new(start..end),
            text: &source[start..end],
        });
        start = end + terminator_len;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        split_lines(source).iter().map(Line::text).collect()
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_trailing_newline_does_not_open_a_line() {
        assert_eq!(texts("CUT TO:\n"), ["CUT TO:"]);
        assert_eq!(texts("a\n\n"), ["a", ""]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(texts("a\n\nb"), ["a", "", "b"]);
        assert_eq!(texts("\n"), [""]);
    }

    #[test]
    fn test_crlf_terminators() {
        let lines = split_lines("ab\r\ncd\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "ab");
        assert_eq!(lines[1].text(), "cd");
        assert_eq!(lines[1].span(), Span::new(4..6));
    }

    #[test]
    fn test_lone_carriage_return_stays_in_line() {
        assert_eq!(texts("a\rb"), ["a\rb"]);
    }

    #[test]
    fn test_spans_slice_back_to_text() {
        let source = "INT. HOUSE\n  \nJOHN\nHi.";
        for line in split_lines(source) {
            assert_eq!(&source[line.span().range()], line.text());
        }
    }

    #[test]
    fn test_indices_are_sequential() {
        let lines = split_lines("x\ny\nz");
        let indices: Vec<_> = lines.iter().map(Line::index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_blank_detection() {
        let lines = split_lines(" \t \nword");
        assert!(lines[0].is_blank());
        assert!(!lines[1].is_blank());
        assert_eq!(lines[1].trimmed(), "word");
    }
}
