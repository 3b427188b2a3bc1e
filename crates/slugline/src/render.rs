//! Screen views over a classified script.
//!
//! Both views are HTML fragments meant to be embedded by an editor
//! surface; styling is left to the embedding page, which keys off the
//! `element <kind>` class names.
//!
//! - [`html`] - the formatted screenplay view
//! - [`cards`] - the scene-card (index card) view

pub mod cards;
pub mod html;

/// Escape text for inclusion in HTML element content or attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape("<b>\"Tom & Jerry's\"</b>"), "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }
}
