//! The formatted screenplay view.

use std::fmt::Write as _;

use log::debug;

use slugline_core::{
    element::{Element, ElementKind, TitleField},
    script::Script,
};

use super::escape;

/// Render a script as an HTML screenplay.
///
/// Title fields are gathered into a leading title page header; every other
/// element becomes one `<div class="element <kind>">`, so the output has
/// exactly one body line per non-title source line.
pub fn render(script: &Script) -> String {
    let mut out = String::from("<article class=\"screenplay\">\n");

    let titles: Vec<&Element> = script
        .iter()
        .filter(|element| element.is(ElementKind::Title))
        .collect();
    if !titles.is_empty() {
        out.push_str("<header class=\"title-page\">\n");
        for element in &titles {
            let text = escape(element.text());
            match element.prefix() {
                Some(TitleField::Author) => {
                    let _ = writeln!(out, "<p class=\"author\">{text}</p>");
                }
                _ => {
                    let _ = writeln!(out, "<h1 class=\"title\">{text}</h1>");
                }
            }
        }
        out.push_str("</header>\n");
    }

    for element in script
        .iter()
        .filter(|element| !element.is(ElementKind::Title))
    {
        render_element(&mut out, element);
    }

    out.push_str("</article>\n");

    debug!(elements = script.len(), bytes = out.len(); "Rendered screenplay view");
    out
}

fn render_element(out: &mut String, element: &Element) {
    let kind = element.kind();
    let text = escape(element.text());

    match (element.scene_id(), element.scene_number()) {
        (Some(id), Some(number)) => {
            let _ = writeln!(
                out,
                "<div class=\"element {kind}\" id=\"{id}\"><span class=\"scene-number\">{number}</span>{text}</div>"
            );
        }
        (Some(id), None) => {
            let _ = writeln!(out, "<div class=\"element {kind}\" id=\"{id}\">{text}</div>");
        }
        _ => {
            let _ = writeln!(out, "<div class=\"element {kind}\">{text}</div>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_lines(html: &str) -> Vec<&str> {
        html.lines()
            .filter(|line| line.starts_with("<div"))
            .collect()
    }

    #[test]
    fn test_one_div_per_element() {
        let script = slugline_parser::classify("INT. OFFICE - DAY\n\nJOHN\nHello there.\n", true);
        let html = render(&script);

        assert_eq!(
            body_lines(&html),
            [
                "<div class=\"element scene_heading\" id=\"scene-1\"><span class=\"scene-number\">1</span>INT. OFFICE - DAY</div>",
                "<div class=\"element empty\"></div>",
                "<div class=\"element character\">JOHN</div>",
                "<div class=\"element dialogue\">Hello there.</div>",
            ]
        );
        assert!(html.starts_with("<article class=\"screenplay\">"));
        assert!(html.ends_with("</article>\n"));
        assert!(!html.contains("title-page"));
    }

    #[test]
    fn test_unnumbered_heading_keeps_anchor() {
        let script = slugline_parser::classify("EXT. FIELD - DAY", false);
        let html = render(&script);

        assert_eq!(
            body_lines(&html),
            ["<div class=\"element scene_heading\" id=\"scene-1\">EXT. FIELD - DAY</div>"]
        );
    }

    #[test]
    fn test_title_page_header() {
        let script = slugline_parser::classify("TITLE: MY FILM\nAUTHOR: Jane <Doe>\n\nFADE IN:", true);
        let html = render(&script);

        assert!(html.contains("<header class=\"title-page\">\n<h1 class=\"title\">MY FILM</h1>\n<p class=\"author\">Jane &lt;Doe&gt;</p>\n</header>\n"));
        assert_eq!(body_lines(&html).len(), 2);
    }

    #[test]
    fn test_text_is_escaped() {
        let script = slugline_parser::classify("Tom & Jerry <run>.", true);
        let html = render(&script);

        assert!(html.contains("<div class=\"element action\">Tom &amp; Jerry &lt;run&gt;.</div>"));
    }
}
