//! The scene-card view.

use std::fmt::Write as _;

use log::debug;

use slugline_core::script::Script;

use super::escape;

/// Render one index card per scene.
///
/// Each card shows the scene number (when numbering is on), the heading,
/// and the scene's action text cut to `summary_chars` characters.
pub fn render(script: &Script, summary_chars: usize) -> String {
    let scenes = script.scenes();
    let mut out = String::from("<div class=\"cards\">\n");

    if scenes.is_empty() {
        out.push_str("<p class=\"no-scenes\">No scenes yet.</p>\n");
    }

    for scene in &scenes {
        let _ = writeln!(out, "<section class=\"card\" data-scene=\"{}\">", scene.id());
        if let Some(number) = scene.number() {
            let _ = writeln!(out, "<span class=\"scene-number\">{number}</span>");
        }
        let _ = writeln!(
            out,
            "<h2 class=\"heading\">{}</h2>",
            escape(scene.heading().text())
        );
        let summary = scene.summary(summary_chars);
        if !summary.is_empty() {
            let _ = writeln!(out, "<p class=\"summary\">{}</p>", escape(&summary));
        }
        out.push_str("</section>\n");
    }

    out.push_str("</div>\n");

    debug!(cards = scenes.len(); "Rendered scene cards");
    out
}
