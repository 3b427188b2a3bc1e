//! Paginated plain-text export.
//!
//! Lays a script out the way a typewritten screenplay is laid out: a
//! monospace grid where each element type sits at a fixed column offset
//! from the left margin and wraps at a fixed width.
//!
//! | Element       | Column | Width            |
//! |---------------|--------|------------------|
//! | scene heading | 0      | page width       |
//! | action        | 0      | page width       |
//! | character     | 22     | page width - 22  |
//! | parenthetical | 16     | 25               |
//! | dialogue      | 10     | 35               |
//! | transition    | right-aligned to the page width |
//!
//! Pages are separated by a form feed. Every page after the first starts
//! with its right-aligned page number and a blank line. When the script
//! has title fields, an unnumbered title page comes first.

use log::{debug, info};

use slugline_core::{
    element::{Element, ElementKind},
    script::Script,
};

use super::{Error, Exporter};
use crate::config::ExportConfig;

const CHARACTER_INDENT: usize = 22;
const PARENTHETICAL_INDENT: usize = 16;
const PARENTHETICAL_WIDTH: usize = 25;
const DIALOGUE_INDENT: usize = 10;
const DIALOGUE_WIDTH: usize = 35;

const MIN_LINES_PER_PAGE: usize = 10;
const MIN_PAGE_WIDTH: usize = 60;

const FORM_FEED: char = '\x0c';

/// Plain-text screenplay exporter.
#[derive(Debug, Clone)]
pub struct TextExporter {
    lines_per_page: usize,
    page_width: usize,
}

impl TextExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            lines_per_page: config.lines_per_page(),
            page_width: config.page_width(),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.lines_per_page < MIN_LINES_PER_PAGE {
            return Err(Error::Render(format!(
                "lines_per_page must be at least {MIN_LINES_PER_PAGE}, got {}",
                self.lines_per_page
            )));
        }
        if self.page_width < MIN_PAGE_WIDTH {
            return Err(Error::Render(format!(
                "page_width must be at least {MIN_PAGE_WIDTH}, got {}",
                self.page_width
            )));
        }
        Ok(())
    }

    fn title_page(&self, script: &Script) -> Option<Vec<String>> {
        let title = script.title();
        let author = script.author();
        if title.is_none() && author.is_none() {
            return None;
        }

        let mut lines = vec![String::new(); self.lines_per_page / 3];
        if let Some(title) = title {
            for line in wrap(title, self.page_width) {
                lines.push(self.center(&line));
            }
        }
        if let Some(author) = author {
            lines.push(String::new());
            lines.push(self.center("by"));
            lines.push(String::new());
            for line in wrap(author, self.page_width) {
                lines.push(self.center(&line));
            }
        }

        Some(lines)
    }

    fn body_lines(&self, script: &Script) -> Vec<String> {
        let mut lines = Vec::new();

        for element in script {
            match element.kind() {
                ElementKind::Title => {}
                ElementKind::Empty => lines.push(String::new()),
                ElementKind::SceneHeading => {
                    push_block(&mut lines, &heading_text(element), 0, self.page_width);
                }
                ElementKind::Action => {
                    push_block(&mut lines, element.text(), 0, self.page_width);
                }
                ElementKind::Character => push_block(
                    &mut lines,
                    element.text(),
                    CHARACTER_INDENT,
                    self.page_width - CHARACTER_INDENT,
                ),
                ElementKind::Parenthetical => push_block(
                    &mut lines,
                    element.text(),
                    PARENTHETICAL_INDENT,
                    PARENTHETICAL_WIDTH,
                ),
                ElementKind::Dialogue => push_block(
                    &mut lines,
                    element.text(),
                    DIALOGUE_INDENT,
                    DIALOGUE_WIDTH,
                ),
                ElementKind::Transition => {
                    lines.push(format!("{:>width$}", element.text(), width = self.page_width));
                }
            }
        }

        lines
    }

    /// Splits body lines into pages, adding page number headers and
    /// dropping blank lines that would open a page.
    fn paginate(&self, body: Vec<String>) -> Vec<Vec<String>> {
        let mut pages: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in body {
            if current.len() == self.lines_per_page {
                pages.push(std::mem::take(&mut current));
            }
            if !pages.is_empty() && current.is_empty() {
                if line.is_empty() {
                    continue;
                }
                let number = format!("{}.", pages.len() + 1);
                current.push(format!("{number:>width$}", width = self.page_width));
                current.push(String::new());
            }
            current.push(line);
        }

        if !current.is_empty() {
            pages.push(current);
        }

        pages
    }

    fn center(&self, text: &str) -> String {
        let pad = self.page_width.saturating_sub(text.chars().count()) / 2;
        format!("{}{text}", " ".repeat(pad))
    }
}

impl Exporter for TextExporter {
    type Output = String;

    fn export(&self, script: &Script) -> Result<String, Error> {
        self.validate()?;
        info!(
            lines_per_page = self.lines_per_page,
            page_width = self.page_width;
            "Exporting plain text"
        );

        let mut pages = Vec::new();
        if let Some(title_page) = self.title_page(script) {
            pages.push(title_page);
        }
        let body_pages = self.paginate(self.body_lines(script));
        debug!(body_pages = body_pages.len(); "Paginated script");
        pages.extend(body_pages);

        let rendered: Vec<String> = pages
            .iter()
            .map(|page| {
                let mut text = page.join("\n");
                text.push('\n');
                text
            })
            .collect();

        Ok(rendered.join(&FORM_FEED.to_string()))
    }
}

fn heading_text(element: &Element) -> String {
    match element.scene_number() {
        Some(number) => format!("{number}. {}", element.text()),
        None => element.text().to_string(),
    }
}

fn push_block(lines: &mut Vec<String>, text: &str, indent: usize, width: usize) {
    for line in wrap(text, width) {
        if line.is_empty() {
            lines.push(line);
        } else {
            lines.push(format!("{}{line}", " ".repeat(indent)));
        }
    }
}

/// Greedy word wrap to `width` characters. Words longer than the width are
/// split. Always returns at least one (possibly empty) line.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}
