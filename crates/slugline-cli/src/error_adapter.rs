//! Rendering of [`SluglineError`] through miette.
//!
//! Project file errors carry one or more diagnostics with spans into the
//! file text; each becomes its own report with a source snippet. Every
//! other error becomes a single report with a `slugline::<kind>` code and,
//! where there is something the user can do about it, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use slugline::{SluglineError, export};
use slugline_parser::{Span, error::Diagnostic};

const STORE_HELP: &str = "check that the project directory exists and is writable";
const LAYOUT_HELP: &str =
    "page geometry is set in the [export] section of config.toml (lines_per_page, page_width)";
const SCENES_HELP: &str = "pass an output directory with -o when exporting scenes";

/// One report for the CLI to render.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A project file diagnostic with the file text it points into.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// An error without source location.
    Error(&'a SluglineError),
}

impl Reportable<'_> {
    fn hint(&self) -> Option<String> {
        match self {
            Reportable::Diagnostic { diag, .. } => Some(match (diag.help(), diag.code()) {
                (Some(help), _) => help.to_string(),
                (None, Some(code)) => format!("{code}: {}", code.description()),
                (None, None) => return None,
            }),
            Reportable::Error(SluglineError::Store(_)) => Some(STORE_HELP.to_string()),
            Reportable::Error(SluglineError::Export(err)) => {
                match err.downcast_ref::<export::Error>() {
                    Some(export::Error::Render(msg)) if msg.contains("output directory") => {
                        Some(SCENES_HELP.to_string())
                    }
                    Some(export::Error::Render(_)) => Some(LAYOUT_HELP.to_string()),
                    _ => None,
                }
            }
            Reportable::Error(_) => None,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Reportable::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic { .. } => None,
            Reportable::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            Reportable::Diagnostic { diag, .. } => {
                return diag.code().map(|c| Box::new(c) as Box<dyn fmt::Display>);
            }
            Reportable::Error(SluglineError::Io(_)) => "slugline::io",
            Reportable::Error(SluglineError::Parse { .. }) => "slugline::project",
            Reportable::Error(SluglineError::Store(_)) => "slugline::store",
            Reportable::Error(SluglineError::Export(_)) => "slugline::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.hint().map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Reportable::Diagnostic { src, .. } => Some(src as &dyn SourceCode),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Reportable::Diagnostic { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Splits an error into the reports to render, one per project file
/// diagnostic or a single report otherwise.
pub fn to_reportables(err: &SluglineError) -> Vec<Reportable<'_>> {
    match err {
        SluglineError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic { diag, src })
            .collect(),
        _ => vec![Reportable::Error(err)],
    }
}
