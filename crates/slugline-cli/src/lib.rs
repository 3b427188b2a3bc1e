//! CLI logic for the Slugline screenplay tool.
//!
//! Reads a screenplay (or a `.toml` project file), classifies it, and
//! writes the requested output format to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::{
    fs,
    io::{self, Write as _},
    path::Path,
};

use log::info;

use slugline::{
    ScriptBuilder, SluglineError,
    editor::ExportFormat,
    export::{self, scenes::write_bundle},
};

const STDOUT: &str = "-";

/// Run the Slugline CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SluglineError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Project file errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), SluglineError> {
    let format = ExportFormat::from(args.format);
    info!(
        input_path = args.input,
        output_path = args.output,
        format:% = format;
        "Processing screenplay"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let text = if is_project_file(&args.input) {
        let project = ScriptBuilder::new(app_config.clone()).load_project(&source)?;
        app_config = app_config.with_scene_numbers(project.scene_numbers());
        project.text().to_string()
    } else {
        source
    };
    if args.no_scene_numbers {
        app_config = app_config.with_scene_numbers(false);
    }

    let builder = ScriptBuilder::new(app_config);
    let script = builder.classify(&text);

    let document = match format {
        ExportFormat::Html => builder.render_html(&script),
        ExportFormat::Cards => builder.render_cards(&script),
        ExportFormat::Json => builder.render_json(&script)?,
        ExportFormat::Text => builder.export_text(&script)?,
        ExportFormat::Scenes => {
            if args.output == STDOUT {
                return Err(export::Error::Render(
                    "scene export needs an output directory (-o <dir>)".to_string(),
                )
                .into());
            }
            let files = builder.export_scenes(&script)?;
            write_bundle(Path::new(&args.output), &files)?;
            info!(output_dir = args.output, files = files.len(); "Scenes exported successfully");
            return Ok(());
        }
    };

    if args.output == STDOUT {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
    } else {
        fs::write(&args.output, document)?;
    }

    info!(output_file = args.output; "Export finished successfully");

    Ok(())
}

fn is_project_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
