use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use slugline_cli::{Args, Format};

const ALL_FORMATS: [Format; 5] = [
    Format::Html,
    Format::Cards,
    Format::Text,
    Format::Scenes,
    Format::Json,
];

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all files with the given extension from a directory
fn collect_files(dir: PathBuf, extension: &str) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension)
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path, format: Format) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        format,
        no_scene_numbers: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_scripts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut inputs = collect_files(demos_dir(), "fountain");
    inputs.extend(collect_files(demos_dir(), "toml"));

    assert!(!inputs.is_empty(), "No demo scripts found in demos/");

    let mut failed = Vec::new();

    for input in &inputs {
        let stem = input.file_stem().unwrap().to_string_lossy().to_string();
        for format in ALL_FORMATS {
            let output = temp_dir.path().join(format!("{stem}-{format:?}"));
            if let Err(e) = slugline_cli::run(&args(input, &output, format)) {
                failed.push((input.clone(), format, e));
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo scripts that failed:");
        for (path, format, err) in &failed {
            eprintln!("  - {} ({format:?}): {}", path.display(), err);
        }
        panic!("{} demo export(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} demo scripts exported", inputs.len());
}

#[test]
fn e2e_error_projects_fail() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_projects = collect_files(demos_dir().join("errors"), "toml");

    assert!(
        !error_projects.is_empty(),
        "No error projects found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for input in &error_projects {
        let output = temp_dir.path().join("out.html");
        if slugline_cli::run(&args(input, &output, Format::Html)).is_ok() {
            unexpectedly_succeeded.push(input.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError projects that unexpectedly loaded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error project(s) loaded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_text_export_layout() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("last-train.txt");

    slugline_cli::run(&args(
        &demos_dir().join("last-train.fountain"),
        &output,
        Format::Text,
    ))
    .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let pages: Vec<&str> = text.split('\x0c').collect();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("THE LAST TRAIN"));
    assert!(pages[1].contains("1. INT. STATION - NIGHT\n"));
    assert!(pages[1].contains("3. INT. WAITING ROOM - LATER\n"));
}

#[test]
fn e2e_scene_bundle() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("scenes");

    slugline_cli::run(&args(
        &demos_dir().join("cold-open.fountain"),
        &output,
        Format::Scenes,
    ))
    .unwrap();

    let mut names: Vec<String> = fs::read_dir(&output)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "001-int-kitchen-morning.txt",
            "002-int-ext-car-moving.txt",
            "003-ext-hospital-day.txt",
        ]
    );

    let first = fs::read_to_string(output.join("001-int-kitchen-morning.txt")).unwrap();
    assert!(first.starts_with("int. kitchen - morning\n"));
}

#[test]
fn e2e_scenes_need_directory() {
    let input = demos_dir().join("cold-open.fountain");

    let result = slugline_cli::run(&args(&input, Path::new("-"), Format::Scenes));

    assert!(result.is_err());
}

#[test]
fn e2e_project_numbering() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("draft.html");

    slugline_cli::run(&args(&demos_dir().join("draft.toml"), &output, Format::Html)).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"id="scene-1""#));
    assert!(!html.contains("scene-number"));
    assert!(html.contains(r#"<div class="element character">WAITRESS</div>"#));
}

#[test]
fn e2e_no_scene_numbers_flag() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("last-train.json");
    let mut args = args(
        &demos_dir().join("last-train.fountain"),
        &output,
        Format::Json,
    );
    args.no_scene_numbers = true;

    slugline_cli::run(&args).unwrap();

    let json = fs::read_to_string(&output).unwrap();
    assert!(!json.contains("scene_number\""));
    assert!(json.contains("\"scene_id\": \"scene-1\""));
}

#[test]
fn e2e_explicit_config() {
    let temp_dir = tempdir().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[classify]\nscene_numbers = false\n").unwrap();
    let output = temp_dir.path().join("last-train.txt");
    let mut args = args(
        &demos_dir().join("last-train.fountain"),
        &output,
        Format::Text,
    );
    args.config = Some(config.to_string_lossy().to_string());

    slugline_cli::run(&args).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("\nINT. STATION - NIGHT\n"));
}
