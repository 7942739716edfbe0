//! Manifest serialization and CLI output formatting.
//!
//! # Output Files
//!
//! The same record array is written twice. One pretty-printer renders it and
//! a [`Wrapper`] decides what surrounds it:
//!
//! ```text
//! photos.json      [ { "path": ..., "year": ..., ... }, ... ]
//! photosData.js    const photos = [ { "path": ..., ... }, ... ];
//! ```
//!
//! The script variant lets a static page load the manifest with a plain
//! `<script>` tag instead of fetching JSON. Both files are overwritten on
//! every run and contain no trailing newline.
//!
//! # Console Output
//!
//! ```text
//! photos.json generated with 4 photos.
//! photosData.js created.
//! ```
//!
//! Diagnostics (only when asked for) go to stderr:
//!
//! ```text
//! Skipped event folders (name must start with "dd-mm-yyyy - "):
//!     photos/2025/01/bad-name
//! Photos outside any event folder:
//!     photos/2025/01/stray.jpg
//! ```
//!
//! Each message has a `format_*` function (pure, returns `Vec<String>`) and a
//! `print_*` wrapper that writes it out.

use crate::config::EventPhotosConfig;
use crate::scan::ScanResult;
use crate::types::PhotoRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What surrounds the rendered record array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper<'a> {
    /// The bare JSON array.
    Json,
    /// `const <variable> = <array>;`
    Script { variable: &'a str },
}

/// Which output file a [`WrittenFile`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Json,
    Script,
}

/// A file written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub photo_count: usize,
}

/// Render the records as pretty-printed JSON (2-space indent) inside the
/// given wrapper.
pub fn render(photos: &[PhotoRecord], wrapper: Wrapper<'_>) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(photos)?;
    Ok(match wrapper {
        Wrapper::Json => json,
        Wrapper::Script { variable } => format!("const {variable} = {json};"),
    })
}

/// Write the JSON manifest and the script file into `base`.
///
/// Both files are rendered before either is written, so a serialization
/// failure leaves existing files untouched.
pub fn write_outputs(
    base: &Path,
    config: &EventPhotosConfig,
    photos: &[PhotoRecord],
) -> Result<Vec<WrittenFile>, OutputError> {
    let outputs = [
        (OutputKind::Json, &config.json_output, Wrapper::Json),
        (
            OutputKind::Script,
            &config.js_output,
            Wrapper::Script {
                variable: &config.js_variable,
            },
        ),
    ];

    let rendered = outputs
        .iter()
        .map(|(kind, file, wrapper)| -> Result<_, OutputError> {
            Ok((*kind, base.join(file), render(photos, *wrapper)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut written = Vec::with_capacity(rendered.len());
    for (kind, path, content) in rendered {
        fs::write(&path, content).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(WrittenFile {
            kind,
            path,
            photo_count: photos.len(),
        });
    }
    Ok(written)
}

// ============================================================================
// Console output
// ============================================================================

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Confirmation line for one written file.
pub fn format_written(file: &WrittenFile) -> String {
    let name = display_name(&file.path);
    match file.kind {
        OutputKind::Json => format!("{name} generated with {} photos.", file.photo_count),
        OutputKind::Script => format!("{name} created."),
    }
}

pub fn print_written(files: &[WrittenFile]) {
    for file in files {
        println!("{}", format_written(file));
    }
}

/// Summary of a scan, used by `check`.
pub fn format_scan_summary(result: &ScanResult, source: &Path) -> Vec<String> {
    let mut events: Vec<(&str, &str)> = Vec::new();
    for record in &result.photos {
        let key = (record.date.as_str(), record.name.as_str());
        if !events.contains(&key) {
            events.push(key);
        }
    }

    let mut lines = vec![format!(
        "{}: {} photos in {} events",
        source.display(),
        result.photos.len(),
        events.len()
    )];
    for (date, name) in events {
        let count = result
            .photos
            .iter()
            .filter(|r| r.date == date && r.name == name)
            .count();
        lines.push(format!("    {date} {name} ({count} photos)"));
    }
    if !result.skipped_folders.is_empty() {
        lines.push(format!(
            "{} event folders skipped",
            result.skipped_folders.len()
        ));
    }
    lines
}

pub fn print_scan_summary(result: &ScanResult, source: &Path) {
    for line in format_scan_summary(result, source) {
        println!("{}", line);
    }
}

/// Lines listing skipped event folders and stray photos. Empty when there is
/// nothing to report.
pub fn format_diagnostics(result: &ScanResult) -> Vec<String> {
    let mut lines = Vec::new();
    if !result.skipped_folders.is_empty() {
        lines.push("Skipped event folders (name must start with \"dd-mm-yyyy - \"):".to_string());
        lines.extend(result.skipped_folders.iter().map(|p| format!("    {p}")));
    }
    if !result.stray_photos.is_empty() {
        lines.push("Photos outside any event folder:".to_string());
        lines.extend(result.stray_photos.iter().map(|p| format!("    {p}")));
    }
    lines
}

pub fn print_diagnostics(result: &ScanResult) {
    for line in format_diagnostics(result) {
        eprintln!("{}", line);
    }
}
