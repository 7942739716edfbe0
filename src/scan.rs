//! Photo tree walking and record collection.
//!
//! ## Directory Structure
//!
//! The walker expects a fixed three-level hierarchy under the source root:
//!
//! ```text
//! photos/                              # Source root
//! ├── 2025/                            # Year
//! │   ├── 01/                          # Month
//! │   │   ├── 06-01-2025 - Gala/       # Event (dd-mm-yyyy - Label)
//! │   │   │   ├── a.jpg                # Collected
//! │   │   │   ├── notes.txt            # Ignored (not an image)
//! │   │   │   └── extra/
//! │   │   │       └── b.jpeg           # Collected, inherits the event
//! │   │   ├── bad-name/                # Invalid event name: whole subtree skipped
//! │   │   │   └── c.png
//! │   │   └── stray.jpg                # Above event depth: not collected
//! │   └── 02/
//! │       └── ...
//! └── 2024/
//!     └── ...
//! ```
//!
//! Every directory below an event folder is treated as part of that event, so
//! photos nested arbitrarily deep keep the year, month, date and label of
//! their event ancestor.
//!
//! ## Ordering
//!
//! Entries are visited in whatever order the file system lists them. Nothing
//! is sorted, so the manifest order is stable only as long as the directory
//! listing order is.

use crate::naming::{ParsedFolder, parse_event_folder};
use crate::types::PhotoRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything collected by a walk: the records plus diagnostics that never
/// reach the output files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub photos: Vec<PhotoRecord>,
    /// Relative paths of event folders whose names failed to parse.
    pub skipped_folders: Vec<String>,
    /// Relative paths of images found above event-folder depth.
    pub stray_photos: Vec<String>,
}

impl ScanResult {
    fn append(&mut self, other: ScanResult) {
        self.photos.extend(other.photos);
        self.skipped_folders.extend(other.skipped_folders);
        self.stray_photos.extend(other.stray_photos);
    }
}

/// Suffixes matched case-insensitively against the whole file name.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif"];

/// Role of the directory being listed, carrying what its ancestors decided.
#[derive(Debug, Clone)]
enum Level {
    /// The source root; subdirectories are years.
    Root,
    /// A year folder; subdirectories are months.
    Year { year: String },
    /// A month folder; subdirectories are event folders.
    Month { year: String, month: String },
    /// A valid event folder or any directory below one.
    Event {
        year: String,
        month: String,
        event: ParsedFolder,
    },
}

/// Walk `base/source` and collect a record for every photo in a valid event
/// folder. Record paths are relative to `base`.
pub fn scan(base: &Path, source: &Path) -> Result<ScanResult, ScanError> {
    let root = base.join(source);
    walk(&root, base, &Level::Root)
}

/// Walk a single event folder as if it had been reached through
/// `year`/`month`.
///
/// The folder's own name is validated first. An invalid name gives an empty
/// result with the folder listed in `skipped_folders`.
pub fn scan_event(
    base: &Path,
    dir: &Path,
    year: &str,
    month: &str,
) -> Result<ScanResult, ScanError> {
    let folder_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match parse_event_folder(&folder_name) {
        Some(event) => {
            let level = Level::Event {
                year: year.to_string(),
                month: month.to_string(),
                event,
            };
            walk(dir, base, &level)
        }
        None => Ok(ScanResult {
            skipped_folders: vec![relative_path(base, dir)],
            ..ScanResult::default()
        }),
    }
}

fn walk(dir: &Path, base: &Path, level: &Level) -> Result<ScanResult, ScanError> {
    let mut result = ScanResult::default();
    let entries = fs::read_dir(dir).map_err(|source| io_error(dir, source))?;

    for entry in entries {
        let entry = entry.map_err(|source| io_error(dir, source))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        // file_type() does not follow symlinks
        let file_type = entry
            .file_type()
            .map_err(|source| io_error(&path, source))?;

        if file_type.is_dir() {
            let child = match level {
                Level::Root => Level::Year { year: name },
                Level::Year { year } => Level::Month {
                    year: year.clone(),
                    month: name,
                },
                Level::Month { year, month } => match parse_event_folder(&name) {
                    Some(event) => Level::Event {
                        year: year.clone(),
                        month: month.clone(),
                        event,
                    },
                    None => {
                        result.skipped_folders.push(relative_path(base, &path));
                        continue;
                    }
                },
                Level::Event { .. } => level.clone(),
            };
            result.append(walk(&path, base, &child)?);
        } else if is_image(&name) {
            match level {
                Level::Event { year, month, event } => result.photos.push(PhotoRecord {
                    path: relative_path(base, &path),
                    year: year.clone(),
                    month: month.clone(),
                    date: event.date_iso.clone(),
                    name: event.name.clone(),
                }),
                _ => result.stray_photos.push(relative_path(base, &path)),
            }
        }
    }

    Ok(result)
}

fn io_error(path: &Path, source: std::io::Error) -> ScanError {
    ScanError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn is_image(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Path of `path` relative to `base`, joined with `/` on every platform.
fn relative_path(base: &Path, path: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}
