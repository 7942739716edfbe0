//! Records written to the photo manifest.

use serde::{Deserialize, Serialize};

/// One image found inside a valid event folder.
///
/// Field order is the serialized key order in `photos.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Path relative to the base directory, always with `/` separators.
    pub path: String,
    /// Name of the year folder (first level under `photos/`).
    pub year: String,
    /// Name of the month folder (second level).
    pub month: String,
    /// Event date as `yyyy-mm-dd`, taken from the event folder name.
    pub date: String,
    /// Event label, taken from the event folder name.
    pub name: String,
}
