//! # event-photos
//!
//! Builds a flat manifest of event photos from a dated folder tree so a
//! static page can list them without a server.
//!
//! ```text
//! photos/<year>/<month>/<dd-mm-yyyy - Event name>/**/<image>
//!     →  photos.json     (JSON array of records)
//!     →  photosData.js   (const photos = <same array>;)
//! ```
//!
//! Each record carries the photo's relative path plus the year and month
//! folder names and the date and label parsed from its event folder. Event
//! folders whose names do not start with a `dd-mm-yyyy` date followed by
//! `" - "` are skipped along with everything inside them.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `dd-mm-yyyy - Label` event folder name parser |
//! | [`scan`] | Walks the year/month/event tree and collects records |
//! | [`output`] | Renders and writes both output files, console messages |
//! | [`config`] | Optional `event-photos.toml` loading and validation |
//! | [`types`] | The serialized [`types::PhotoRecord`] |

pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
