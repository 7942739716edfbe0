//! Shared test utilities for the event-photos test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let result = scan(tmp.path(), Path::new("photos")).unwrap();
//!
//! let record = find_record(&result, "a.jpg");
//! assert_eq!(record.name, "Gala");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::ScanResult;
use crate::types::PhotoRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/photos/` to `<tmp>/photos` and return the temp dir.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/photos");
    copy_dir_recursive(&fixtures, &tmp.path().join("photos")).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Find the record whose path ends with `/<file_name>`. Panics if not found.
pub fn find_record<'a>(result: &'a ScanResult, file_name: &str) -> &'a PhotoRecord {
    let suffix = format!("/{file_name}");
    result
        .photos
        .iter()
        .find(|r| r.path.ends_with(&suffix))
        .unwrap_or_else(|| {
            let paths = record_paths(result);
            panic!("record '{file_name}' not found. Available: {paths:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All record paths in traversal order.
pub fn record_paths(result: &ScanResult) -> Vec<&str> {
    result.photos.iter().map(|r| r.path.as_str()).collect()
}

/// All record paths, sorted. Traversal order follows the file system, so
/// multi-entry assertions compare sorted lists.
pub fn sorted_record_paths(result: &ScanResult) -> Vec<&str> {
    let mut paths = record_paths(result);
    paths.sort_unstable();
    paths
}

/// Sorted borrowed copy of a list of strings.
pub fn sorted(items: &[String]) -> Vec<&str> {
    let mut items: Vec<&str> = items.iter().map(String::as_str).collect();
    items.sort_unstable();
    items
}
