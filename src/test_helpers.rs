//! Shared test utilities for the mdx-index test suite.
//!
//! Provides fixture setup, content-tree builders, lookup helpers, and index
//! shape assertions used by the unit tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let result = index(tmp.path()).unwrap();
//!
//! let group = find_group(&result, "Design Patterns");
//! let link = find_link(group, "design-patterns/command-pattern");
//! assert_eq!(link.title, "Command Pattern");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::index::TutorialIndex;
use crate::types::{TutorialGroup, TutorialLink};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/pages/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/pages");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a content file under `root`, creating parent directories.
pub fn write_page(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Index lookups — panics with a clear message on miss
// =========================================================================

/// Find a group by name. Panics if not found.
pub fn find_group<'a>(result: &'a TutorialIndex, name: &str) -> &'a TutorialGroup {
    result
        .groups
        .iter()
        .find(|g| g.name == name)
        .unwrap_or_else(|| {
            let names = group_names(result);
            panic!("group '{name}' not found. Available: {names:?}")
        })
}

/// Find a link by href within a group. Panics if not found.
pub fn find_link<'a>(group: &'a TutorialGroup, href: &str) -> &'a TutorialLink {
    group
        .links
        .iter()
        .find(|l| l.href == href)
        .unwrap_or_else(|| {
            let hrefs: Vec<&str> = group.links.iter().map(|l| l.href.as_str()).collect();
            panic!(
                "link '{href}' not found in group '{}'. Available: {hrefs:?}",
                group.name
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All group names in index order.
pub fn group_names(result: &TutorialIndex) -> Vec<&str> {
    result.groups.iter().map(|g| g.name.as_str()).collect()
}

// =========================================================================
// Shape assertions
// =========================================================================

/// Assert that the full index matches an expected shape, order included.
///
/// Each entry is `(group_name, [(href, title), ...])`.
///
/// ```rust
/// assert_index_shape(&result, &[
///     ("A", &[("a/one", "One"), ("a/two", "Two")]),
///     ("B", &[("b/three", "Three")]),
/// ]);
/// ```
pub fn assert_index_shape(result: &TutorialIndex, expected: &[(&str, &[(&str, &str)])]) {
    let expected_names: Vec<&str> = expected.iter().map(|(name, _)| *name).collect();
    assert_eq!(group_names(result), expected_names, "group order mismatch");

    for (name, links) in expected {
        let group = find_group(result, name);
        let actual: Vec<(&str, &str)> = group
            .links
            .iter()
            .map(|l| (l.href.as_str(), l.title.as_str()))
            .collect();
        assert_eq!(&actual, links, "links of group '{name}' mismatch");
    }
}
