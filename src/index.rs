//! Tutorial indexing — the pipeline orchestrator.
//!
//! Turns raw filesystem state into the grouped link structure the rendering
//! layer consumes. One pass, synchronous, rebuilt from scratch on every run:
//!
//! ```text
//! pages/                               # Content root
//! ├── config.toml                      # Index configuration (optional)
//! ├── design-patterns/
//! │   ├── command-pattern.mdx          # First line: "# Command Pattern"
//! │   └── factory-pattern.mdx
//! ├── clean-code/
//! │   └── meaningful-names.mdx
//! └── notes.txt                        # Not .mdx → ignored
//! ```
//!
//! becomes
//!
//! ```text
//! [
//!   ("Design Patterns", [{href: "design-patterns/command-pattern", title: "Command Pattern"},
//!                        {href: "design-patterns/factory-pattern", title: "Factory Pattern"}]),
//!   ("Clean Code",      [{href: "clean-code/meaningful-names",     title: "Meaningful Names"}]),
//! ]
//! ```
//!
//! Groups appear in the order their first member was discovered; links keep
//! discovery order within their group. Because the walk is sorted, the whole
//! result is deterministic: an unchanged tree always yields a byte-identical
//! index.
//!
//! ## Failure semantics
//!
//! The first error — unreadable tree, unreadable file, or a content file
//! whose first line is not a heading — aborts the entire run. A build that
//! publishes a partial index is worse than a build that fails.

use crate::config::{self, IndexConfig};
use crate::naming;
use crate::reader;
use crate::types::{TutorialGroup, TutorialLink};
use crate::walker;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Walk error: {0}")]
    Walk(#[from] walker::WalkError),
    #[error("Read error: {0}")]
    Read(#[from] reader::ReadError),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{path}: first line must be a '{marker} <title>' heading")]
    MalformedTitle { path: PathBuf, marker: char },
}

/// The complete result of one indexing run.
#[derive(Debug, Serialize)]
pub struct TutorialIndex {
    /// Groups in first-discovery order, links in discovery order.
    pub groups: Vec<TutorialGroup>,
    pub config: IndexConfig,
}

impl TutorialIndex {
    /// Total number of links across all groups.
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}

/// Index the content tree under `root`.
///
/// Loads `config.toml` from `root` (defaults if absent), walks the tree,
/// and builds one [`TutorialLink`] per content file:
///
/// - `title` — the first line with the heading marker and surrounding
///   whitespace stripped. A missing or malformed first line fails the run
///   with [`IndexError::MalformedTitle`]; there is no fallback title.
/// - `href` — the relative path, extension stripped, `/`-separated.
/// - group — the top-level path segment, title-cased.
///
/// Files without the content extension are ignored entirely.
pub fn index(root: &Path) -> Result<TutorialIndex, IndexError> {
    let config = config::load_config(root)?;
    let groups = index_with_config(root, &config)?;
    Ok(TutorialIndex { groups, config })
}

/// Index `root` with an already-loaded config.
///
/// The core of [`index`], split out so tests and embedding callers can
/// supply a config directly.
pub fn index_with_config(
    root: &Path,
    config: &IndexConfig,
) -> Result<Vec<TutorialGroup>, IndexError> {
    let mut groups: Vec<TutorialGroup> = Vec::new();

    for rel_path in walker::walk(root)? {
        if !naming::is_content_file(&rel_path, &config.content_ext) {
            continue;
        }

        let reader = reader::reader_for(&config.encoding, root, &rel_path)?;
        let lines = reader.lines()?;
        // walk() only yields files, so there is always a line 0
        let title = naming::heading_title(&lines[0], config.heading_marker).ok_or_else(|| {
            IndexError::MalformedTitle {
                path: rel_path.clone(),
                marker: config.heading_marker,
            }
        })?;

        let href = naming::derive_href(&rel_path);
        let group_name = naming::group_title(naming::group_segment(&href));
        let link = TutorialLink { href, title };

        match groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.links.push(link),
            None => groups.push(TutorialGroup {
                name: group_name,
                links: vec![link],
            }),
        }
    }

    Ok(groups)
}
