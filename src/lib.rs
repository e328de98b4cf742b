//! # mdx-index
//!
//! A build-time tutorial indexer for MDX content sites. Your filesystem is
//! the data source: directories become tutorial groups, `.mdx` files become
//! links, and each file's first-line heading becomes its title.
//!
//! # Pipeline
//!
//! One synchronous pass per site build, producing a JSON index that the
//! page-rendering layer consumes:
//!
//! ```text
//! index    pages/  →  index.json    (filesystem → ordered link groups)
//! ```
//!
//! Control flow is strictly top-down: the indexer drives the walker to
//! enumerate files, the reader factory to load each one, and the naming
//! conventions to derive titles, hrefs, and groups. Nothing is cached or
//! persisted between runs — re-running over an unchanged tree yields a
//! byte-identical index.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`index`] | Orchestrator — walks the tree, extracts titles, assembles ordered groups |
//! | [`walker`] | Recursive traversal of the content root, relative paths only |
//! | [`reader`] | Encoding-polymorphic file reading behind a factory |
//! | [`naming`] | Href, group, and heading-title conventions |
//! | [`config`] | `config.toml` loading, merging, validation |
//! | [`types`] | Types serialized in the index hand-off (`TutorialGroup`, `TutorialLink`) |
//! | [`output`] | CLI output formatting — tree-based display of index results |
//!
//! # Design Decisions
//!
//! ## Ordered Groups, Not a Map
//!
//! The grouped result is a `Vec<TutorialGroup>` — an explicit ordered list of
//! name/links pairs. JSON objects don't guarantee key order across consumers,
//! and the nav the renderer builds must match discovery order exactly, so a
//! map type never appears in the hand-off.
//!
//! ## Fail Loud on Malformed Content
//!
//! A content file whose first line isn't a `# Title` heading fails the whole
//! run. The index runs once per build; a broken file should block publication
//! rather than ship a blank or garbled link.
//!
//! ## Encodings Behind a Factory
//!
//! File reading goes through a [`reader::ContentReader`] trait selected by an
//! enumerated encoding tag. UTF-8 is the only variant today; the enum plus an
//! exhaustive factory match make adding another encoding a compile-time
//! checked change instead of a stringly-typed one.
//!
//! ## Sorted Traversal
//!
//! Directory listing order is platform-dependent, so the walker sorts each
//! directory's entries by file name. Determinism is what makes the "unchanged
//! tree → identical index" property hold everywhere.

pub mod config;
pub mod index;
pub mod naming;
pub mod output;
pub mod reader;
pub mod types;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_helpers;
