//! Shared types serialized in the index hand-off.
//!
//! These types form the contract with the page-rendering layer: the `index`
//! command serializes them to JSON, and the renderer maps each link's `href`
//! 1:1 to a page route. Groups are an explicit ordered list, never a map —
//! JSON objects don't guarantee key order across consumers, and the rendering
//! layer must see groups exactly as they were discovered.

use serde::{Deserialize, Serialize};

/// A single tutorial entry: a routable identifier plus its display title.
///
/// `href` mirrors the file's position in the content tree with the content
/// extension stripped (`design-patterns/command-pattern.mdx` →
/// `design-patterns/command-pattern`). It never contains the extension or a
/// leading separator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialLink {
    pub href: String,
    /// Title from the file's first-line heading, marker and whitespace stripped.
    pub title: String,
}

/// A named group of tutorial links.
///
/// The name comes from the top-level directory segment, hyphen-split and
/// title-cased (`design-patterns` → "Design Patterns"). Links appear in
/// discovery order; groups appear in the order their first member was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialGroup {
    pub name: String,
    pub links: Vec<TutorialLink>,
}
