//! Centralized parsing for the content naming conventions.
//!
//! Three conventions drive the whole index, and they all live here:
//!
//! - **Content files** are recognized by a configured extension
//!   (`command-pattern.mdx`).
//! - **Hrefs** are the relative path with the extension stripped and
//!   components joined with `/` (`design-patterns/command-pattern.mdx` →
//!   `design-patterns/command-pattern`), so the identifier mirrors the
//!   directory hierarchy on every platform.
//! - **Group titles** come from the top-level path segment: hyphen-separated
//!   words, each with its first letter uppercased, joined by spaces
//!   (`design-patterns` → "Design Patterns").
//!
//! Titles themselves come from the file's first line, which must start with
//! the heading marker (`# Command Pattern` → "Command Pattern").

use std::path::Path;

/// Whether a discovered file is a content file, by extension.
///
/// Matching is case-insensitive (`Intro.MDX` counts), consistent with how
/// filesystems on macOS and Windows treat extensions.
pub fn is_content_file(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Derive the routable identifier for a content file.
///
/// Strips the final extension and joins the path components with `/`:
/// - `design-patterns/command-pattern.mdx` → `design-patterns/command-pattern`
/// - `intro.mdx` → `intro`
///
/// The result never starts with a separator — callers hand it to a router
/// that prepends its own. Only the file's own extension is stripped;
/// dots in directory names are left alone.
pub fn derive_href(rel_path: &Path) -> String {
    rel_path
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// The top-level path segment of an href, which keys its group.
///
/// `design-patterns/command-pattern` → `design-patterns`. A file sitting
/// directly in the content root groups under its own name.
pub fn group_segment(href: &str) -> &str {
    href.split('/').next().unwrap_or(href)
}

/// Turn a path segment into a display-ready group title.
///
/// Splits on hyphens, uppercases each word's first letter (rest unchanged),
/// and joins with single spaces:
/// - `design-patterns` → "Design Patterns"
/// - `solid` → "Solid"
///
/// Empty words from doubled hyphens are dropped.
pub fn group_title(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(uppercase_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extract the display title from a content file's first line.
///
/// The convention: the very first character is the heading marker, and the
/// rest of the line is the title. Surrounding whitespace is trimmed (which
/// also absorbs the trailing `\r` of CRLF files):
/// - `"# Command Pattern"` → Some("Command Pattern")
/// - `"#   Getting Started  "` → Some("Getting Started")
/// - `"Command Pattern"` → None (no marker)
/// - `"#"` / `"#   "` → None (nothing after the marker)
///
/// Exactly one marker character is removed; `"## Foo"` keeps its second `#`.
pub fn heading_title(first_line: &str, marker: char) -> Option<String> {
    let rest = first_line.strip_prefix(marker)?;
    let title = rest.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
