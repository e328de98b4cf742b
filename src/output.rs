//! CLI output formatting for the index pipeline.
//!
//! Output is information-centric, not file-centric: every entity leads with
//! its positional index and title, with the source file shown as an indented
//! `Source:` context line. The result reads as a content inventory while
//! still letting users trace entries back to specific files.
//!
//! ```text
//! Tutorials
//! 001 Design Patterns (3 tutorials)
//!     001 Command Pattern
//!         Source: design-patterns/command-pattern.mdx
//!     002 Factory Pattern
//!         Source: design-patterns/factory-pattern.mdx
//!
//! Indexed 6 tutorials in 3 groups
//! ```
//!
//! `format_index_output` is pure (returns `Vec<String>`, no I/O) so tests can
//! assert on exact lines; `print_index_output` is the stdout wrapper.

use crate::index::TutorialIndex;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the index summary. Pure — no I/O.
pub fn format_index_output(result: &TutorialIndex) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Tutorials".to_string());

    for (g, group) in result.groups.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} tutorials)",
            format_index(g + 1),
            group.name,
            group.links.len()
        ));

        for (l, link) in group.links.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(l + 1), link.title));
            lines.push(format!(
                "{}Source: {}.{}",
                indent(2),
                link.href,
                result.config.content_ext
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Indexed {} tutorials in {} groups",
        result.link_count(),
        result.groups.len()
    ));

    lines
}

/// Print the index summary to stdout.
pub fn print_index_output(result: &TutorialIndex) {
    for line in format_index_output(result) {
        println!("{line}");
    }
}
