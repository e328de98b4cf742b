//! Recursive content tree traversal.
//!
//! Enumerates every regular file under the content root, to arbitrary depth,
//! returning paths *relative to the root* — the rest of the pipeline never
//! sees an absolute path. Directories themselves are not reported.
//!
//! ## Ordering
//!
//! Each directory's entries are visited in file-name order, depth-first.
//! Directory listing order varies by platform and filesystem, so sorting here
//! is what makes a re-run over an unchanged tree produce an identical index.
//!
//! ## Symlinks
//!
//! Symlinks are not followed: a link to a file is reported as a file, a link
//! to a directory is not descended into. Content trees are expected to be
//! plain trees; not following links means a cyclic link can't recurse forever.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("content root is not a readable directory: {0}")]
    MissingRoot(PathBuf),
    #[error("failed to read content tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Collect all regular files under `root`, as paths relative to `root`.
///
/// Fails with [`WalkError::MissingRoot`] if `root` does not exist or is not
/// a directory — an empty result only ever means an empty tree. Any entry
/// that cannot be read during traversal aborts the walk.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    if !root.is_dir() {
        return Err(WalkError::MissingRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir yields paths under its root")
            .to_path_buf();
        files.push(rel);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn finds_files_at_every_depth() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("top.mdx"));
        touch(&tmp.path().join("a/one.mdx"));
        touch(&tmp.path().join("a/b/c/deep.mdx"));

        let files = walk(tmp.path()).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("a/b/c/deep.mdx"),
                PathBuf::from("a/one.mdx"),
                PathBuf::from("top.mdx"),
            ]
        );
    }

    #[test]
    fn directories_are_not_reported() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("empty/nested")).unwrap();
        touch(&tmp.path().join("empty/nested/file.txt"));

        let files = walk(tmp.path()).unwrap();
        assert_eq!(files, vec![PathBuf::from("empty/nested/file.txt")]);
    }

    #[test]
    fn empty_tree_yields_empty_list() {
        let tmp = TempDir::new().unwrap();
        assert!(walk(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("does-not-exist");
        assert!(matches!(walk(&gone), Err(WalkError::MissingRoot(_))));
    }

    #[test]
    fn root_that_is_a_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file");
        fs::write(&file, "x").unwrap();
        assert!(matches!(walk(&file), Err(WalkError::MissingRoot(_))));
    }

    #[test]
    fn paths_are_relative_to_root() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a/one.mdx"));

        let files = walk(tmp.path()).unwrap();
        assert!(files.iter().all(|p| p.is_relative()));
    }

    #[test]
    fn entries_sorted_within_each_directory() {
        let tmp = TempDir::new().unwrap();
        // Created out of order on purpose
        touch(&tmp.path().join("b/zeta.mdx"));
        touch(&tmp.path().join("b/alpha.mdx"));
        touch(&tmp.path().join("a/omega.mdx"));

        let files = walk(tmp.path()).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("a/omega.mdx"),
                PathBuf::from("b/alpha.mdx"),
                PathBuf::from("b/zeta.mdx"),
            ]
        );
    }
}
