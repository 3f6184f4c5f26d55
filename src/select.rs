//! File selection
//!
//! Expands a file mask into absolute paths of C/C++ sources. Flat mode globs
//! the mask in its own directory; recursive mode walks everything under the
//! mask's directory, pruning generated-output directories.
//!
//! Order follows the underlying enumeration and is not guaranteed stable.

use crate::error::SelectError;
use crate::exclusions::ExclusionRules;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Resolves `mask` against the current directory without touching the filesystem.
///
/// `.` and `..` components are folded lexically, so `../src/*.*` names the
/// sibling directory instead of keeping the `..`.
pub fn absolute_mask(mask: &str) -> Result<PathBuf, SelectError> {
    let absolute = std::path::absolute(mask).map_err(|source| SelectError::Resolve {
        path: PathBuf::from(mask),
        source,
    })?;
    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // popping the root is a no-op, so `/..` stays `/`
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Selects the source files named by `mask`
pub fn select_files(
    mask: &Path,
    recursive: bool,
    rules: &ExclusionRules,
) -> Result<Vec<PathBuf>, SelectError> {
    if recursive {
        let root = mask.parent().unwrap_or(mask);
        walk_tree(root, rules)
    } else {
        expand_glob(mask, rules)
    }
}

fn expand_glob(mask: &Path, rules: &ExclusionRules) -> Result<Vec<PathBuf>, SelectError> {
    let pattern = mask.to_string_lossy();
    let entries = glob::glob(&pattern).map_err(|source| SelectError::Pattern {
        mask: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if !path.is_file() || !rules.is_source_file(&path) {
            continue;
        }
        let path = absolute_path(path)?;
        files.push(path);
    }
    Ok(files)
}

fn walk_tree(root: &Path, rules: &ExclusionRules) -> Result<Vec<PathBuf>, SelectError> {
    if !root.is_dir() {
        log::debug!("Traversal root {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let root = absolute_path(root.to_path_buf())?;
    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && rules.is_excluded_dir(entry.path())));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        // links to files are kept; links to directories are never entered
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && rules.is_source_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn absolute_path(path: PathBuf) -> Result<PathBuf, SelectError> {
    if path.is_absolute() {
        return Ok(path);
    }
    std::path::absolute(&path).map_err(|source| SelectError::Resolve { path, source })
}
