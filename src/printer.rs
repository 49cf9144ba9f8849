//! Directory tree rendering: the inverse of the builder. Walks an existing
//! directory and produces the classic box-drawing listing, folders first.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use termtree::Tree;
use tracing::debug;

use crate::errors::{TreeError, TreeResult};

/// Names never rendered: VCS metadata, dependency caches, build output,
/// editor state, OS artifacts.
pub const DENY_NAMES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    ".idea",
    ".vscode",
    "dist",
    "build",
    "target",
    ".gitignore",
    ".DS_Store",
    "Thumbs.db",
];

/// Compiled-script artifact suffixes, also never rendered.
pub const DENY_SUFFIXES: &[&str] = &[".pyc", ".pyo", ".pyd"];

fn is_denied(name: &str) -> bool {
    DENY_NAMES.contains(&name) || DENY_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Render `root` as a tree. The root line is the directory's basename with
/// a trailing `/`; every folder below it is `/`-suffixed the same way.
pub fn render_tree(root: &Path) -> TreeResult<Tree<String>> {
    if !root.exists() {
        return Err(TreeError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(TreeError::NotADirectory(root.to_path_buf()));
    }

    Ok(Tree::new(root_label(root)?).with_leaves(walk(root)?))
}

/// Basename of the canonicalized root, `/`-suffixed.
fn root_label(root: &Path) -> TreeResult<String> {
    let canonical = root.canonicalize()?;
    let name = canonical
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| canonical.to_string_lossy().into_owned());
    Ok(format!("{}/", name))
}

/// One directory level: filter, sort folders-first case-insensitively,
/// recurse into subfolders. Listing errors below the root propagate.
fn walk(dir: &Path) -> TreeResult<Vec<Tree<String>>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_denied(&name) {
            debug!("denylisted: {:?}", entry.path());
            continue;
        }
        // Symlinks are skipped entirely; cyclic links would recurse forever.
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            debug!("symlink skipped: {:?}", entry.path());
            continue;
        }
        entries.push((name, file_type.is_dir(), entry.path()));
    }

    let ordered = entries
        .into_iter()
        .sorted_by_key(|(name, is_dir, _)| (!*is_dir, name.to_lowercase()));

    let mut leaves = Vec::new();
    for (name, is_dir, path) in ordered {
        if is_dir {
            leaves.push(Tree::new(format!("{}/", name)).with_leaves(walk(&path)?));
        } else {
            leaves.push(Tree::new(name));
        }
    }
    Ok(leaves)
}
