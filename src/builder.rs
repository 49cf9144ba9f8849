//! Depth-stack tree materialization: sketch entries become directories and
//! empty files on disk.

use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::output;
use crate::errors::{TreeError, TreeResult};
use crate::parser::{parse_line, SketchLine};

/// What applying one sketch entry did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Folder(PathBuf),
    File(PathBuf),
    /// Entry referenced a nesting level with no resolved parent folder.
    MissingParent,
}

/// Counts reported after a build pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub folders: usize,
    pub files: usize,
}

/// Materializes sketch entries, optionally under a destination root.
///
/// Invariant: `stack[i]` holds the most recently created folder at nesting
/// level `i`. The stack is truncated to the entry depth before every
/// resolution, so a dedent re-attaches to the correct ancestor.
#[derive(Debug, Default)]
pub struct TreeScaffolder {
    root: Option<PathBuf>,
    stack: Vec<PathBuf>,
    folders_created: usize,
    files_created: usize,
}

impl TreeScaffolder {
    pub fn new(root: Option<&Path>) -> Self {
        Self {
            root: root.map(Path::to_path_buf),
            ..Self::default()
        }
    }

    pub fn report(&self) -> BuildReport {
        BuildReport {
            folders: self.folders_created,
            files: self.files_created,
        }
    }

    /// Apply one parsed entry.
    ///
    /// Folder creation is idempotent; file creation truncates an existing
    /// file. I/O failures are returned per entry and leave the stack ready
    /// for the next line.
    pub fn apply(&mut self, entry: &SketchLine) -> io::Result<Applied> {
        self.stack.truncate(entry.depth);

        let path = if entry.depth == 0 {
            match &self.root {
                Some(root) => root.join(&entry.name),
                None => PathBuf::from(&entry.name),
            }
        } else {
            // After truncation the immediate parent sits at depth - 1, or
            // the input dedented past it (malformed ordering).
            match self.stack.get(entry.depth - 1) {
                Some(parent) => parent.join(&entry.name),
                None => return Ok(Applied::MissingParent),
            }
        };

        if entry.is_folder {
            fs::create_dir_all(&path)?;
            debug!("created folder: {:?}", path);
            self.stack.push(path.clone());
            self.folders_created += 1;
            Ok(Applied::Folder(path))
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            File::create(&path)?;
            debug!("created file: {:?}", path);
            self.files_created += 1;
            Ok(Applied::File(path))
        }
    }
}

/// Read a sketch to end-of-stream and materialize it, printing one status
/// line per entry. A failing entry is reported and skipped, never fatal.
pub fn run_build(reader: impl BufRead, root: Option<&Path>) -> TreeResult<BuildReport> {
    let mut scaffolder = TreeScaffolder::new(root);
    let mut saw_entry = false;

    for line in reader.lines() {
        let line = line?;
        let Some(entry) = parse_line(&line) else {
            continue;
        };
        saw_entry = true;

        match scaffolder.apply(&entry) {
            Ok(Applied::Folder(path)) => {
                output::success(&format!("created folder: {}", path.display()));
            }
            Ok(Applied::File(path)) => {
                output::success(&format!("created file: {}", path.display()));
            }
            Ok(Applied::MissingParent) => {
                output::warning(&format!(
                    "no parent folder at level {}, skipping: {}",
                    entry.depth, entry.name
                ));
            }
            Err(e) => {
                output::failure(&format!("failed to create {}: {}", entry.name, e));
            }
        }
    }

    if !saw_entry {
        return Err(TreeError::EmptyInput);
    }

    Ok(scaffolder.report())
}
