//! Tests for the directory tree printer

use std::fs;
use std::path::Path;

use dirsketch::errors::TreeError;
use dirsketch::printer::render_tree;
use dirsketch::util::testing;
use tempfile::TempDir;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Create a named project dir under the temp root so the rendered root
/// label is stable.
fn project_dir(temp: &TempDir) -> std::path::PathBuf {
    let dir = temp.path().join("proj");
    fs::create_dir(&dir).unwrap();
    dir
}

fn touch(path: &Path) {
    fs::write(path, "").unwrap();
}

// ============================================================
// Validation Tests
// ============================================================

#[test]
fn given_missing_path_when_rendering_then_path_not_found() {
    let temp = TempDir::new().unwrap();

    let result = render_tree(&temp.path().join("missing"));

    assert!(matches!(result, Err(TreeError::PathNotFound(_))));
}

#[test]
fn given_file_path_when_rendering_then_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    touch(&file);

    let result = render_tree(&file);

    assert!(matches!(result, Err(TreeError::NotADirectory(_))));
}

// ============================================================
// Ordering Tests
// ============================================================

#[test]
fn given_mixed_entries_when_rendering_then_folders_first_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let proj = project_dir(&temp);
    touch(&proj.join("b.txt"));
    touch(&proj.join("A.txt"));
    fs::create_dir(proj.join("z")).unwrap();

    let rendered = render_tree(&proj).unwrap().to_string();

    assert_eq!(rendered, "proj/\n├── z/\n├── A.txt\n└── b.txt\n");
}

#[test]
fn given_nested_folders_when_rendering_then_continuation_bars_match() {
    let temp = TempDir::new().unwrap();
    let proj = project_dir(&temp);
    fs::create_dir_all(proj.join("src/inner")).unwrap();
    touch(&proj.join("src/main.rs"));
    touch(&proj.join("zz.txt"));

    let rendered = render_tree(&proj).unwrap().to_string();

    // src/ is not the last child, so its descendants carry the bar; the
    // last child of src/ uses the terminal glyph.
    let expected = "proj/\n\
                    ├── src/\n\
                    │   ├── inner/\n\
                    │   └── main.rs\n\
                    └── zz.txt\n";
    assert_eq!(rendered, expected);
}

#[test]
fn given_last_child_folder_when_rendering_then_descendants_use_blank_prefix() {
    let temp = TempDir::new().unwrap();
    let proj = project_dir(&temp);
    fs::create_dir(proj.join("sub")).unwrap();
    touch(&proj.join("sub/leaf.txt"));

    let rendered = render_tree(&proj).unwrap().to_string();

    assert_eq!(rendered, "proj/\n└── sub/\n    └── leaf.txt\n");
}

#[test]
fn given_empty_directory_when_rendering_then_only_root_line() {
    let temp = TempDir::new().unwrap();
    let proj = project_dir(&temp);

    let rendered = render_tree(&proj).unwrap().to_string();

    assert_eq!(rendered, "proj/\n");
}

// ============================================================
// Denylist Tests
// ============================================================

#[test]
fn given_denylisted_names_when_rendering_then_never_listed() {
    let temp = TempDir::new().unwrap();
    let proj = project_dir(&temp);
    fs::create_dir(proj.join(".git")).unwrap();
    touch(&proj.join(".git/HEAD"));
    fs::create_dir(proj.join("node_modules")).unwrap();
    touch(&proj.join(".DS_Store"));
    touch(&proj.join("module.pyc"));
    touch(&proj.join("keep.txt"));

    let rendered = render_tree(&proj).unwrap().to_string();

    assert_eq!(rendered, "proj/\n└── keep.txt\n");
}

#[test]
fn given_denylisted_name_nested_when_rendering_then_excluded_at_any_level() {
    let temp = TempDir::new().unwrap();
    let proj = project_dir(&temp);
    fs::create_dir_all(proj.join("sub/.git")).unwrap();
    touch(&proj.join("sub/ok.txt"));

    let rendered = render_tree(&proj).unwrap().to_string();

    assert_eq!(rendered, "proj/\n└── sub/\n    └── ok.txt\n");
}

// ============================================================
// Symlink Tests
// ============================================================

#[cfg(unix)]
#[test]
fn given_symlinks_when_rendering_then_never_followed_or_listed() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    let proj = project_dir(&temp);
    fs::create_dir(proj.join("real")).unwrap();
    touch(&proj.join("real/file.txt"));
    // A cycle back to the project root and a link to a plain file.
    symlink(&proj, proj.join("loop")).unwrap();
    symlink(proj.join("real/file.txt"), proj.join("alias.txt")).unwrap();

    let rendered = render_tree(&proj).unwrap().to_string();

    assert_eq!(rendered, "proj/\n└── real/\n    └── file.txt\n");
}
