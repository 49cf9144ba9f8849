//! Sketch line parsing: one raw text line becomes depth, name and folder flag.

use tracing::trace;

/// Columns per nesting level. The sketch format is fixed at four, matching
/// the width of one `├── ` connector.
pub const INDENT_UNIT: usize = 4;

/// Lines containing this marker stand for elided content and carry no entry.
const ELLIPSIS: &str = "...";

/// One parsed entry of a tree sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchLine {
    pub depth: usize,
    pub name: String,
    pub is_folder: bool,
}

/// Decorative prefix characters: box-drawing connectors and whitespace.
/// Every prefix character counts as exactly one column, tabs included.
fn is_decoration(c: char) -> bool {
    c.is_whitespace() || matches!(c, '├' | '└' | '│' | '─')
}

/// Parse one raw sketch line.
///
/// Returns `None` for lines that carry no entry: blanks, elision markers,
/// pure decoration, and names that are empty once the trailing `/` is
/// stripped. A trailing `/` marks the entry as a folder.
pub fn parse_line(line: &str) -> Option<SketchLine> {
    if line.contains(ELLIPSIS) {
        return None;
    }

    let rest = line.trim_start_matches(is_decoration);
    let prefix_cols = line.chars().count() - rest.chars().count();

    let name = rest.trim();
    let (name, is_folder) = match name.strip_suffix('/') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (name, false),
    };
    if name.is_empty() {
        return None;
    }

    let depth = prefix_cols / INDENT_UNIT;
    trace!("depth: {}, name: {:?}, is_folder: {}", depth, name, is_folder);

    Some(SketchLine {
        depth,
        name: name.to_string(),
        is_folder,
    })
}
