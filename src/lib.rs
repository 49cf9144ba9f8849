//! Round-trip directory scaffolding.
//!
//! `build` materializes an indented tree sketch on disk; `tree` prints an
//! existing directory in the same sketch format, so the output of one feeds
//! the other.

pub mod builder;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod parser;
pub mod printer;
pub mod util;

pub use builder::{run_build, Applied, BuildReport, TreeScaffolder};
pub use errors::{TreeError, TreeResult};
pub use parser::{parse_line, SketchLine, INDENT_UNIT};
pub use printer::{render_tree, DENY_NAMES, DENY_SUFFIXES};
