use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::builder::run_build;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::errors::TreeError;
use crate::printer::render_tree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build { file }) => _build(file.as_deref(), cli.root.as_deref()),
        Some(Commands::Tree { dir }) => _tree(dir.as_deref(), cli.root.as_deref()),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument]
fn _build(file: Option<&Path>, root: Option<&Path>) -> CliResult<()> {
    let root = root.map(|r| expand(r));
    debug!("file: {:?}, root: {:?}", file, root);

    let report = match file {
        Some(path) => {
            let path = expand(path);
            let reader = BufReader::new(File::open(&path).map_err(TreeError::from)?);
            run_build(reader, root.as_deref())?
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter the tree sketch, end with Ctrl-D (blank and ... lines are ignored):");
            }
            run_build(stdin.lock(), root.as_deref())?
        }
    };

    output::detail(&format!(
        "{} folder(s), {} file(s) created",
        report.folders, report.files
    ));
    Ok(())
}

#[instrument]
fn _tree(dir: Option<&Path>, root: Option<&Path>) -> CliResult<()> {
    let dir = match dir {
        Some(d) => expand(d),
        None => prompt_for_dir()?,
    };
    let target = match root {
        Some(base) if !dir.is_absolute() => expand(base).join(dir),
        _ => dir,
    };
    debug!("target: {:?}", target);

    let tree = render_tree(&target)?;
    // termtree's Display already terminates the last line
    print!("{}", tree);
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Tilde expansion for user-supplied paths.
fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn prompt_for_dir() -> CliResult<PathBuf> {
    output::prompt("Directory to render:");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(TreeError::from)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CliError::Usage("no directory given".to_string()));
    }
    Ok(expand(Path::new(trimmed)))
}
