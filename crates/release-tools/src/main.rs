mod commands;
mod environment;
mod error;
mod interaction;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use release_config::Registry;
use release_operations::Workspace;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::error::CliError;

const LOG_ENV: &str = "RELEASE_TOOLS_LOG";

#[derive(Parser)]
#[command(name = "release-tools")]
#[command(version)]
#[command(about = "Changelog, version and draft release bookkeeping", long_about = None)]
struct Cli {
    /// Directory containing the repository checkouts (default: parent of the current directory)
    #[arg(long, short = 'w', global = true)]
    workspace: Option<PathBuf>,

    /// Repository registry to use instead of the workspace's release-tools.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let root = resolve_workspace_dir(cli.workspace)?;
    let registry = Registry::discover(&root, cli.config.as_deref())?;
    let workspace = Workspace::new(root, registry);

    cli.command.execute(&workspace)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .without_time()
        .init();
}

fn resolve_workspace_dir(workspace: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match workspace {
        Some(dir) => Ok(dir),
        None => {
            let cwd = std::env::current_dir().map_err(CliError::CurrentDir)?;
            parent_of(&cwd)
        }
    }
}

fn parent_of(dir: &Path) -> Result<PathBuf, CliError> {
    dir.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| CliError::NoParentDir {
            path: dir.to_path_buf(),
        })
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_workspace_is_used_verbatim() -> anyhow::Result<()> {
        let dir = resolve_workspace_dir(Some(PathBuf::from("checkouts")))?;

        assert_eq!(dir, PathBuf::from("checkouts"));
        Ok(())
    }

    #[test]
    fn default_workspace_is_parent_directory() -> anyhow::Result<()> {
        let parent = parent_of(Path::new("/src/vscode-powershell"))?;

        assert_eq!(parent, PathBuf::from("/src"));
        Ok(())
    }

    #[test]
    fn filesystem_root_has_no_workspace() {
        let result = parent_of(Path::new("/"));

        assert!(matches!(result, Err(CliError::NoParentDir { .. })));
    }

    #[test]
    fn cli_rejects_conflicting_commit_flags() {
        let result = Cli::try_parse_from([
            "release-tools",
            "update-version",
            "PowerShellEditorServices",
            "--yes",
            "--no-commit",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn global_options_follow_subcommand() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "release-tools",
            "get-version",
            "vscode-powershell",
            "--workspace",
            "/src",
            "-v",
        ])?;

        assert_eq!(cli.workspace, Some(PathBuf::from("/src")));
        assert!(cli.verbose);
        Ok(())
    }
}
