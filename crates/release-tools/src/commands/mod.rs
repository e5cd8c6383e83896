mod get_version;
mod new_draft_release;
mod update_changelog;
mod update_version;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use release_operations::Workspace;
use release_operations::operations::ReleaseCommit;

use crate::error::Result;
use crate::interaction::{ConfirmMode, TerminalInteractionProvider};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Prepend a changelog section built from pull requests merged since the last release
    UpdateChangelog {
        /// Repository name from the registry
        repository: String,
        /// New version including the tag prefix, e.g. v2023.1.0-preview.1
        version: String,
        #[command(flatten)]
        commit: CommitArgs,
    },
    /// Write the changelog's current version into the repository's metadata files
    UpdateVersion {
        /// Repository name from the registry
        repository: String,
        #[command(flatten)]
        commit: CommitArgs,
    },
    /// Open a draft GitHub release for the changelog's current version
    NewDraftRelease {
        /// Repository name from the registry
        repository: String,
        /// Files to attach to the release
        assets: Vec<PathBuf>,
    },
    /// Print the version named by the changelog's top section
    GetVersion {
        /// Repository name from the registry
        repository: String,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub(crate) struct CommitArgs {
    /// Create the release branch and commit without asking
    #[arg(long, short = 'y', conflicts_with = "no_commit")]
    yes: bool,

    /// Leave the changes uncommitted on the current branch
    #[arg(long)]
    no_commit: bool,
}

impl CommitArgs {
    fn interaction(self) -> TerminalInteractionProvider {
        TerminalInteractionProvider::new(ConfirmMode::from_flags(self.yes, self.no_commit))
    }
}

impl Commands {
    pub(crate) fn execute(self, workspace: &Workspace) -> Result<()> {
        match self {
            Self::UpdateChangelog {
                repository,
                version,
                commit,
            } => update_changelog::run(workspace, &repository, &version, commit.interaction()),
            Self::UpdateVersion { repository, commit } => {
                update_version::run(workspace, &repository, commit.interaction())
            }
            Self::NewDraftRelease { repository, assets } => {
                new_draft_release::run(workspace, &repository, &assets)
            }
            Self::GetVersion { repository } => get_version::run(workspace, &repository),
        }
    }
}

fn print_commit(commit: Option<&ReleaseCommit>) {
    match commit {
        Some(commit) => println!(
            "Committed {} on branch '{}'.",
            short_sha(&commit.commit.sha),
            commit.branch
        ),
        None => println!("Changes left uncommitted."),
    }
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sha_truncates_to_seven() {
        assert_eq!(short_sha("0123456789abcdef"), "0123456");
        assert_eq!(short_sha("abc"), "abc");
    }
}
