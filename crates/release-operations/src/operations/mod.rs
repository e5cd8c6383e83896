mod get_version;
mod new_draft_release;
mod release_notes;
mod update_changelog;
mod update_version;

use std::path::Path;

use release_changelog::{Changelog, ChangelogError};
use release_core::SemanticVersion;
use release_git::CommitInfo;
use tracing::info;

use crate::traits::{ChangelogStore, GitProvider, InteractionProvider};
use crate::{OperationError, ResolvedRepository, Result};

pub use get_version::GetVersionOperation;
pub use new_draft_release::{DraftReleaseOutput, NewDraftReleaseOperation};
pub use release_notes::{
    IGNORE_LABEL, IGNORED_TITLE_PREFIXES, assemble_section_body, is_release_note_candidate,
};
pub use update_changelog::{UpdateChangelogOperation, UpdateChangelogOutput};
pub use update_version::{FieldChange, UpdateVersionOperation, UpdateVersionOutput};

/// A commit recorded on a release branch after the user agreed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCommit {
    pub branch: String,
    pub commit: CommitInfo,
}

/// Reads a repository's changelog and the version named by its top section.
pub(crate) fn read_current_version<S: ChangelogStore>(
    store: &S,
    repo: &ResolvedRepository<'_>,
) -> Result<(Changelog, SemanticVersion)> {
    let changelog = store.read(&repo.changelog_path())?;
    let version = changelog
        .current_version(repo.descriptor().tag_prefix())
        .map_err(|source| match source {
            ChangelogError::MissingVersionHeader | ChangelogError::InvalidVersionHeader { .. } => {
                OperationError::Parse {
                    repository: repo.name().to_string(),
                    source,
                }
            }
            other => OperationError::Changelog(other),
        })?;
    Ok((changelog, version))
}

/// Asks before switching to `branch`, staging `paths` and committing.
///
/// Returns `None` when the user declines; nothing is touched in that case.
pub(crate) fn commit_to_release_branch<G, I>(
    git: &G,
    interaction: &I,
    repo_root: &Path,
    branch: &str,
    paths: &[&Path],
    message: &str,
) -> Result<Option<ReleaseCommit>>
where
    G: GitProvider,
    I: InteractionProvider,
{
    let prompt = format!("Commit \"{message}\" to branch '{branch}'?");
    if !interaction.confirm(&prompt)? {
        info!(branch, "skipping release branch and commit");
        return Ok(None);
    }

    git.create_and_switch_branch(repo_root, branch)?;
    if !paths.is_empty() {
        git.stage_files(repo_root, paths)?;
    }
    let commit = git.commit(repo_root, message)?;
    info!(branch, sha = %commit.sha, "committed release change");

    Ok(Some(ReleaseCommit {
        branch: branch.to_string(),
        commit,
    }))
}
