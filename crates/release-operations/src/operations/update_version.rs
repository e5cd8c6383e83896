use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use release_config::ValueSource;
use release_core::SemanticVersion;
use tracing::{debug, info, warn};

use super::{ReleaseCommit, commit_to_release_branch, read_current_version};
use crate::traits::{ChangelogStore, GitProvider, InteractionProvider, MetadataWriter};
use crate::{Result, Workspace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub file: PathBuf,
    pub source: ValueSource,
    pub value: String,
    /// Lines the field pattern matched; zero means the file lacks the field.
    pub matched: usize,
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateVersionOutput {
    pub version: SemanticVersion,
    pub tag: String,
    pub fields: Vec<FieldChange>,
    pub staged: Vec<PathBuf>,
    pub commit: Option<ReleaseCommit>,
}

impl UpdateVersionOutput {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.fields.iter().any(|f| f.changed)
    }
}

pub struct UpdateVersionOperation<S, G, M, I> {
    changelog_store: S,
    git_provider: G,
    metadata_writer: M,
    interaction: I,
}

impl<S, G, M, I> UpdateVersionOperation<S, G, M, I>
where
    S: ChangelogStore,
    G: GitProvider,
    M: MetadataWriter,
    I: InteractionProvider,
{
    pub fn new(changelog_store: S, git_provider: G, metadata_writer: M, interaction: I) -> Self {
        Self {
            changelog_store,
            git_provider,
            metadata_writer,
            interaction,
        }
    }

    /// Writes the changelog's current version into every metadata field of
    /// the repository and stages the touched files.
    ///
    /// The release branch and commit are offered only when a file actually
    /// changed, so a second run with the same version does nothing.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown repository, a parse error if
    /// the current version cannot be read, or any file or git error. Files
    /// rewritten before a failure stay rewritten.
    pub fn execute(&self, workspace: &Workspace, repository: &str) -> Result<UpdateVersionOutput> {
        let repo = workspace.resolve(repository)?;
        let descriptor = repo.descriptor();
        let (_, version) = read_current_version(&self.changelog_store, &repo)?;
        let tag = descriptor.tag(&version);
        info!(repository = descriptor.name(), %version, "propagating version");

        let mut fields = Vec::with_capacity(descriptor.fields().len());
        let mut files = IndexSet::new();

        for field in descriptor.fields() {
            let path = repo.path(field.file());
            let value = field.produce(&version);
            let update = self
                .metadata_writer
                .rewrite_field(&path, field.pattern(), &value)?;

            if update.matched == 0 {
                warn!(
                    file = %field.file().display(),
                    pattern = field.pattern().as_str(),
                    "field not found"
                );
            } else {
                debug!(
                    file = %field.file().display(),
                    source = %field.value(),
                    %value,
                    changed = update.changed,
                    "rewrote field"
                );
            }

            files.insert(path.clone());
            fields.push(FieldChange {
                file: path,
                source: field.value(),
                value,
                matched: update.matched,
                changed: update.changed,
            });
        }

        let staged: Vec<PathBuf> = files.into_iter().collect();
        if !staged.is_empty() {
            let paths: Vec<&Path> = staged.iter().map(PathBuf::as_path).collect();
            self.git_provider.stage_files(repo.root(), &paths)?;
        }

        let commit = if fields.iter().any(|f| f.changed) {
            commit_to_release_branch(
                &self.git_provider,
                &self.interaction,
                repo.root(),
                &descriptor.release_branch(&version),
                &[],
                &format!("Bump version to `{tag}`"),
            )?
        } else {
            info!(%tag, "metadata already matches, nothing to commit");
            None
        };

        Ok(UpdateVersionOutput {
            version,
            tag,
            fields,
            staged,
            commit,
        })
    }
}
