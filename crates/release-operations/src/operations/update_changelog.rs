use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use release_changelog::{ClassifyContext, classify, section_bullets};
use release_core::{PullRequestState, SemanticVersion};
use tracing::{debug, info, warn};

use super::release_notes::{assemble_section_body, is_release_note_candidate};
use super::{ReleaseCommit, commit_to_release_branch, read_current_version};
use crate::error::ValidationError;
use crate::traits::{ChangelogStore, GitProvider, InteractionProvider, RemoteRepository};
use crate::{Result, Workspace};

#[derive(Debug, Clone)]
pub struct UpdateChangelogOutput {
    pub previous_version: SemanticVersion,
    pub version: SemanticVersion,
    /// `<prefix><version>`, as written into the new section header.
    pub tag: String,
    pub changelog_path: PathBuf,
    pub bullets: Vec<String>,
    pub commit: Option<ReleaseCommit>,
}

pub struct UpdateChangelogOperation<S, G, R, I> {
    changelog_store: S,
    git_provider: G,
    remote: R,
    interaction: I,
    date: Option<NaiveDate>,
}

impl<S, G, R, I> UpdateChangelogOperation<S, G, R, I>
where
    S: ChangelogStore,
    G: GitProvider,
    R: RemoteRepository,
    I: InteractionProvider,
{
    pub fn new(changelog_store: S, git_provider: G, remote: R, interaction: I) -> Self {
        Self {
            changelog_store,
            git_provider,
            remote,
            interaction,
            date: None,
        }
    }

    /// Dates the new section with `date` instead of today.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Prepends a section for `version` listing the pull requests merged since
    /// the current version was tagged, then offers to commit it on the
    /// release branch.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown repository or a version
    /// without the repository's tag prefix, a parse error if the current
    /// version cannot be read, or any git, remote or file error. Nothing is
    /// written before the current version and the pull requests are known.
    pub fn execute(
        &self,
        workspace: &Workspace,
        repository: &str,
        version: &str,
    ) -> Result<UpdateChangelogOutput> {
        let repo = workspace.resolve(repository)?;
        let descriptor = repo.descriptor();
        let target = descriptor.parse_tagged_version(version).ok_or_else(|| {
            ValidationError::Version {
                version: version.to_string(),
                tag_prefix: descriptor.tag_prefix().to_string(),
            }
        })?;

        let (mut changelog, current) = read_current_version(&self.changelog_store, &repo)?;
        if target <= current {
            warn!(%current, %target, "new version does not follow the current one");
        }

        let since = descriptor.tag(&current);
        let unreleased: HashSet<String> = self
            .git_provider
            .commits_since(repo.root(), &since)?
            .into_iter()
            .collect();
        debug!(tag = %since, commits = unreleased.len(), "collected unreleased commits");

        let pull_requests = self.remote.list_pull_requests(
            descriptor.owner(),
            descriptor.name(),
            PullRequestState::All,
        )?;

        let known = workspace.repository_names();
        let context = ClassifyContext {
            repository: descriptor.name(),
            known_repositories: &known,
        };
        let bullets: Vec<String> = pull_requests
            .iter()
            .filter(|pr| is_release_note_candidate(pr, &unreleased))
            .map(|pr| classify(pr, context))
            .collect();
        info!(
            repository = descriptor.name(),
            fetched = pull_requests.len(),
            included = bullets.len(),
            "classified pull requests"
        );

        let mut embedded = Vec::new();
        if descriptor.is_aggregator() {
            for component in workspace.components() {
                let notes = self.changelog_store.read(&component.changelog_path())?;
                embedded.push((
                    component.descriptor(),
                    section_bullets(notes.first_section()),
                ));
            }
        }
        let body = assemble_section_body(descriptor, bullets.clone(), &embedded);

        let tag = descriptor.tag(&target);
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let changelog_path = repo.changelog_path();
        changelog.prepend_section(&tag, date, &body);
        self.changelog_store.write(&changelog_path, &changelog)?;
        info!(path = %changelog_path.display(), %tag, "updated changelog");

        let commit = commit_to_release_branch(
            &self.git_provider,
            &self.interaction,
            repo.root(),
            &descriptor.release_branch(&target),
            &[changelog_path.as_path()],
            &format!("Update CHANGELOG for `{tag}`"),
        )?;

        Ok(UpdateChangelogOutput {
            previous_version: current,
            version: target,
            tag,
            changelog_path,
            bullets,
            commit,
        })
    }
}
