use std::collections::HashSet;

use release_changelog::{format_repository_subsection, is_bot};
use release_config::RepositoryDescriptor;
use release_core::PullRequestRecord;

/// Pull requests carrying this label never reach the changelog.
pub const IGNORE_LABEL: &str = "Ignore";

/// Titles of pull requests that are themselves release bookkeeping.
pub const IGNORED_TITLE_PREFIXES: &[&str] = &["[Ignore]", "Update CHANGELOG", "Bump version"];

/// Whether a pull request belongs in the notes for the unreleased commits.
#[must_use]
pub fn is_release_note_candidate(pr: &PullRequestRecord, unreleased: &HashSet<String>) -> bool {
    let Some(sha) = pr.merge_commit_sha.as_deref() else {
        return false;
    };

    pr.merged
        && unreleased.contains(sha)
        && !is_bot(&pr.author)
        && !pr.has_label(IGNORE_LABEL)
        && !IGNORED_TITLE_PREFIXES
            .iter()
            .any(|prefix| pr.title.starts_with(prefix))
}

/// Lines between a new section's date subheader and the previous section.
///
/// A component's notes are just its bullets. The aggregator's notes are split
/// into one linked subsection per repository, its own first, followed by the
/// bullets already released by each component.
#[must_use]
pub fn assemble_section_body(
    repository: &RepositoryDescriptor,
    bullets: Vec<String>,
    embedded: &[(&RepositoryDescriptor, Vec<String>)],
) -> Vec<String> {
    if !repository.is_aggregator() {
        return bullets;
    }

    let mut body =
        format_repository_subsection(repository.name(), &repository.html_url(), &bullets);
    for (component, component_bullets) in embedded {
        body.push(String::new());
        body.extend(format_repository_subsection(
            component.name(),
            &component.html_url(),
            component_bullets,
        ));
    }
    body
}
