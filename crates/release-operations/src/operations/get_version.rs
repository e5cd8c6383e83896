use release_core::SemanticVersion;

use super::read_current_version;
use crate::traits::ChangelogStore;
use crate::{ResolvedRepository, Result};

pub struct GetVersionOperation<S> {
    changelog_store: S,
}

impl<S> GetVersionOperation<S>
where
    S: ChangelogStore,
{
    pub fn new(changelog_store: S) -> Self {
        Self { changelog_store }
    }

    /// The version named by the top section of the repository's changelog.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Parse` if the changelog has no usable version
    /// header, or an error if it cannot be read.
    pub fn execute(&self, repo: &ResolvedRepository<'_>) -> Result<SemanticVersion> {
        let (_, version) = read_current_version(&self.changelog_store, repo)?;
        Ok(version)
    }
}
