use std::path::Path;

use release_changelog::Changelog;

use crate::Result;

pub trait ChangelogStore: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be read.
    fn read(&self, path: &Path) -> Result<Changelog>;

    /// Replaces the whole file with the document's content.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be written.
    fn write(&self, path: &Path, changelog: &Changelog) -> Result<()>;
}
