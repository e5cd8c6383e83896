use std::path::Path;

use release_changelog::Changelog;

use crate::Result;
use crate::traits::ChangelogStore;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemChangelogStore;

impl FileSystemChangelogStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogStore for FileSystemChangelogStore {
    fn read(&self, path: &Path) -> Result<Changelog> {
        Ok(Changelog::from_file(path)?)
    }

    fn write(&self, path: &Path, changelog: &Changelog) -> Result<()> {
        Ok(changelog.write_to_file(path)?)
    }
}
