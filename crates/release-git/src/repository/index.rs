use std::path::Path;

use crate::{CommitInfo, Result};

use super::Repository;

impl Repository {
    /// # Errors
    ///
    /// Returns an error if any path cannot be added to the index.
    pub fn stage_files(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self.inner.index()?;

        for path in paths {
            index.add_path(&self.to_relative_path(path))?;
        }

        index.write()?;
        Ok(())
    }

    /// Commits the current index on top of HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error if no signature is configured or the commit fails.
    pub fn commit(&self, message: &str) -> Result<CommitInfo> {
        let sig = self.inner.signature()?;
        let mut index = self.inner.index()?;
        let tree = self.inner.find_tree(index.write_tree()?)?;

        let parent = self.inner.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .inner
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;

        Ok(CommitInfo {
            sha: oid.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::setup_test_repo;
    use std::fs;
    use std::path::Path;

    #[test]
    fn stages_relative_and_absolute_paths() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        fs::write(dir.path().join("package.json"), "{}\n")?;
        fs::write(dir.path().join("CHANGELOG.md"), "# History\n")?;
        let absolute = repo.root().join("CHANGELOG.md");

        repo.stage_files(&[Path::new("package.json"), absolute.as_path()])?;

        let index = repo.inner.index()?;
        assert!(index.get_path(Path::new("package.json"), 0).is_some());
        assert!(index.get_path(Path::new("CHANGELOG.md"), 0).is_some());
        Ok(())
    }

    #[test]
    fn stages_nested_file() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let nested = Path::new("module/PowerShellEditorServices/PowerShellEditorServices.psd1");
        fs::create_dir_all(dir.path().join("module/PowerShellEditorServices"))?;
        fs::write(dir.path().join(nested), "@{}\n")?;

        repo.stage_files(&[nested])?;

        let index = repo.inner.index()?;
        assert!(index.get_path(nested, 0).is_some());
        Ok(())
    }

    #[test]
    fn staging_missing_file_fails() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        assert!(repo.stage_files(&[Path::new("missing.txt")]).is_err());
        Ok(())
    }

    #[test]
    fn commit_moves_head() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        fs::write(dir.path().join("CHANGELOG.md"), "# History\n")?;
        repo.stage_files(&[Path::new("CHANGELOG.md")])?;

        let info = repo.commit("Update CHANGELOG for `v1.2.4`")?;

        let head = repo.inner.head()?.peel_to_commit()?;
        assert_eq!(head.id().to_string(), info.sha);
        assert_eq!(head.message(), Some("Update CHANGELOG for `v1.2.4`"));
        assert_eq!(head.parent_count(), 1);
        Ok(())
    }
}
