use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Hashes of commits reachable from HEAD but not from `tag`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the tag does not resolve to a
    /// commit, or an error if the history walk fails.
    pub fn commits_since(&self, tag: &str) -> Result<Vec<String>> {
        let base = self.resolve_commit(tag)?;

        let mut walk = self.inner.revwalk()?;
        walk.push_head()?;
        walk.hide(base.id())?;

        walk.map(|oid| oid.map(|id| id.to_string()).map_err(GitError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{commit_file, setup_test_repo};
    use crate::GitError;

    #[test]
    fn lists_commits_after_tag() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let tagged = repo.inner.head()?.peel_to_commit()?;
        let sig = git2::Signature::now("Test", "test@example.com")?;
        repo.inner
            .tag("v1.2.3", tagged.as_object(), &sig, "v1.2.3", false)?;

        let first = commit_file(&repo, "a.txt", "a", "First")?;
        let second = commit_file(&repo, "b.txt", "b", "Second")?;

        let commits = repo.commits_since("v1.2.3")?;

        assert_eq!(commits.len(), 2);
        assert!(commits.contains(&first));
        assert!(commits.contains(&second));
        assert!(!commits.contains(&tagged.id().to_string()));
        Ok(())
    }

    #[test]
    fn empty_when_head_is_tagged() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        let head = repo.inner.head()?.peel_to_commit()?;
        repo.inner.tag_lightweight("v1.0.0", head.as_object(), false)?;

        assert!(repo.commits_since("v1.0.0")?.is_empty());
        Ok(())
    }

    #[test]
    fn unknown_tag_is_an_error() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        let result = repo.commits_since("v9.9.9");

        assert!(matches!(result, Err(GitError::RefNotFound { .. })));
        Ok(())
    }
}
