use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::DetachedHead`] if HEAD is not on a branch.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.inner.head()?;

        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }

        head.shorthand()
            .map(String::from)
            .ok_or(GitError::DetachedHead)
    }

    /// Points HEAD at `name`, like `git checkout -B`: the branch is created,
    /// or reset when it already exists, at the current commit. Staying on the
    /// branch HEAD already names is a no-op, so its commits are kept.
    ///
    /// The index and working tree are left alone, so pending edits carry over
    /// and the next commit is always made on top of the tree they came from.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidBranchName`] for names git rejects, or an
    /// error if HEAD cannot be resolved or moved.
    pub fn create_and_switch_branch(&self, name: &str) -> Result<()> {
        let refname = format!("refs/heads/{name}");
        if !git2::Reference::is_valid_name(&refname) {
            return Err(GitError::InvalidBranchName {
                name: name.to_string(),
            });
        }

        if self.current_branch().ok().as_deref() == Some(name) {
            return Ok(());
        }

        let head = self.inner.head()?.peel_to_commit()?;
        self.inner.branch(name, &head, true)?;
        self.inner.set_head(&refname)?;
        Ok(())
    }
}
