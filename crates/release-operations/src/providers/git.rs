use std::path::Path;

use release_git::{CommitInfo, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn current_branch(&self, repo_root: &Path) -> Result<String> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.current_branch()?)
    }

    fn create_and_switch_branch(&self, repo_root: &Path, name: &str) -> Result<()> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.create_and_switch_branch(name)?)
    }

    fn commits_since(&self, repo_root: &Path, tag: &str) -> Result<Vec<String>> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.commits_since(tag)?)
    }

    fn stage_files(&self, repo_root: &Path, paths: &[&Path]) -> Result<()> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.stage_files(paths)?)
    }

    fn commit(&self, repo_root: &Path, message: &str) -> Result<CommitInfo> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.commit(message)?)
    }
}
