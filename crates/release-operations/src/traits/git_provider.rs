use std::path::Path;

use release_git::CommitInfo;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, repo_root: &Path) -> Result<String>;

    /// Makes `name` the current branch, creating or resetting it at HEAD
    /// unless HEAD is already on it. The working tree is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be created or checked out.
    fn create_and_switch_branch(&self, repo_root: &Path, name: &str) -> Result<()>;

    /// Hashes of commits reachable from HEAD but not from `tag`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag does not exist or the history walk fails.
    fn commits_since(&self, repo_root: &Path, tag: &str) -> Result<Vec<String>>;

    /// # Errors
    ///
    /// Returns an error if staging any of the files fails.
    fn stage_files(&self, repo_root: &Path, paths: &[&Path]) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, repo_root: &Path, message: &str) -> Result<CommitInfo>;
}
