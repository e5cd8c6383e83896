mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::CommitInfo;

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or if HEAD is detached.
pub fn current_branch(path: &Path) -> Result<String> {
    Repository::open(path)?.current_branch()
}

/// # Errors
///
/// Returns an error if the path is not a git repository or the tag is unknown.
pub fn commits_since(path: &Path, tag: &str) -> Result<Vec<String>> {
    Repository::open(path)?.commits_since(tag)
}
