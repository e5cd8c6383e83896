mod branch;
mod history;
mod index;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner.workdir().ok_or_else(|| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        // dunce keeps the \\?\ prefix off Windows paths
        let root = dunce::canonicalize(root).unwrap_or_else(|_| dunce::simplified(root).to_path_buf());

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn to_relative_path(&self, path: &Path) -> PathBuf {
        if !path.is_absolute() {
            return path.to_path_buf();
        }

        if let Ok(relative) = dunce::simplified(path).strip_prefix(&self.root) {
            return relative.to_path_buf();
        }

        // Symlinked temp or home directories resolve differently from the workdir.
        dunce::canonicalize(path)
            .ok()
            .and_then(|canonical| canonical.strip_prefix(&self.root).ok().map(Path::to_path_buf))
            .unwrap_or_else(|| path.to_path_buf())
    }

    fn resolve_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        let not_found = || GitError::RefNotFound {
            refspec: refspec.to_string(),
        };

        self.inner
            .revparse_single(refspec)
            .map_err(|_| not_found())?
            .peel_to_commit()
            .map_err(|_| not_found())
    }
}
