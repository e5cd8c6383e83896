use std::path::{Path, PathBuf};

use release_config::{ConfigError, Registry, RepositoryDescriptor};

use crate::error::{OperationError, ValidationError};
use crate::Result;

/// A directory holding one checkout per registered repository, each in a
/// subdirectory named after the repository.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    registry: Registry,
}

impl Workspace {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, registry: Registry) -> Self {
        Self {
            root: root.into(),
            registry,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// # Errors
    ///
    /// Returns a validation error if no repository has this name.
    pub fn resolve(&self, name: &str) -> Result<ResolvedRepository<'_>> {
        let descriptor = self.registry.get(name).map_err(|err| match err {
            err @ ConfigError::UnknownRepository { .. } => {
                OperationError::Validation(ValidationError::Repository(err))
            }
            other => OperationError::Config(other),
        })?;
        Ok(self.bind(descriptor))
    }

    /// Repositories whose latest notes are embedded in the aggregator's
    /// changelog.
    pub fn components(&self) -> impl Iterator<Item = ResolvedRepository<'_>> {
        self.registry.components().map(|d| self.bind(d))
    }

    /// Names of every registered repository, used to resolve cross-repository
    /// issue references.
    #[must_use]
    pub fn repository_names(&self) -> Vec<&str> {
        self.registry.names().collect()
    }

    fn bind<'a>(&self, descriptor: &'a RepositoryDescriptor) -> ResolvedRepository<'a> {
        ResolvedRepository {
            root: self.root.join(descriptor.name()),
            descriptor,
        }
    }
}

/// A registered repository located on disk.
#[derive(Debug, Clone)]
pub struct ResolvedRepository<'a> {
    descriptor: &'a RepositoryDescriptor,
    root: PathBuf,
}

impl<'a> ResolvedRepository<'a> {
    #[must_use]
    pub fn descriptor(&self) -> &'a RepositoryDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.descriptor.name()
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(self.descriptor.changelog())
    }

    #[must_use]
    pub fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
