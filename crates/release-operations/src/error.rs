use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Repository(release_config::ConfigError),

    #[error(
        "invalid version '{version}': expected '{tag_prefix}<major>.<minor>.<patch>[-preview[.<n>]]'"
    )]
    Version { version: String, tag_prefix: String },

    #[error("release asset '{}' does not exist", path.display())]
    MissingAsset { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] release_core::CoreError),

    #[error(transparent)]
    Changelog(#[from] release_changelog::ChangelogError),

    #[error(transparent)]
    Git(#[from] release_git::GitError),

    #[error(transparent)]
    Manifest(#[from] release_manifest::ManifestError),

    #[error(transparent)]
    Config(#[from] release_config::ConfigError),

    /// The changelog's top section does not name a usable version.
    #[error("cannot determine the current version of '{repository}'")]
    Parse {
        repository: String,
        #[source]
        source: release_changelog::ChangelogError,
    },

    /// Caller input was rejected before any work started.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("remote repository request failed")]
    Remote(#[from] release_github::RemoteError),

    #[error("confirmation prompt failed")]
    Interaction(#[source] std::io::Error),
}

impl OperationError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
