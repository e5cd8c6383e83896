use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] release_operations::OperationError),

    #[error("failed to load repository registry")]
    Config(#[from] release_config::ConfigError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("'{}' has no parent directory; pass --workspace", path.display())]
    NoParentDir { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CliError>;
