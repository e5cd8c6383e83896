use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to read changelog at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changelog at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("changelog has no '## ' section header to take the current version from")]
    MissingVersionHeader,

    #[error("changelog header '{header}' does not match '## {tag_prefix}<major>.<minor>.<patch>[-preview[.<n>]]'")]
    InvalidVersionHeader {
        header: String,
        tag_prefix: String,
        #[source]
        source: Option<release_core::CoreError>,
    },
}
