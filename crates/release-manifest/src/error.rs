use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read metadata file at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write metadata file at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid field pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("field pattern '{pattern}' must be anchored with '^' and '$'")]
    UnanchoredPattern { pattern: String },

    #[error("field pattern '{pattern}' is missing the '{group}' capture group")]
    MissingCaptureGroup {
        pattern: String,
        group: &'static str,
    },
}
