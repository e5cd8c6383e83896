use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid field pattern for '{file}' in repository '{repository}'")]
    FieldPattern {
        repository: String,
        file: PathBuf,
        #[source]
        source: release_manifest::ManifestError,
    },

    #[error("repository '{name}' is defined more than once")]
    DuplicateRepository { name: String },

    #[error("repositories '{first}' and '{second}' are both marked as aggregator")]
    MultipleAggregators { first: String, second: String },

    #[error("configuration defines no repositories")]
    Empty,

    #[error("unknown repository '{name}' (known: {known})")]
    UnknownRepository { name: String, known: String },
}
