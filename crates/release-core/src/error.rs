use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid version '{version}': expected <major>.<minor>.<patch>[-preview[.<n>]]")]
    InvalidVersion { version: String },

    #[error("invalid version '{version}'")]
    Semver {
        version: String,
        #[source]
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
