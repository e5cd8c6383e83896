use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to '{url}' failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub returned {status} for '{url}': {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response body from '{url}'")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("failed to read release asset '{path}'")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("release asset path '{path}' has no file name")]
    AssetName { path: PathBuf },
}
