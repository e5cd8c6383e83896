mod client;
mod error;
mod link;
mod model;
mod types;

pub use client::{API_URL_ENV, DEFAULT_API_URL, GitHubClient, TOKEN_ENV};
pub use error::RemoteError;
pub use types::{DraftReleaseParams, ReleaseHandle, RepositoryInfo, UploadedAsset};

pub type Result<T> = std::result::Result<T, RemoteError>;
