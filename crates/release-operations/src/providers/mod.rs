mod changelog;
mod git;
mod github;
mod manifest;

pub use changelog::FileSystemChangelogStore;
pub use git::Git2Provider;
pub use github::GitHubRemote;
pub use manifest::FileSystemMetadataWriter;
