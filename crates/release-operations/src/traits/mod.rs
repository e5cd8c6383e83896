mod changelog_store;
mod git_provider;
mod interaction;
mod metadata_writer;
mod remote_repository;

pub use changelog_store::ChangelogStore;
pub use git_provider::GitProvider;
pub use interaction::InteractionProvider;
pub use metadata_writer::MetadataWriter;
pub use remote_repository::RemoteRepository;
