use std::path::Path;

use release_core::{PullRequestRecord, PullRequestState};
use release_github::{DraftReleaseParams, ReleaseHandle, RepositoryInfo, UploadedAsset};

use crate::Result;

pub trait RemoteRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be fetched.
    fn get_repository(&self, owner: &str, name: &str) -> Result<RepositoryInfo>;

    /// Pull requests in the order the remote returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if listing fails.
    fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
        state: PullRequestState,
    ) -> Result<Vec<PullRequestRecord>>;

    /// # Errors
    ///
    /// Returns an error if the release cannot be created.
    fn create_draft_release(&self, params: &DraftReleaseParams) -> Result<ReleaseHandle>;

    /// # Errors
    ///
    /// Returns an error if the asset cannot be read or uploaded.
    fn upload_release_asset(&self, release: &ReleaseHandle, path: &Path) -> Result<UploadedAsset>;
}
