use std::path::Path;

use release_core::{PullRequestRecord, PullRequestState};
use release_github::{
    DraftReleaseParams, GitHubClient, ReleaseHandle, RepositoryInfo, UploadedAsset,
};

use crate::Result;
use crate::traits::RemoteRepository;

pub struct GitHubRemote {
    client: GitHubClient,
}

impl GitHubRemote {
    #[must_use]
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GitHubClient::from_env()?))
    }
}

impl RemoteRepository for GitHubRemote {
    fn get_repository(&self, owner: &str, name: &str) -> Result<RepositoryInfo> {
        Ok(self.client.get_repository(owner, name)?)
    }

    fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
        state: PullRequestState,
    ) -> Result<Vec<PullRequestRecord>> {
        Ok(self.client.list_pull_requests(owner, name, state)?)
    }

    fn create_draft_release(&self, params: &DraftReleaseParams) -> Result<ReleaseHandle> {
        Ok(self.client.create_draft_release(params)?)
    }

    fn upload_release_asset(&self, release: &ReleaseHandle, path: &Path) -> Result<UploadedAsset> {
        Ok(self.client.upload_release_asset(release, path)?)
    }
}
