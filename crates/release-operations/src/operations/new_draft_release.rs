use std::path::PathBuf;

use release_core::SemanticVersion;
use release_github::{DraftReleaseParams, ReleaseHandle, UploadedAsset};
use tracing::info;

use super::read_current_version;
use crate::error::ValidationError;
use crate::traits::{ChangelogStore, RemoteRepository};
use crate::{Result, Workspace};

#[derive(Debug, Clone)]
pub struct DraftReleaseOutput {
    pub version: SemanticVersion,
    pub release: ReleaseHandle,
    pub assets: Vec<UploadedAsset>,
}

pub struct NewDraftReleaseOperation<S, R> {
    changelog_store: S,
    remote: R,
}

impl<S, R> NewDraftReleaseOperation<S, R>
where
    S: ChangelogStore,
    R: RemoteRepository,
{
    pub fn new(changelog_store: S, remote: R) -> Self {
        Self {
            changelog_store,
            remote,
        }
    }

    /// Opens a draft release for the changelog's current version, using its
    /// top section as the release notes, and uploads `assets` to it.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown repository or a missing asset
    /// file, a parse error if the current version cannot be read, or the
    /// remote error that stopped the release or an upload.
    pub fn execute(
        &self,
        workspace: &Workspace,
        repository: &str,
        assets: &[PathBuf],
    ) -> Result<DraftReleaseOutput> {
        let repo = workspace.resolve(repository)?;
        let descriptor = repo.descriptor();

        if let Some(missing) = assets.iter().find(|path| !path.is_file()) {
            return Err(ValidationError::MissingAsset {
                path: missing.clone(),
            }
            .into());
        }

        let (changelog, version) = read_current_version(&self.changelog_store, &repo)?;
        let tag = descriptor.tag(&version);
        let notes = changelog.first_section().join("\n");

        let remote_repo = self
            .remote
            .get_repository(descriptor.owner(), descriptor.name())?;
        let params = DraftReleaseParams {
            owner: remote_repo.owner,
            repository: remote_repo.name,
            target: descriptor.release_branch(&version),
            title: tag.clone(),
            tag,
            body: notes,
            prerelease: version.is_prerelease(),
        };

        let release = self.remote.create_draft_release(&params)?;
        info!(url = %release.html_url, tag = %release.tag, "draft release created");

        let uploaded = assets
            .iter()
            .map(|path| -> Result<UploadedAsset> {
                let asset = self.remote.upload_release_asset(&release, path)?;
                info!(name = %asset.name, "uploaded release asset");
                Ok(asset)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DraftReleaseOutput {
            version,
            release,
            assets: uploaded,
        })
    }
}
