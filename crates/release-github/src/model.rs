use release_core::PullRequestRecord;
use serde::{Deserialize, Serialize};

use crate::link::strip_uri_template;
use crate::types::{ReleaseHandle, RepositoryInfo, UploadedAsset};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiRepository {
    pub name: String,
    pub owner: ApiUser,
    pub html_url: String,
    #[serde(default)]
    pub default_branch: String,
}

impl From<ApiRepository> for RepositoryInfo {
    fn from(repo: ApiRepository) -> Self {
        Self {
            owner: repo.owner.login,
            name: repo.name,
            html_url: repo.html_url,
            default_branch: repo.default_branch,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub labels: Vec<ApiLabel>,
    #[serde(default)]
    pub merged_at: Option<String>,
    #[serde(default)]
    pub merge_commit_sha: Option<String>,
    pub html_url: String,
}

impl ApiPullRequest {
    pub(crate) fn into_record(self, repository: &str) -> PullRequestRecord {
        PullRequestRecord {
            number: self.number,
            title: self.title,
            body: self.body.unwrap_or_default(),
            author: self.user.map(|u| u.login).unwrap_or_default(),
            labels: self.labels.into_iter().map(|l| l.name).collect(),
            repository: repository.to_string(),
            merge_commit_sha: self.merge_commit_sha,
            html_url: self.html_url,
            merged: self.merged_at.is_some(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateReleaseRequest<'a> {
    pub tag_name: &'a str,
    pub target_commitish: &'a str,
    pub name: &'a str,
    pub body: &'a str,
    pub draft: bool,
    pub prerelease: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiRelease {
    pub id: u64,
    pub html_url: String,
    pub upload_url: String,
    pub tag_name: String,
}

impl From<ApiRelease> for ReleaseHandle {
    fn from(release: ApiRelease) -> Self {
        Self {
            id: release.id,
            upload_url: strip_uri_template(&release.upload_url).to_string(),
            html_url: release.html_url,
            tag: release.tag_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiAsset {
    pub id: u64,
    pub name: String,
    pub browser_download_url: String,
}

impl From<ApiAsset> for UploadedAsset {
    fn from(asset: ApiAsset) -> Self {
        Self {
            id: asset.id,
            name: asset.name,
            browser_download_url: asset.browser_download_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
