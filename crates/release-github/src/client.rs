use std::fs;
use std::path::Path;

use release_core::{PullRequestRecord, PullRequestState};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE, LINK};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::RemoteError;
use crate::link::next_page;
use crate::model::{
    ApiAsset, ApiErrorBody, ApiPullRequest, ApiRelease, ApiRepository, CreateReleaseRequest,
};
use crate::types::{DraftReleaseParams, ReleaseHandle, RepositoryInfo, UploadedAsset};
use crate::Result;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const PAGE_SIZE: &str = "100";

/// Blocking GitHub REST client covering the handful of endpoints releases need.
pub struct GitHubClient {
    http: Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    /// # Errors
    ///
    /// Returns [`RemoteError::Client`] if the HTTP client cannot be built.
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("release-tools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RemoteError::Client)?;

        let api_base = api_base.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            api_base,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Builds a client from `GITHUB_API_URL` and `GITHUB_TOKEN`.
    ///
    /// Requests are sent anonymously when no token is set, which is enough for
    /// reading public repositories but not for creating releases.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Client`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        let api_base =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_base, std::env::var(TOKEN_ENV).ok())
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the repository does not exist.
    pub fn get_repository(&self, owner: &str, name: &str) -> Result<RepositoryInfo> {
        let url = format!("{}/repos/{owner}/{name}", self.api_base);
        debug!(%url, "fetching repository");

        let response = self.send(self.http.get(&url), &url)?;
        let repo: ApiRepository = decode(response, &url)?;
        Ok(repo.into())
    }

    /// Lists pull requests in API order, following every `rel="next"` page.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails or cannot be decoded.
    pub fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
        state: PullRequestState,
    ) -> Result<Vec<PullRequestRecord>> {
        let first = format!("{}/repos/{owner}/{name}/pulls", self.api_base);
        let mut request = self
            .http
            .get(&first)
            .query(&[("state", state.as_str()), ("per_page", PAGE_SIZE)]);
        let mut url = first;
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            debug!(%url, page, "listing pull requests");
            let response = self.send(request, &url)?;
            let next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page);

            let batch: Vec<ApiPullRequest> = decode(response, &url)?;
            records.extend(batch.into_iter().map(|pr| pr.into_record(name)));

            match next {
                Some(next_url) => {
                    request = self.http.get(&next_url);
                    url = next_url;
                    page += 1;
                }
                None => break,
            }
        }

        info!(owner, name, count = records.len(), "fetched pull requests");
        Ok(records)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub fn create_draft_release(&self, params: &DraftReleaseParams) -> Result<ReleaseHandle> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.api_base, params.owner, params.repository
        );
        let body = CreateReleaseRequest {
            tag_name: &params.tag,
            target_commitish: &params.target,
            name: &params.title,
            body: &params.body,
            draft: true,
            prerelease: params.prerelease,
        };
        debug!(%url, tag = %params.tag, prerelease = params.prerelease, "creating draft release");

        let response = self.send(self.http.post(&url).json(&body), &url)?;
        let release: ApiRelease = decode(response, &url)?;
        let handle = ReleaseHandle::from(release);

        info!(id = handle.id, url = %handle.html_url, "created draft release");
        Ok(handle)
    }

    /// Uploads a file as a release asset named after its file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the upload fails.
    pub fn upload_release_asset(
        &self,
        release: &ReleaseHandle,
        path: &Path,
    ) -> Result<UploadedAsset> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| RemoteError::AssetName {
                path: path.to_path_buf(),
            })?;
        let content = fs::read(path).map_err(|source| RemoteError::AssetRead {
            path: path.to_path_buf(),
            source,
        })?;

        let url = release.upload_url.clone();
        debug!(%url, file_name, bytes = content.len(), "uploading release asset");

        let request = self
            .http
            .post(&url)
            .query(&[("name", file_name)])
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(content);

        let response = self.send(request, &url)?;
        let asset: ApiAsset = decode(response, &url)?;
        Ok(asset.into())
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let mut request = request
            .header(ACCEPT, ACCEPT_JSON)
            .header(API_VERSION_HEADER, API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| RemoteError::Request {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().unwrap_or_default();
        Err(RemoteError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message: error_message(&text),
        })
    }
}

fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    response.json().map_err(|source| RemoteError::Decode {
        url: url.to_string(),
        source,
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map_or_else(|_| body.trim().to_string(), |e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base() -> anyhow::Result<()> {
        let client = GitHubClient::new("https://github.example.com/api/v3/", None)?;

        assert_eq!(client.api_base(), "https://github.example.com/api/v3");
        assert!(!client.is_authenticated());
        Ok(())
    }

    #[test]
    fn empty_token_is_anonymous() -> anyhow::Result<()> {
        let client = GitHubClient::new(DEFAULT_API_URL, Some(String::new()))?;
        assert!(!client.is_authenticated());

        let client = GitHubClient::new(DEFAULT_API_URL, Some("ghp_token".to_string()))?;
        assert!(client.is_authenticated());
        Ok(())
    }

    #[test]
    fn error_message_prefers_api_message() {
        assert_eq!(
            error_message(r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#),
            "Not Found"
        );
        assert_eq!(error_message("  Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn status_error_display() {
        let err = RemoteError::Status {
            url: "https://api.github.com/repos/o/r/releases".to_string(),
            status: 422,
            message: "Validation Failed".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "GitHub returned 422 for 'https://api.github.com/repos/o/r/releases': Validation Failed"
        );
    }

    #[test]
    fn asset_without_file_name_is_rejected() -> anyhow::Result<()> {
        let client = GitHubClient::new(DEFAULT_API_URL, None)?;
        let release = ReleaseHandle {
            id: 1,
            html_url: String::new(),
            upload_url: "http://127.0.0.1:9/assets".to_string(),
            tag: "v1.0.0".to_string(),
        };

        let result = client.upload_release_asset(&release, Path::new("/"));

        assert!(matches!(result, Err(RemoteError::AssetName { .. })));
        Ok(())
    }

    #[test]
    fn missing_asset_file_is_rejected_before_upload() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let client = GitHubClient::new(DEFAULT_API_URL, None)?;
        let release = ReleaseHandle {
            id: 1,
            html_url: String::new(),
            upload_url: "http://127.0.0.1:9/assets".to_string(),
            tag: "v1.0.0".to_string(),
        };

        let result = client.upload_release_asset(&release, &dir.path().join("missing.vsix"));

        assert!(matches!(result, Err(RemoteError::AssetRead { .. })));
        Ok(())
    }
}
