#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub owner: String,
    pub name: String,
    pub html_url: String,
    pub default_branch: String,
}

/// Everything needed to open a draft release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftReleaseParams {
    pub owner: String,
    pub repository: String,
    pub tag: String,
    /// Branch or commit the tag will be created from when the release is published.
    pub target: String,
    pub title: String,
    pub body: String,
    pub prerelease: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHandle {
    pub id: u64,
    pub html_url: String,
    /// Upload endpoint with the URI template suffix already removed.
    pub upload_url: String,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub id: u64,
    pub name: String,
    pub browser_download_url: String,
}
