use std::path::{Path, PathBuf};
use std::sync::Mutex;

use release_core::{PullRequestRecord, PullRequestState};
use release_git::CommitInfo;
use release_github::{
    DraftReleaseParams, ReleaseHandle, RemoteError, RepositoryInfo, UploadedAsset,
};

use crate::Result;
use crate::traits::{GitProvider, InteractionProvider, RemoteRepository};

pub struct MockGitProvider {
    branch: String,
    commits_since: Vec<String>,
    requested_tags: Mutex<Vec<String>>,
    branches: Mutex<Vec<String>>,
    staged_files: Mutex<Vec<PathBuf>>,
    commits: Mutex<Vec<String>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            branch: "main".to_string(),
            commits_since: Vec::new(),
            requested_tags: Mutex::new(Vec::new()),
            branches: Mutex::new(Vec::new()),
            staged_files: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_commits_since(mut self, shas: &[&str]) -> Self {
        self.commits_since = shas.iter().map(ToString::to_string).collect();
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requested_tags(&self) -> Vec<String> {
        self.requested_tags.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn branches(&self) -> Vec<String> {
        self.branches.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn staged_files(&self) -> Vec<PathBuf> {
        self.staged_files.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn commits(&self) -> Vec<String> {
        self.commits.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn current_branch(&self, _repo_root: &Path) -> Result<String> {
        Ok(self
            .branches
            .lock()
            .expect("lock poisoned")
            .last()
            .cloned()
            .unwrap_or_else(|| self.branch.clone()))
    }

    fn create_and_switch_branch(&self, _repo_root: &Path, name: &str) -> Result<()> {
        self.branches
            .lock()
            .expect("lock poisoned")
            .push(name.to_string());
        Ok(())
    }

    fn commits_since(&self, _repo_root: &Path, tag: &str) -> Result<Vec<String>> {
        self.requested_tags
            .lock()
            .expect("lock poisoned")
            .push(tag.to_string());
        Ok(self.commits_since.clone())
    }

    fn stage_files(&self, _repo_root: &Path, paths: &[&Path]) -> Result<()> {
        self.staged_files
            .lock()
            .expect("lock poisoned")
            .extend(paths.iter().map(|p| p.to_path_buf()));
        Ok(())
    }

    fn commit(&self, _repo_root: &Path, message: &str) -> Result<CommitInfo> {
        let mut commits = self.commits.lock().expect("lock poisoned");
        commits.push(message.to_string());
        Ok(CommitInfo {
            sha: format!("{:040x}", commits.len()),
            message: message.to_string(),
        })
    }
}

pub struct MockRemoteRepository {
    pull_requests: Vec<PullRequestRecord>,
    fail_listing: bool,
    listed: Mutex<Vec<(String, String, PullRequestState)>>,
    releases: Mutex<Vec<DraftReleaseParams>>,
    uploads: Mutex<Vec<PathBuf>>,
}

impl MockRemoteRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pull_requests: Vec::new(),
            fail_listing: false,
            listed: Mutex::new(Vec::new()),
            releases: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_pull_requests(mut self, pull_requests: Vec<PullRequestRecord>) -> Self {
        self.pull_requests = pull_requests;
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn listed(&self) -> Vec<(String, String, PullRequestState)> {
        self.listed.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn releases(&self) -> Vec<DraftReleaseParams> {
        self.releases.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn uploads(&self) -> Vec<PathBuf> {
        self.uploads.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockRemoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteRepository for MockRemoteRepository {
    fn get_repository(&self, owner: &str, name: &str) -> Result<RepositoryInfo> {
        Ok(RepositoryInfo {
            owner: owner.to_string(),
            name: name.to_string(),
            html_url: format!("https://github.com/{owner}/{name}"),
            default_branch: "main".to_string(),
        })
    }

    fn list_pull_requests(
        &self,
        owner: &str,
        name: &str,
        state: PullRequestState,
    ) -> Result<Vec<PullRequestRecord>> {
        self.listed.lock().expect("lock poisoned").push((
            owner.to_string(),
            name.to_string(),
            state,
        ));

        if self.fail_listing {
            return Err(RemoteError::Status {
                url: format!("https://api.github.com/repos/{owner}/{name}/pulls"),
                status: 502,
                message: "Bad Gateway".to_string(),
            }
            .into());
        }

        Ok(self.pull_requests.clone())
    }

    fn create_draft_release(&self, params: &DraftReleaseParams) -> Result<ReleaseHandle> {
        let mut releases = self.releases.lock().expect("lock poisoned");
        releases.push(params.clone());
        let id = releases.len() as u64;

        Ok(ReleaseHandle {
            id,
            html_url: format!(
                "https://github.com/{}/{}/releases/tag/{}",
                params.owner, params.repository, params.tag
            ),
            upload_url: format!(
                "https://uploads.github.com/repos/{}/{}/releases/{id}/assets",
                params.owner, params.repository
            ),
            tag: params.tag.clone(),
        })
    }

    fn upload_release_asset(&self, release: &ReleaseHandle, path: &Path) -> Result<UploadedAsset> {
        let mut uploads = self.uploads.lock().expect("lock poisoned");
        uploads.push(path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(UploadedAsset {
            id: uploads.len() as u64,
            browser_download_url: format!("{}/{name}", release.html_url),
            name,
        })
    }
}

pub struct MockInteractionProvider {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockInteractionProvider {
    #[must_use]
    pub fn confirming() -> Self {
        Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn declining() -> Self {
        Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("lock poisoned").clone()
    }
}

impl InteractionProvider for MockInteractionProvider {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts
            .lock()
            .expect("lock poisoned")
            .push(prompt.to_string());
        Ok(self.answer)
    }
}

#[must_use]
pub fn make_pull_request(number: u64, title: &str, author: &str, labels: &[&str]) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: title.to_string(),
        body: String::new(),
        author: author.to_string(),
        labels: labels.iter().map(ToString::to_string).collect(),
        repository: "PowerShellEditorServices".to_string(),
        merge_commit_sha: Some(format!("{number:040x}")),
        html_url: format!("https://github.com/PowerShell/PowerShellEditorServices/pull/{number}"),
        merged: true,
    }
}
