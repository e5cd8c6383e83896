use std::path::PathBuf;

use release_operations::Workspace;
use release_operations::operations::NewDraftReleaseOperation;
use release_operations::providers::{FileSystemChangelogStore, GitHubRemote};

use crate::error::Result;

pub(crate) fn run(workspace: &Workspace, repository: &str, assets: &[PathBuf]) -> Result<()> {
    let operation =
        NewDraftReleaseOperation::new(FileSystemChangelogStore::new(), GitHubRemote::from_env()?);
    let output = operation.execute(workspace, repository, assets)?;

    for asset in &output.assets {
        eprintln!("Uploaded {}", asset.name);
    }
    println!("{}", output.release.html_url);
    Ok(())
}
