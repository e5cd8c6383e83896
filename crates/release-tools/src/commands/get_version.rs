use release_operations::Workspace;
use release_operations::operations::GetVersionOperation;
use release_operations::providers::FileSystemChangelogStore;

use crate::error::Result;

pub(crate) fn run(workspace: &Workspace, repository: &str) -> Result<()> {
    let repo = workspace.resolve(repository)?;
    let version = GetVersionOperation::new(FileSystemChangelogStore::new()).execute(&repo)?;

    println!("{version}");
    Ok(())
}
