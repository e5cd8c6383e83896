use release_operations::Workspace;
use release_operations::operations::{UpdateChangelogOperation, UpdateChangelogOutput};
use release_operations::providers::{FileSystemChangelogStore, Git2Provider, GitHubRemote};

use super::print_commit;
use crate::error::Result;
use crate::interaction::TerminalInteractionProvider;

pub(crate) fn run(
    workspace: &Workspace,
    repository: &str,
    version: &str,
    interaction: TerminalInteractionProvider,
) -> Result<()> {
    let operation = UpdateChangelogOperation::new(
        FileSystemChangelogStore::new(),
        Git2Provider::new(),
        GitHubRemote::from_env()?,
        interaction,
    );
    let output = operation.execute(workspace, repository, version)?;

    print_summary(&output);
    Ok(())
}

fn print_summary(output: &UpdateChangelogOutput) {
    println!(
        "Added {} to {} ({} -> {}).",
        output.tag,
        output.changelog_path.display(),
        output.previous_version,
        output.version
    );

    if output.bullets.is_empty() {
        println!("No merged pull requests since the last release.");
    } else {
        for bullet in &output.bullets {
            println!("  {bullet}");
        }
    }

    print_commit(output.commit.as_ref());
}
