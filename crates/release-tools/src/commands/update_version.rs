use release_operations::Workspace;
use release_operations::operations::{UpdateVersionOperation, UpdateVersionOutput};
use release_operations::providers::{
    FileSystemChangelogStore, FileSystemMetadataWriter, Git2Provider,
};

use super::print_commit;
use crate::error::Result;
use crate::interaction::TerminalInteractionProvider;

pub(crate) fn run(
    workspace: &Workspace,
    repository: &str,
    interaction: TerminalInteractionProvider,
) -> Result<()> {
    let operation = UpdateVersionOperation::new(
        FileSystemChangelogStore::new(),
        Git2Provider::new(),
        FileSystemMetadataWriter::new(),
        interaction,
    );
    let output = operation.execute(workspace, repository)?;

    print_summary(workspace, &output);
    Ok(())
}

fn print_summary(workspace: &Workspace, output: &UpdateVersionOutput) {
    if !output.changed() {
        println!("Metadata already at {}.", output.tag);
        return;
    }

    println!("Updated metadata to {}:", output.tag);
    for field in output.fields.iter().filter(|f| f.changed) {
        let file = field
            .file
            .strip_prefix(workspace.root())
            .unwrap_or(&field.file);
        println!("  {} {} = {}", file.display(), field.source, field.value);
    }
    for field in output.fields.iter().filter(|f| f.matched == 0) {
        println!("  {} has no {} field", field.file.display(), field.source);
    }

    print_commit(output.commit.as_ref());
}
