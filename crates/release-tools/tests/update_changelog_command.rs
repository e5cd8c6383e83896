use std::fs;

use predicates::str::contains;
use tempfile::TempDir;

macro_rules! release_tools {
    () => {
        assert_cmd::cargo::cargo_bin_cmd!("release-tools")
    };
}

const CHANGELOG: &str = "# PowerShell Editor Services Release History\n\n## v3.5.3\n### Monday, January 23, 2023\n\n- Fixed a thing.\n";

fn create_workspace() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let repo = dir.path().join("PowerShellEditorServices");
    fs::create_dir_all(&repo).expect("create repository dir");
    fs::write(repo.join("CHANGELOG.md"), CHANGELOG).expect("write CHANGELOG.md");
    dir
}

#[test]
fn version_without_tag_prefix_is_rejected() {
    let workspace = create_workspace();

    release_tools!()
        .args(["update-changelog", "PowerShellEditorServices", "3.5.4", "--no-commit"])
        .arg("--workspace")
        .arg(workspace.path())
        .assert()
        .failure()
        .stderr(contains("error: invalid version '3.5.4'"));

    let content = fs::read_to_string(workspace.path().join("PowerShellEditorServices/CHANGELOG.md"))
        .expect("read CHANGELOG.md");
    assert_eq!(content, CHANGELOG);
}

#[test]
fn unsupported_prerelease_label_is_rejected() {
    let workspace = create_workspace();

    release_tools!()
        .args(["update-changelog", "PowerShellEditorServices", "v3.5.4-rc.1"])
        .arg("--workspace")
        .arg(workspace.path())
        .assert()
        .failure()
        .stderr(contains("invalid version 'v3.5.4-rc.1'"));
}

#[test]
fn unknown_repository_is_rejected_before_work() {
    let workspace = create_workspace();

    release_tools!()
        .args(["update-changelog", "PowerShellEditor", "v3.5.4"])
        .arg("--workspace")
        .arg(workspace.path())
        .assert()
        .failure()
        .stderr(contains("unknown repository 'PowerShellEditor'"));
}
