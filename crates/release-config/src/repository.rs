use std::path::{Path, PathBuf};

use release_core::{RepositoryRole, SemanticVersion};
use release_manifest::FieldPattern;

use crate::value::ValueSource;

const GITHUB_URL: &str = "https://github.com";

/// One metadata field kept in step with the repository version.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    file: PathBuf,
    pattern: FieldPattern,
    value: ValueSource,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(file: PathBuf, pattern: FieldPattern, value: ValueSource) -> Self {
        Self {
            file,
            pattern,
            value,
        }
    }

    /// Path relative to the repository root.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn pattern(&self) -> &FieldPattern {
        &self.pattern
    }

    #[must_use]
    pub fn value(&self) -> ValueSource {
        self.value
    }

    #[must_use]
    pub fn produce(&self, version: &SemanticVersion) -> String {
        self.value.produce(version)
    }
}

#[derive(Debug, Clone)]
pub struct RepositoryDescriptor {
    name: String,
    owner: String,
    role: RepositoryRole,
    changelog: PathBuf,
    tag_prefix: String,
    fields: Vec<FieldDescriptor>,
}

impl RepositoryDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, owner: impl Into<String>, role: RepositoryRole) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            role,
            changelog: PathBuf::from(crate::file::DEFAULT_CHANGELOG),
            tag_prefix: crate::file::DEFAULT_TAG_PREFIX.to_string(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_changelog(mut self, changelog: impl Into<PathBuf>) -> Self {
        self.changelog = changelog.into();
        self
    }

    #[must_use]
    pub fn with_tag_prefix(mut self, tag_prefix: impl Into<String>) -> Self {
        self.tag_prefix = tag_prefix.into();
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn role(&self) -> RepositoryRole {
        self.role
    }

    #[must_use]
    pub fn is_aggregator(&self) -> bool {
        self.role == RepositoryRole::Aggregator
    }

    /// Changelog path relative to the repository root.
    #[must_use]
    pub fn changelog(&self) -> &Path {
        &self.changelog
    }

    #[must_use]
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub fn html_url(&self) -> String {
        format!("{GITHUB_URL}/{}/{}", self.owner, self.name)
    }

    /// `<prefix><version>`, as used for tags and release titles.
    #[must_use]
    pub fn tag(&self, version: &SemanticVersion) -> String {
        format!("{}{version}", self.tag_prefix)
    }

    #[must_use]
    pub fn release_branch(&self, version: &SemanticVersion) -> String {
        format!("release/{}", self.tag(version))
    }

    /// Parses a version given with this repository's tag prefix, e.g. `v1.2.4`.
    ///
    /// Returns `None` when the prefix is missing or the remainder is not a
    /// supported version.
    #[must_use]
    pub fn parse_tagged_version(&self, text: &str) -> Option<SemanticVersion> {
        text.strip_prefix(self.tag_prefix.as_str())
            .and_then(|rest| SemanticVersion::parse(rest).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(text: &str) -> SemanticVersion {
        SemanticVersion::parse(text).expect("valid version")
    }

    #[test]
    fn tag_and_branch_carry_prefix() {
        let repo = RepositoryDescriptor::new("vscode-powershell", "PowerShell", RepositoryRole::Aggregator);
        let v = version("2023.2.0-preview.1");

        assert_eq!(repo.tag(&v), "v2023.2.0-preview.1");
        assert_eq!(repo.release_branch(&v), "release/v2023.2.0-preview.1");
        assert_eq!(repo.html_url(), "https://github.com/PowerShell/vscode-powershell");
    }

    #[test]
    fn defaults_changelog_and_prefix() {
        let repo = RepositoryDescriptor::new("PowerShellEditorServices", "PowerShell", RepositoryRole::Component);

        assert_eq!(repo.changelog(), Path::new("CHANGELOG.md"));
        assert_eq!(repo.tag_prefix(), "v");
        assert!(!repo.is_aggregator());
    }

    #[test]
    fn parses_tagged_version() {
        let repo = RepositoryDescriptor::new("PowerShellEditorServices", "PowerShell", RepositoryRole::Component);

        assert_eq!(repo.parse_tagged_version("v1.2.4"), Some(version("1.2.4")));
        assert_eq!(
            repo.parse_tagged_version("v1.2.4-preview.1"),
            Some(version("1.2.4-preview.1"))
        );
        assert_eq!(repo.parse_tagged_version("1.2.4"), None);
        assert_eq!(repo.parse_tagged_version("v1.2"), None);
        assert_eq!(repo.parse_tagged_version("v1.2.4-beta"), None);
    }

    #[test]
    fn custom_prefix() {
        let repo = RepositoryDescriptor::new("tools", "PowerShell", RepositoryRole::Component)
            .with_tag_prefix("release-")
            .with_changelog("docs/CHANGELOG.md");

        assert_eq!(repo.tag(&version("0.1.0")), "release-0.1.0");
        assert_eq!(repo.parse_tagged_version("release-0.1.0"), Some(version("0.1.0")));
        assert_eq!(repo.changelog(), Path::new("docs/CHANGELOG.md"));
    }
}
