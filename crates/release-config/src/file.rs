use std::path::PathBuf;

use release_core::RepositoryRole;
use serde::Deserialize;

use crate::value::ValueSource;

pub(crate) const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";
pub(crate) const DEFAULT_TAG_PREFIX: &str = "v";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RegistryFile {
    #[serde(default, rename = "repository")]
    pub repositories: Vec<RepositoryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RepositoryEntry {
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub role: RepositoryRole,
    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FieldEntry {
    pub file: PathBuf,
    pub pattern: String,
    pub value: ValueSource,
}

fn default_changelog() -> PathBuf {
    PathBuf::from(DEFAULT_CHANGELOG)
}

fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}
