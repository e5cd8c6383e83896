use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::defaults::{CONFIG_FILE_NAME, DEFAULT_REGISTRY};
use crate::error::ConfigError;
use crate::file::{RegistryFile, RepositoryEntry};
use crate::repository::{FieldDescriptor, RepositoryDescriptor};
use crate::Result;

/// The closed set of repositories the tools know about, in declaration order.
#[derive(Debug, Clone)]
pub struct Registry {
    repositories: IndexMap<String, RepositoryDescriptor>,
}

impl Registry {
    /// The built-in registry describing the PowerShell extension and its
    /// language server.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded defaults are malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_REGISTRY, "built-in defaults")
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or a parse or
    /// validation error for its content.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, &format!("'{}'", path.display()))
    }

    /// Resolves the registry for a workspace: an explicit file wins, then
    /// `release-tools.toml` in the workspace directory, then the built-in
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or is invalid.
    pub fn discover(workspace: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = workspace.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Self::builtin()
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, or a validation error
    /// for duplicate names, more than one aggregator, or bad field patterns.
    pub fn from_toml(content: &str, origin: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let descriptors = file
            .repositories
            .into_iter()
            .map(build_descriptor)
            .collect::<Result<Vec<_>>>()?;

        Self::from_descriptors(descriptors)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`], [`ConfigError::DuplicateRepository`] or
    /// [`ConfigError::MultipleAggregators`].
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = RepositoryDescriptor>,
    ) -> Result<Self> {
        let mut repositories = IndexMap::new();
        let mut aggregator: Option<String> = None;

        for descriptor in descriptors {
            if descriptor.is_aggregator() {
                if let Some(first) = &aggregator {
                    return Err(ConfigError::MultipleAggregators {
                        first: first.clone(),
                        second: descriptor.name().to_string(),
                    });
                }
                aggregator = Some(descriptor.name().to_string());
            }

            let name = descriptor.name().to_string();
            if repositories.insert(name.clone(), descriptor).is_some() {
                return Err(ConfigError::DuplicateRepository { name });
            }
        }

        if repositories.is_empty() {
            return Err(ConfigError::Empty);
        }

        Ok(Self { repositories })
    }

    /// Looks a repository up by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRepository`] listing the known names.
    pub fn get(&self, name: &str) -> Result<&RepositoryDescriptor> {
        self.repositories
            .get(name)
            .ok_or_else(|| ConfigError::UnknownRepository {
                name: name.to_string(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.repositories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepositoryDescriptor> {
        self.repositories.values()
    }

    #[must_use]
    pub fn aggregator(&self) -> Option<&RepositoryDescriptor> {
        self.iter().find(|r| r.is_aggregator())
    }

    /// Repositories whose notes the aggregator embeds, in declaration order.
    pub fn components(&self) -> impl Iterator<Item = &RepositoryDescriptor> {
        self.iter().filter(|r| !r.is_aggregator())
    }
}

fn build_descriptor(entry: RepositoryEntry) -> Result<RepositoryDescriptor> {
    let RepositoryEntry {
        name,
        owner,
        role,
        changelog,
        tag_prefix,
        fields,
    } = entry;

    let mut descriptor = RepositoryDescriptor::new(name.clone(), owner, role)
        .with_changelog(changelog)
        .with_tag_prefix(tag_prefix);

    for field in fields {
        let pattern = release_manifest::FieldPattern::new(&field.pattern).map_err(|source| {
            ConfigError::FieldPattern {
                repository: name.clone(),
                file: field.file.clone(),
                source,
            }
        })?;
        descriptor = descriptor.with_field(FieldDescriptor::new(field.file, pattern, field.value));
    }

    Ok(descriptor)
}
