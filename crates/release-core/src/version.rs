use std::fmt;
use std::str::FromStr;
use semver::{Prerelease, Version};

use crate::error::{CoreError, Result};

pub const PREVIEW_LABEL: &str = "preview";

fn is_preview_label(pre: &str) -> bool {
    match pre.strip_prefix(PREVIEW_LABEL) {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('.')
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit())),
        None => pre.is_empty(),
    }
}

/// A release version as written in changelog headers: `x.y.z`, `x.y.z-preview`
/// or `x.y.z-preview.N`.
///
/// Values only come out of [`SemanticVersion::parse`], so every instance has
/// exactly one textual form and `to_string` reproduces the parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemanticVersion(Version);

impl SemanticVersion {
    /// # Errors
    ///
    /// Returns `CoreError::Semver` if the text is not a semantic version at
    /// all (including non-canonical numbers such as `01`), or
    /// `CoreError::InvalidVersion` if it carries build metadata or a
    /// pre-release label other than `preview[.n]`.
    pub fn parse(text: &str) -> Result<Self> {
        let version = Version::parse(text).map_err(|source| CoreError::Semver {
            version: text.to_string(),
            source,
        })?;

        if !version.build.is_empty() || !is_preview_label(version.pre.as_str()) {
            return Err(CoreError::InvalidVersion {
                version: text.to_string(),
            });
        }

        Ok(Self(version))
    }

    #[must_use]
    pub fn major(&self) -> u64 {
        self.0.major
    }

    #[must_use]
    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    #[must_use]
    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// The pre-release label without the leading dash, e.g. `preview.3`.
    #[must_use]
    pub fn pre_release(&self) -> Option<&str> {
        if self.0.pre == Prerelease::EMPTY {
            None
        } else {
            Some(self.0.pre.as_str())
        }
    }

    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        self.pre_release().is_some()
    }

    /// `major.minor.patch` with any pre-release label dropped.
    #[must_use]
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.0.major, self.0.minor, self.0.patch)
    }

    #[must_use]
    pub fn as_semver(&self) -> &Version {
        &self.0
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SemanticVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
