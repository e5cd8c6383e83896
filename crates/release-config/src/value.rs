use std::fmt;

use release_core::SemanticVersion;
use serde::{Deserialize, Serialize};

const PACKAGE_NAME: &str = "powershell";
const DISPLAY_NAME: &str = "PowerShell";
const DESCRIPTION: &str = "Develop PowerShell modules, commands and scripts in Visual Studio Code!";

/// Derives the text written into a metadata field from the target version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueSource {
    /// Canonical form, `x.y.z[-preview[.n]]`.
    Version,
    /// `x.y.z` without any pre-release label.
    VersionCore,
    /// Same as [`ValueSource::VersionCore`]; named after MSBuild's `VersionPrefix`.
    VersionPrefix,
    /// The pre-release label, or empty for stable versions.
    VersionSuffix,
    PackageName,
    DisplayName,
    Description,
    PreviewFlag,
}

impl ValueSource {
    #[must_use]
    pub fn produce(self, version: &SemanticVersion) -> String {
        let preview = version.is_prerelease();
        match self {
            Self::Version => version.to_string(),
            Self::VersionCore | Self::VersionPrefix => version.core(),
            Self::VersionSuffix => version.pre_release().unwrap_or_default().to_string(),
            Self::PackageName if preview => format!("{PACKAGE_NAME}-preview"),
            Self::PackageName => PACKAGE_NAME.to_string(),
            Self::DisplayName if preview => format!("{DISPLAY_NAME} Preview"),
            Self::DisplayName => DISPLAY_NAME.to_string(),
            Self::Description if preview => format!("(Preview) {DESCRIPTION}"),
            Self::Description => DESCRIPTION.to_string(),
            Self::PreviewFlag => preview.to_string(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::VersionCore => "version-core",
            Self::VersionPrefix => "version-prefix",
            Self::VersionSuffix => "version-suffix",
            Self::PackageName => "package-name",
            Self::DisplayName => "display-name",
            Self::Description => "description",
            Self::PreviewFlag => "preview-flag",
        }
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
