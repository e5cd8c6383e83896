use std::fmt;

use serde::{Deserialize, Serialize};

/// How a repository's changelog relates to the others in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryRole {
    /// Release notes embed the component's latest section.
    Aggregator,
    #[default]
    Component,
}

impl fmt::Display for RepositoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Aggregator => "aggregator",
            Self::Component => "component",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestState {
    Open,
    Closed,
    #[default]
    All,
}

impl PullRequestState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PullRequestRecord {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub labels: Vec<String>,
    /// Name of the repository the pull request was merged into.
    pub repository: String,
    pub merge_commit_sha: Option<String>,
    pub html_url: String,
    pub merged: bool,
}

impl PullRequestRecord {
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_deserializes_lowercase() {
        let role: RepositoryRole =
            serde_json::from_str("\"aggregator\"").expect("valid role");
        assert_eq!(role, RepositoryRole::Aggregator);
    }

    #[test]
    fn role_display_matches_serialized_form() {
        assert_eq!(RepositoryRole::Component.to_string(), "component");
        assert_eq!(RepositoryRole::Aggregator.to_string(), "aggregator");
    }

    #[test]
    fn state_query_values() {
        assert_eq!(PullRequestState::All.as_str(), "all");
        assert_eq!(PullRequestState::Open.as_str(), "open");
        assert_eq!(PullRequestState::Closed.as_str(), "closed");
    }

    #[test]
    fn has_label_is_exact() {
        let record = PullRequestRecord {
            labels: vec!["Issue-Bug".to_string()],
            ..PullRequestRecord::default()
        };

        assert!(record.has_label("Issue-Bug"));
        assert!(!record.has_label("Issue"));
    }
}
