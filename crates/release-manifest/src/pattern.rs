use regex::Regex;

use crate::error::ManifestError;

pub const PREFIX_GROUP: &str = "prefix";
pub const SUFFIX_GROUP: &str = "suffix";

/// A whole-line pattern locating one field value.
///
/// The text before the value is captured as `prefix` and the text after it as
/// `suffix`; whatever lies between them is the value that gets replaced. The
/// pattern must be anchored at both ends so that a same-named field at a
/// different indentation, or inside a nested object, never matches.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    regex: Regex,
}

impl FieldPattern {
    /// # Errors
    ///
    /// Returns `ManifestError::UnanchoredPattern` if the pattern does not start
    /// with `^` and end with `$`, `ManifestError::InvalidPattern` if it does not
    /// compile, or `ManifestError::MissingCaptureGroup` if either the `prefix`
    /// or the `suffix` group is absent.
    pub fn new(pattern: &str) -> Result<Self, ManifestError> {
        if !pattern.starts_with('^') || !pattern.ends_with('$') {
            return Err(ManifestError::UnanchoredPattern {
                pattern: pattern.to_string(),
            });
        }

        let regex = Regex::new(pattern).map_err(|source| ManifestError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        for group in [PREFIX_GROUP, SUFFIX_GROUP] {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(ManifestError::MissingCaptureGroup {
                    pattern: pattern.to_string(),
                    group,
                });
            }
        }

        Ok(Self { regex })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Rewrites a single line (without its terminator), or returns `None` when
    /// the line is not this field.
    #[must_use]
    pub fn replace_line(&self, line: &str, value: &str) -> Option<String> {
        let captures = self.regex.captures(line)?;
        let prefix = captures.name(PREFIX_GROUP).map_or("", |m| m.as_str());
        let suffix = captures.name(SUFFIX_GROUP).map_or("", |m| m.as_str());
        Some(format!("{prefix}{value}{suffix}"))
    }
}
