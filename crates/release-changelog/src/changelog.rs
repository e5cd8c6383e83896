use std::path::Path;

use chrono::NaiveDate;
use release_core::SemanticVersion;

use crate::error::ChangelogError;
use crate::format::{format_date_subheader, format_version_header};
use crate::section::first_section;
use crate::version::top_version;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Number of leading lines (title and spacer) that stay above every section.
const PREAMBLE_LINES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    lines: Vec<String>,
}

impl Changelog {
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
        Self {
            lines: content.lines().map(ToString::to_string).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChangelogError> {
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn first_section(&self) -> &[String] {
        first_section(&self.lines)
    }

    /// # Errors
    ///
    /// Returns an error if the first section header is missing or malformed.
    pub fn current_version(&self, tag_prefix: &str) -> Result<SemanticVersion, ChangelogError> {
        top_version(&self.lines, tag_prefix)
    }

    /// Inserts a new top section below the preamble.
    ///
    /// Layout: preamble, `## <version>`, date subheader, blank, body, blank,
    /// then the previous content untouched.
    pub fn prepend_section(&mut self, version: &str, date: NaiveDate, body: &[String]) {
        let split = PREAMBLE_LINES.min(self.lines.len());
        let rest = self.lines.split_off(split);

        self.lines.reserve(body.len() + rest.len() + 4);
        self.lines.push(format_version_header(version));
        self.lines.push(format_date_subheader(date));
        self.lines.push(String::new());
        self.lines.extend(body.iter().cloned());
        self.lines.push(String::new());
        self.lines.extend(rest);
    }

    #[must_use]
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Write` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        std::fs::write(path, self.content()).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
