use release_core::SemanticVersion;

use crate::Result;
use crate::error::ChangelogError;
use crate::section::{SECTION_MARKER, first_section};

/// Parses `## <tag_prefix><version>` into a version.
///
/// # Errors
///
/// Returns `ChangelogError::InvalidVersionHeader` if the line is not a section
/// header carrying the tag prefix, or if the remainder is not a valid version.
pub fn parse_version_header(header: &str, tag_prefix: &str) -> Result<SemanticVersion> {
    let invalid = |source| ChangelogError::InvalidVersionHeader {
        header: header.to_string(),
        tag_prefix: tag_prefix.to_string(),
        source,
    };

    let text = header
        .trim_end()
        .strip_prefix(SECTION_MARKER)
        .and_then(|rest| rest.strip_prefix(tag_prefix))
        .ok_or_else(|| invalid(None))?;

    SemanticVersion::parse(text).map_err(|e| invalid(Some(e)))
}

/// Version named by the most recent section of a changelog.
///
/// # Errors
///
/// Returns `ChangelogError::MissingVersionHeader` if the document has no
/// section, or `ChangelogError::InvalidVersionHeader` if its header does not
/// parse.
pub fn top_version<S: AsRef<str>>(lines: &[S], tag_prefix: &str) -> Result<SemanticVersion> {
    let header = first_section(lines)
        .first()
        .ok_or(ChangelogError::MissingVersionHeader)?;

    parse_version_header(header.as_ref(), tag_prefix)
}
