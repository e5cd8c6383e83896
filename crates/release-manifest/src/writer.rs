use std::fs;
use std::path::Path;

use crate::error::ManifestError;
use crate::pattern::FieldPattern;

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Number of lines that matched the pattern.
    pub matched: usize,
    /// Whether the file content differs from what was read.
    pub changed: bool,
}

/// Replaces the value on every line matching `pattern`.
///
/// Line terminators, including `\r\n`, are preserved as they were.
#[must_use]
pub fn substitute(content: &str, pattern: &FieldPattern, value: &str) -> (String, usize) {
    let mut output = String::with_capacity(content.len());
    let mut matched = 0;

    for raw in content.split_inclusive('\n') {
        let (line, terminator) = split_terminator(raw);
        match pattern.replace_line(line, value) {
            Some(replaced) => {
                matched += 1;
                output.push_str(&replaced);
            }
            None => output.push_str(line),
        }
        output.push_str(terminator);
    }

    (output, matched)
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Rewrites one field of the metadata file at `path` in place.
///
/// The file is only written when its content changes. A leading byte order
/// mark is dropped, so every rewritten file is saved as UTF-8 without one.
///
/// # Errors
///
/// Returns `ManifestError::Read` or `ManifestError::Write` on I/O failure.
pub fn rewrite_field(
    path: &Path,
    pattern: &FieldPattern,
    value: &str,
) -> Result<FieldUpdate, ManifestError> {
    let original = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let had_bom = original.starts_with(BOM);
    let content = original.strip_prefix(BOM).unwrap_or(&original);
    let (updated, matched) = substitute(content, pattern, value);

    let changed = had_bom || updated != content;
    if changed {
        fs::write(path, updated).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(FieldUpdate { matched, changed })
}
