/// Prefix of a line that opens a changelog section.
pub const SECTION_MARKER: &str = "## ";

/// `## v1.0.0` opens a section; `# Title`, `##v1.0.0` and `### Monday` do not.
#[must_use]
pub fn is_section_header(line: &str) -> bool {
    line.starts_with(SECTION_MARKER)
}

/// Returns the most recent section: the first header line and everything up
/// to, but not including, the next header.
///
/// An empty slice means the document has no sections yet.
#[must_use]
pub fn first_section<S: AsRef<str>>(lines: &[S]) -> &[S] {
    let Some(start) = lines.iter().position(|l| is_section_header(l.as_ref())) else {
        return &[];
    };

    let end = lines[start + 1..]
        .iter()
        .position(|l| is_section_header(l.as_ref()))
        .map_or(lines.len(), |offset| start + 1 + offset);

    &lines[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &[&str] = &[
        "# PowerShell Extension Release History",
        "",
        "## v2023.1.0",
        "### Wednesday, January 18, 2023",
        "",
        "- ✨ [vscode-powershell #1](https://example.invalid/1) - One.",
        "",
        "## v2022.12.1",
        "### Monday, December 19, 2022",
        "",
        "- 🐛 [vscode-powershell #2](https://example.invalid/2) - Two.",
    ];

    #[test]
    fn header_requires_space_after_marker() {
        assert!(is_section_header("## v1.0.0"));
        assert!(!is_section_header("##v1.0.0"));
        assert!(!is_section_header("# Title"));
        assert!(!is_section_header("### Monday"));
        assert!(!is_section_header(" ## indented"));
    }

    #[test]
    fn returns_first_section_only() {
        let section = first_section(DOCUMENT);

        assert_eq!(section.len(), 5);
        assert_eq!(section[0], "## v2023.1.0");
        assert_eq!(section[4], DOCUMENT[6]);
    }

    #[test]
    fn never_includes_second_header() {
        let section = first_section(DOCUMENT);

        let headers = section.iter().filter(|l| is_section_header(l)).count();
        assert_eq!(headers, 1);
    }

    #[test]
    fn runs_to_end_of_document_without_next_header() {
        let section = first_section(&DOCUMENT[7..]);

        assert_eq!(section, &DOCUMENT[7..]);
    }

    #[test]
    fn empty_when_no_header() {
        let lines = ["# Title", "", "### Not a section"];

        assert!(first_section(&lines).is_empty());
        assert!(first_section::<&str>(&[]).is_empty());
    }

    #[test]
    fn repeated_calls_return_same_slice() {
        let owned: Vec<String> = DOCUMENT.iter().map(ToString::to_string).collect();

        let first = first_section(&owned).to_vec();
        let second = first_section(&owned).to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn deeper_headers_stay_inside_section() {
        let lines = ["## v1.0.0", "#### [repo](https://example.invalid)", "- item"];

        assert_eq!(first_section(&lines).len(), 3);
    }
}
