use chrono::NaiveDate;

#[must_use]
pub fn format_version_header(version: &str) -> String {
    format!("## {version}")
}

/// `### Monday, October 19, 2026`
#[must_use]
pub fn format_date_subheader(date: NaiveDate) -> String {
    format!("### {}", date.format("%A, %B %-d, %Y"))
}

/// A linked repository heading followed by its bullets, as embedded in the
/// aggregator's release notes.
#[must_use]
pub fn format_repository_subsection(name: &str, url: &str, bullets: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(bullets.len() + 2);
    lines.push(format!("#### [{name}]({url})"));
    lines.push(String::new());
    lines.extend(bullets.iter().cloned());
    lines
}

/// Bullet lines of a section, skipping its header, date and sub-headings.
#[must_use]
pub fn section_bullets<S: AsRef<str>>(section: &[S]) -> Vec<String> {
    section
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| line.starts_with("- "))
        .map(ToString::to_string)
        .collect()
}
