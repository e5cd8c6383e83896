//! Turns a merged pull request into a single changelog bullet.
//!
//! The lookup tables live here as constants so the formatting rules can be
//! exercised without pull request fixtures.

use std::sync::LazyLock;

use regex::Regex;
use release_core::PullRequestRecord;

/// Label to emoji, applied in the order labels appear on the pull request.
pub const LABEL_EMOJI: &[(&str, &str)] = &[
    ("Issue-Enhancement", "✨"),
    ("Issue-Bug", "🐛"),
    ("Issue-Performance", "⚡️"),
    ("Area-Build & Release", "👷"),
    ("Area-Code Formatting", "💎"),
    ("Area-Configuration", "🔧"),
    ("Area-Debugging", "🔍"),
    ("Area-Documentation", "📖"),
    ("Area-Engine", "🚂"),
    ("Area-Folding", "📚"),
    ("Area-Pester", "🐢"),
    ("Area-Script Analysis", "🕵️"),
    ("Area-Snippets", "✂️"),
    ("Area-Startup", "🛫"),
    ("Area-Symbols & References", "🔗"),
    ("Area-Tasks", "✅"),
    ("Area-Test", "🚨"),
    ("Area-Threading", "⏱️"),
    ("Area-UI", "📺"),
    ("Area-Workspaces", "📁"),
];

/// Used when a pull request carries no label with an emoji.
pub const DEFAULT_EMOJI: &str = "#️⃣ 🙏";

/// Maintainers whose pull requests are not thanked.
pub const EXCLUDED_AUTHORS: &[&str] = &[
    "andschwa",
    "daxian-dbw",
    "JustinGrote",
    "PaulHigin",
    "SeeminglyScience",
    "SydneyhSmith",
    "TylerLeonhardt",
];

pub const CLOSE_KEYWORDS: &[&str] = &[
    "close", "closes", "closed", "fix", "fixes", "fixed", "resolve", "resolves", "resolved",
];

pub const BOT_SUFFIX: &str = "[bot]";

static CLOSING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = CLOSE_KEYWORDS.join("|");
    Regex::new(&format!(
        r"(?i)\b(?:{keywords})\b:?\s+(?:(?:(?P<repo>[\w./-]+)\s*)?#|(?P<url>https?://[^\s#]+?/(?:issues|pull)/))(?P<number>\d+)"
    ))
    .expect("closing keyword pattern is valid")
});

/// The repository a pull request belongs to and every repository its body
/// may refer to.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    pub repository: &'a str,
    pub known_repositories: &'a [&'a str],
}

/// Produces `- <emoji> [<repo> #<n>](<url>) - <title>. (Thanks @<login>!)`.
///
/// Tokens are joined by exactly one space and absent ones leave no gap.
#[must_use]
pub fn classify(pr: &PullRequestRecord, ctx: ClassifyContext<'_>) -> String {
    let emoji = emoji_for_labels(&pr.labels);
    let reference = linked_reference(pr, ctx);
    let title = pr.title.split_whitespace().collect::<Vec<_>>().join(" ");
    let link = format!("[{reference}]({})", pr.html_url);
    let sentence = format!("{title}.");
    let thanks = thanks_for(&pr.author);

    ["-", emoji.as_str(), link.as_str(), "-", sentence.as_str()]
        .into_iter()
        .chain(thanks.as_deref())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn emoji_for_labels<S: AsRef<str>>(labels: &[S]) -> String {
    let emoji: String = labels
        .iter()
        .filter_map(|label| {
            LABEL_EMOJI
                .iter()
                .find(|(name, _)| *name == label.as_ref())
                .map(|(_, emoji)| *emoji)
        })
        .collect();

    if emoji.is_empty() {
        DEFAULT_EMOJI.to_string()
    } else {
        emoji
    }
}

/// `<repo> #<number>` for the issue the body closes, or for the pull request
/// itself when the body closes nothing.
#[must_use]
pub fn linked_reference(pr: &PullRequestRecord, ctx: ClassifyContext<'_>) -> String {
    let Some(captures) = CLOSING_PATTERN.captures(&pr.body) else {
        return format!("{} #{}", ctx.repository, pr.number);
    };

    let repository = captures
        .name("repo")
        .or_else(|| captures.name("url"))
        .and_then(|m| resolve_repository(m.as_str(), ctx.known_repositories))
        .unwrap_or(ctx.repository);

    format!("{repository} #{}", &captures["number"])
}

/// Finds the first known repository whose name occurs in `text`, ignoring
/// case.
///
/// This is a substring heuristic: if one repository name is contained in
/// another, or in unrelated text before the `#`, the earlier entry in
/// `known` wins.
#[must_use]
pub fn resolve_repository<'a>(text: &str, known: &[&'a str]) -> Option<&'a str> {
    let haystack = text.to_lowercase();
    known
        .iter()
        .find(|name| haystack.contains(&name.to_lowercase()))
        .copied()
}

#[must_use]
pub fn is_bot(login: &str) -> bool {
    login.ends_with(BOT_SUFFIX)
}

#[must_use]
pub fn thanks_for(login: &str) -> Option<String> {
    let excluded = EXCLUDED_AUTHORS
        .iter()
        .any(|maintainer| maintainer.eq_ignore_ascii_case(login));

    if login.is_empty() || excluded || is_bot(login) {
        None
    } else {
        Some(format!("(Thanks @{login}!)"))
    }
}
