mod changelog;
mod classify;
mod error;
mod format;
mod section;
mod version;

pub use changelog::Changelog;
pub use classify::{
    BOT_SUFFIX, CLOSE_KEYWORDS, ClassifyContext, DEFAULT_EMOJI, EXCLUDED_AUTHORS, LABEL_EMOJI,
    classify, emoji_for_labels, is_bot, linked_reference, resolve_repository, thanks_for,
};
pub use error::ChangelogError;
pub use format::{
    format_date_subheader, format_repository_subsection, format_version_header, section_bullets,
};
pub use section::{SECTION_MARKER, first_section, is_section_header};
pub use version::{parse_version_header, top_version};

pub type Result<T> = std::result::Result<T, ChangelogError>;
