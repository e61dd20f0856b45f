//! Parses the raw text of a stored entry file into a structured [`Entry`].

use crate::dates::EntryDate;
use crate::entry::Entry;

/// List views cut the displayed body to this many characters.
pub const SUMMARY_LIMIT: usize = 100;

/// Converts a stored file's raw text into an [`Entry`].
///
/// The first line (trimmed) is the title; the remaining lines, each trimmed,
/// rejoined with `\n`, are the content. The date comes from the caller, i.e.
/// from the file name, never from the text itself. A file with zero lines
/// yields an empty title and empty content rather than an error.
///
/// With `truncate`, content longer than [`SUMMARY_LIMIT`] characters is cut
/// and `...` appended.
pub fn parse_entry_text(raw: &str, date: EntryDate, truncate: bool) -> Entry {
    let mut lines = raw.lines().map(str::trim);
    let title = lines.next().unwrap_or_default().to_string();
    let mut content = lines.collect::<Vec<_>>().join("\n");

    if truncate {
        content = truncate_chars(&content, SUMMARY_LIMIT);
    }

    Entry {
        date,
        title,
        content,
    }
}

/// Cuts `text` to at most `limit` characters, appending `...` when it was cut.
///
/// Counts Unicode scalar values, not bytes, so multibyte text is never split
/// mid-character.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let cut: String = text.chars().take(limit).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> EntryDate {
        EntryDate::parse("20240115").unwrap()
    }

    #[test]
    fn splits_title_and_content() {
        let entry = parse_entry_text("A title\nFirst line.\nSecond line.", date(), false);
        assert_eq!(entry.title, "A title");
        assert_eq!(entry.content, "First line.\nSecond line.");
        assert_eq!(entry.date, date());
    }

    #[test]
    fn trims_every_line() {
        let entry = parse_entry_text("  A title \n  body line  \n\tindented\t", date(), false);
        assert_eq!(entry.title, "A title");
        assert_eq!(entry.content, "body line\nindented");
    }

    #[test]
    fn zero_lines_yield_empty_entry() {
        let entry = parse_entry_text("", date(), false);
        assert_eq!(entry.title, "");
        assert_eq!(entry.content, "");
    }

    #[test]
    fn title_only_file_has_empty_content() {
        let entry = parse_entry_text("Just a title\n", date(), true);
        assert_eq!(entry.title, "Just a title");
        assert_eq!(entry.content, "");
    }

    #[test]
    fn truncates_long_content_to_exactly_103_chars() {
        let raw = format!("Title\n{}", "x".repeat(150));
        let entry = parse_entry_text(&raw, date(), true);
        assert_eq!(entry.content.chars().count(), SUMMARY_LIMIT + 3);
        assert!(entry.content.ends_with("..."));
    }

    #[test]
    fn content_at_limit_is_untouched() {
        let raw = format!("Title\n{}", "x".repeat(SUMMARY_LIMIT));
        let entry = parse_entry_text(&raw, date(), true);
        assert_eq!(entry.content.chars().count(), SUMMARY_LIMIT);
        assert!(!entry.content.ends_with("..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let raw = format!("Title\n{}", "あ".repeat(120));
        let entry = parse_entry_text(&raw, date(), true);
        assert_eq!(entry.content.chars().count(), SUMMARY_LIMIT + 3);
        assert!(entry.content.starts_with('あ'));
    }

    #[test]
    fn no_truncation_without_flag() {
        let raw = format!("Title\n{}", "x".repeat(150));
        let entry = parse_entry_text(&raw, date(), false);
        assert_eq!(entry.content.chars().count(), 150);
    }
}
