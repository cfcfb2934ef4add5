//! Line Classification
//!
//! Decides the type of a single right-trimmed line. Classification follows this order
//! (important for correctness):
//! 1. Table row candidates (pipe-delimited, at least two non-empty cells)
//! 2. Blank lines
//! 3. Markdown headings (`##` to `####` followed by whitespace)
//! 4. Callout headings (upper-case first letter, ending with a colon)
//! 5. Bullets (`-` or `*` followed by whitespace)
//! 6. Default to paragraph
//!
//! Markdown headings are checked before callouts, so `## Summary:` is a heading. The
//! callout rule is a heuristic and also fires on ordinary prose that happens to end with a
//! colon, such as `Sales rose as follows:`; nothing here tries to tell those apart.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{2,4})\s+").expect("heading pattern is valid"));

/// Capitalised line ending in an ASCII or full-width colon
static CALLOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z].+[:：]$").expect("callout pattern is valid"));

static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*]\s+").expect("bullet pattern is valid"));

/// The type of one line, borrowing the content that follows any marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType<'a> {
    /// Candidate row for the table buffer
    TableRow,
    /// Empty after right-trimming
    Blank,
    /// Markdown heading; `content` is trimmed and still carries inline markers
    Heading { level: u8, content: &'a str },
    /// Heuristic heading; the whole line is kept
    Callout,
    /// List item; `content` has the marker and following whitespace removed
    Bullet { content: &'a str },
    Paragraph,
}

/// Determine the type of a line
pub fn classify_line(line: &str) -> LineType<'_> {
    if is_table_row_candidate(line) {
        return LineType::TableRow;
    }
    classify_content_line(line)
}

/// Determine the type of a line that is not going into the table buffer
///
/// This is the classification used for lines demoted from a failed table.
pub fn classify_content_line(line: &str) -> LineType<'_> {
    if line.trim().is_empty() {
        return LineType::Blank;
    }

    if let Some(captures) = MARKDOWN_HEADING.captures(line) {
        let hashes = &captures[1];
        return LineType::Heading {
            level: hashes.len() as u8,
            content: line[hashes.len()..].trim(),
        };
    }

    if CALLOUT.is_match(line) {
        return LineType::Callout;
    }

    if BULLET.is_match(line) {
        // The marker is a single ASCII byte.
        return LineType::Bullet {
            content: line[1..].trim_start(),
        };
    }

    LineType::Paragraph
}

/// Check if a line belongs in the table buffer
///
/// A candidate contains a pipe, splits into at least two non-empty trimmed cells, and is not
/// made only of pipes and whitespace (a separator artifact, not data).
pub fn is_table_row_candidate(line: &str) -> bool {
    line.contains('|') && !is_only_pipes(line) && split_cells(line).len() >= 2
}

/// Split a row on pipes, trimming cells and dropping empty ones
///
/// Leading and trailing pipes produce empty cells, which must not become columns.
pub fn split_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn is_only_pipes(line: &str) -> bool {
    line.chars().all(|c| c == '|' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_heading_levels() {
        assert_eq!(
            classify_line("## Summary"),
            LineType::Heading {
                level: 2,
                content: "Summary"
            }
        );
        assert_eq!(
            classify_line("####   Deep **dive**"),
            LineType::Heading {
                level: 4,
                content: "Deep **dive**"
            }
        );
    }

    #[test]
    fn test_heading_needs_space_and_level_range() {
        assert_eq!(classify_line("##Summary"), LineType::Paragraph);
        assert_eq!(classify_line("# Title"), LineType::Paragraph);
        assert_eq!(classify_line("##### Too deep"), LineType::Paragraph);
    }

    #[test]
    fn test_heading_beats_callout() {
        assert_eq!(
            classify_line("## Summary:"),
            LineType::Heading {
                level: 2,
                content: "Summary:"
            }
        );
    }

    #[test]
    fn test_callout() {
        assert_eq!(classify_line("Key Observations:"), LineType::Callout);
        assert_eq!(classify_line("Résumé："), LineType::Callout);
        assert_eq!(classify_line("Sales rose as follows:"), LineType::Callout);
        assert_eq!(classify_line("Rate: 3:1"), LineType::Paragraph);
        assert_eq!(classify_line("lowercase start:"), LineType::Paragraph);
    }

    #[test]
    fn test_callout_needs_text_before_colon() {
        assert_eq!(classify_line("A:"), LineType::Paragraph);
        assert_eq!(classify_line("Ab:"), LineType::Callout);
        assert_eq!(classify_content_line(":"), LineType::Paragraph);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(
            classify_line("- first"),
            LineType::Bullet { content: "first" }
        );
        assert_eq!(
            classify_line("*   **bold** item"),
            LineType::Bullet {
                content: "**bold** item"
            }
        );
        assert_eq!(classify_line("-no space"), LineType::Paragraph);
        assert_eq!(classify_line("**Bold** lead"), LineType::Paragraph);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(classify_line(""), LineType::Blank);
    }

    #[test]
    fn test_table_row_candidates() {
        assert!(is_table_row_candidate("A | B"));
        assert!(is_table_row_candidate("| Month | Units |"));
        assert!(!is_table_row_candidate("| only |"));
        assert!(!is_table_row_candidate("|||"));
        assert!(!is_table_row_candidate("| | |"));
        assert!(!is_table_row_candidate("no pipes here"));
    }

    #[test]
    fn test_split_cells_drops_outer_pipes() {
        assert_eq!(split_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_cells("a||b"), vec!["a", "b"]);
    }
}
