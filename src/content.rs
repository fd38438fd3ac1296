//! Parsed novel content: chapters, numbered lines, aggregate counts.
//!
//! [`ParsedContent`] is the value returned by one parse call. It is
//! constructed once, never mutated afterward, and carries no reference
//! back into the input buffer. Serialization (behind the `serde`
//! feature) uses camelCase field names, matching the JSON shape the
//! surrounding upload pipeline stores and ships.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One recognized chapter and its span in output line numbers.
///
/// `chapter` is the logical number parsed from the heading, which may
/// repeat or skip if the source headings are malformed. Chapters appear
/// in the order their headings occur in the text, not sorted by number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChapterInfo {
    pub chapter: u32,
    pub title: String,
    /// First output line of the chapter (inclusive, 1-based).
    pub start_line: u32,
    /// Last output line of the chapter (inclusive).
    pub end_line: u32,
}

/// A single emitted line with its `(chapter, line)` coordinate.
///
/// Line numbers form one global 1-based sequence across the whole
/// document; they are not reset per chapter. `content` is trimmed and
/// may be empty for a paragraph-separating blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentLine {
    pub chapter: u32,
    pub line: u32,
    pub content: String,
}

/// The aggregate result of parsing one uploaded novel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParsedContent {
    pub chapters: Vec<ChapterInfo>,
    pub lines: Vec<ContentLine>,
    pub total_lines: usize,
    pub total_chapters: usize,
}

impl ParsedContent {
    /// True when the parse produced no lines at all (empty input).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First chapter carrying the given logical number.
    pub fn chapter(&self, number: u32) -> Option<&ChapterInfo> {
        self.chapters.iter().find(|c| c.chapter == number)
    }

    /// All lines attributed to the given chapter number, in order.
    pub fn chapter_lines(&self, number: u32) -> impl Iterator<Item = &ContentLine> + '_ {
        self.lines.iter().filter(move |l| l.chapter == number)
    }

    /// Look up a line by its output line number.
    pub fn line(&self, number: u32) -> Option<&ContentLine> {
        // Output line numbers are dense and 1-based, so index directly.
        number.checked_sub(1).and_then(|i| self.lines.get(i as usize))
    }
}
