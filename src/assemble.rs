//! Walks classified lines and assembles the final parse result.

use crate::chapter;
use crate::content::{ChapterInfo, ContentLine, ParsedContent};

/// Assemble raw lines into chapters and globally numbered content.
///
/// Heading lines open a new chapter and are themselves emitted as
/// content at the chapter's first coordinate. Blank lines before any
/// content are dropped; blank lines inside started content are kept as
/// paragraph separators. Never fails: a document with no recognizable
/// headings becomes a single chapter 1, and empty input produces zero
/// chapters and zero lines.
pub fn assemble<'a, I>(raw_lines: I) -> ParsedContent
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chapters: Vec<ChapterInfo> = Vec::new();
    let mut lines: Vec<ContentLine> = Vec::new();
    let mut current_chapter: u32 = 1;
    let mut line_number: u32 = 1;

    for raw in raw_lines {
        if let Some(heading) = chapter::classify(raw) {
            current_chapter = heading.number;
            chapters.push(ChapterInfo {
                chapter: current_chapter,
                title: heading.title,
                start_line: line_number,
                end_line: line_number, // backfilled below
            });
            lines.push(ContentLine {
                chapter: current_chapter,
                line: line_number,
                content: raw.trim().to_string(),
            });
            line_number += 1;
        } else {
            let trimmed = raw.trim();
            // Leading blanks are dropped entirely; interior blanks
            // survive as paragraph separators.
            if !trimmed.is_empty() || !lines.is_empty() {
                lines.push(ContentLine {
                    chapter: current_chapter,
                    line: line_number,
                    content: trimmed.to_string(),
                });
                line_number += 1;
            }
        }
    }

    // Each chapter runs up to the line before the next heading; the
    // last one runs to the end of the document.
    let count = chapters.len();
    for i in 0..count {
        chapters[i].end_line = if i + 1 < count {
            chapters[i + 1].start_line - 1
        } else {
            line_number - 1
        };
    }

    // No heading anywhere: the whole document is chapter 1. Empty
    // input stays empty.
    if chapters.is_empty() && !lines.is_empty() {
        chapters.push(ChapterInfo {
            chapter: 1,
            title: "第1章".to_string(),
            start_line: 1,
            end_line: lines.len() as u32,
        });
    }

    let total_lines = lines.len();
    let total_chapters = chapters.len();
    ParsedContent {
        chapters,
        lines,
        total_lines,
        total_chapters,
    }
}
