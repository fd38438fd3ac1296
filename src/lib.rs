//! # zhanghui
//!
//! A fast, lightweight library for ingesting plain-text novels of
//! unknown character encoding and splitting them into chapters.
//!
//! ## Features
//!
//! - Heuristic encoding detection over UTF-8, GBK, GB2312, GB18030,
//!   and Big5 — never fails, always decodes to *something* deterministic
//! - Universal newline handling (`\r\n`, `\n`, bare `\r`)
//! - Chapter heading recognition across mixed conventions: 第X章,
//!   "Chapter N", numbered-list headings, bare numeral lines, and
//!   Chinese-numbered lists
//! - Stable `(chapter, line)` coordinates for every emitted line, with
//!   per-chapter start/end boundaries and aggregate totals
//!
//! ## Quick Start
//!
//! ```
//! use zhanghui::parse_bytes;
//!
//! let parsed = parse_bytes("第一章 开端\n\n正文第一行".as_bytes());
//! assert_eq!(parsed.total_chapters, 1);
//! assert_eq!(parsed.total_lines, 3);
//! assert_eq!(parsed.chapters[0].title, "开端");
//! assert_eq!(parsed.lines[2].content, "正文第一行");
//! ```
//!
//! ## Pipeline
//!
//! The stages compose but are each usable on their own:
//! [`resolve_encoding`] picks an encoding for a byte buffer,
//! [`segment`] splits decoded text into lines, [`chapter::classify`]
//! decides whether one line is a heading, and [`assemble`] walks the
//! lines into a [`ParsedContent`]. Everything is pure and reentrant;
//! concurrent parses share no state.

pub mod chapter;
pub mod content;
pub mod encoding;
pub mod segment;

mod assemble;
mod error;

pub use assemble::assemble;
pub use content::{ChapterInfo, ContentLine, ParsedContent};
pub use encoding::{TextEncoding, decode, resolve_encoding};
pub use error::{Error, Result};
pub use segment::segment;

use std::path::Path;

/// Parse a raw byte buffer into chapters and numbered lines.
///
/// The encoding is detected, the bytes decoded (lossily if need be),
/// and the text segmented and assembled. Infallible: worst case is a
/// single degenerate chapter, or an empty result for empty input.
pub fn parse_bytes(bytes: &[u8]) -> ParsedContent {
    let (_, text) = encoding::decode(bytes);
    assemble(segment::segment(&text))
}

/// Read a file and parse it with [`parse_bytes`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedContent> {
    let bytes = std::fs::read(path)?;
    Ok(parse_bytes(&bytes))
}
