//! Chapter heading recognition.
//!
//! A line is tested against six heading grammars in a fixed priority
//! order; the first match wins. The ordering is a policy decision the
//! rest of the pipeline depends on, not an accident:
//!
//! 1. 第X章 (Chinese convention, mixed Chinese/Arabic numerals)
//! 2. Chapter N (Arabic, case-insensitive)
//! 3. Chapter IV (Roman, case-insensitive)
//! 4. "3. title" / "3- title" (numbered-list style)
//! 5. a line that is only digits
//! 6. "十二、title" (Chinese-numbered-list style)
//!
//! Grammar 5 is maximally permissive and will claim any digits-only
//! line, stray page numbers included. That recall/precision trade-off
//! is deliberate and preserved; downstream chapter numbering depends on
//! this exact precedence.

mod numeral;
mod patterns;

pub use numeral::parse_chapter_number;

use regex_lite::Regex;

/// A recognized chapter heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Logical chapter number, always >= 1.
    pub number: u32,
    /// Heading text, never empty; falls back to 第N章.
    pub title: String,
}

/// Classify one line. Returns `None` for anything that is not a
/// chapter heading; an empty (after trimming) line never is.
///
/// # Examples
///
/// ```
/// use zhanghui::chapter::classify;
///
/// let heading = classify("第十章 风起").unwrap();
/// assert_eq!(heading.number, 10);
/// assert_eq!(heading.title, "风起");
///
/// assert!(classify("正文内容").is_none());
/// ```
pub fn classify(line: &str) -> Option<Heading> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let grammars: [&Regex; 6] = [
        &*patterns::ZHANG,
        &*patterns::CHAPTER_ARABIC,
        &*patterns::CHAPTER_ROMAN,
        &*patterns::NUMBERED,
        &*patterns::BARE_NUMBER,
        &*patterns::CHINESE_LIST,
    ];

    for grammar in grammars {
        let Some(caps) = grammar.captures(trimmed) else {
            continue;
        };
        let number = parse_chapter_number(&caps[1]);
        let rest = caps.get(2).map_or("", |m| m.as_str().trim());
        let title = if rest.is_empty() {
            format!("第{number}章")
        } else {
            rest.to_string()
        };
        return Some(Heading { number, title });
    }
    None
}
