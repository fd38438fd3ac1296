//! Cached regex patterns for heading recognition.
//!
//! Compiled once on first use via `LazyLock`. The order these are tried
//! in is part of the classifier contract; see [`super::classify`].

use regex_lite::Regex;
use std::sync::LazyLock;

/// 第X章 — the Chinese chapter convention. The numeral may mix Chinese
/// digits and Arabic digits.
pub static ZHANG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^第([一二三四五六七八九十百千万0-9]+)章[：:\s]*(.*)$").unwrap()
});

/// Chapter N (case-insensitive).
pub static CHAPTER_ARABIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^chapter\s+([0-9]+)[：:\s]*(.*)$").unwrap());

/// Chapter IV — Roman numerals (case-insensitive).
pub static CHAPTER_ROMAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^chapter\s+([ivx]+)[：:\s]*(.*)$").unwrap());

/// Numbered-list style: "3. title" or "12- title".
pub static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[.\-]\s*(.*)$").unwrap());

/// A line that is nothing but digits.
pub static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)$").unwrap());

/// Chinese-numbered-list style: "十二、title".
pub static CHINESE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([一二三四五六七八九十百千万]+)[、．.]\s*(.*)$").unwrap());
