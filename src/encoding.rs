//! Character encoding detection and decoding.
//!
//! Uploaded novel files arrive as raw bytes with no reliable encoding
//! metadata. Detection is heuristic and layered:
//!
//! 1. A UTF-8 byte-order mark pins UTF-8 outright.
//! 2. Bytes that validate strictly as UTF-8 (including pure ASCII) are
//!    UTF-8.
//! 3. The legacy candidates (GBK, GB18030, Big5) are decoded strictly
//!    and scored by how much of the non-ASCII output lands in plausible
//!    CJK ranges; the best clean decode wins, earlier candidates
//!    breaking ties. GB2312 is reported instead of GBK when every
//!    multi-byte pair stays inside the EUC-CN range.
//! 4. Failing all of that, a fixed trial list (UTF-8, GBK, GB2312,
//!    GB18030, Big5) is walked and the first strict nonzero decode
//!    wins, then UTF-8 with lossy replacement as the last resort.
//!
//! Resolution is a pure function of the input bytes: the same buffer
//! always yields the same label, and a wrong-but-consistent guess is
//! preferred over an error.

use encoding_rs::Encoding as RsEncoding;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// The canonical encodings a novel upload may be decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Gbk,
    Gb2312,
    Gb18030,
    Big5,
}

impl TextEncoding {
    /// Priority order for the last-resort trial decode.
    pub const TRIAL_ORDER: [TextEncoding; 5] = [
        TextEncoding::Utf8,
        TextEncoding::Gbk,
        TextEncoding::Gb2312,
        TextEncoding::Gb18030,
        TextEncoding::Big5,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Gbk => "GBK",
            TextEncoding::Gb2312 => "GB2312",
            TextEncoding::Gb18030 => "GB18030",
            TextEncoding::Big5 => "Big5",
        }
    }

    /// Normalize a detector- or user-supplied label to a canonical
    /// encoding. Matching is case-insensitive and collapses common
    /// aliases (`utf8`, `cp936`, ...).
    pub fn for_label(label: &str) -> Option<TextEncoding> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(TextEncoding::Utf8),
            "gbk" | "cp936" | "windows-936" => Some(TextEncoding::Gbk),
            "gb2312" | "euc-cn" => Some(TextEncoding::Gb2312),
            "gb18030" => Some(TextEncoding::Gb18030),
            "big5" | "big5-hkscs" | "cp950" => Some(TextEncoding::Big5),
            _ => None,
        }
    }

    /// Decode `bytes` with this encoding, replacing invalid sequences
    /// with U+FFFD. A leading BOM is honored and stripped.
    pub fn decode(self, bytes: &[u8]) -> String {
        let (text, _, _) = self.codec().decode(bytes);
        text.into_owned()
    }

    fn codec(self) -> &'static RsEncoding {
        match self {
            TextEncoding::Utf8 => encoding_rs::UTF_8,
            // GB2312 is a strict subset of GBK; encoding_rs exposes the
            // superset table, which decodes GB2312 text identically.
            TextEncoding::Gbk | TextEncoding::Gb2312 => encoding_rs::GBK,
            TextEncoding::Gb18030 => encoding_rs::GB18030,
            TextEncoding::Big5 => encoding_rs::BIG5,
        }
    }

    /// Strict decode: `None` if any byte sequence is invalid.
    fn decode_strict<'a>(self, bytes: &'a [u8]) -> Option<std::borrow::Cow<'a, str>> {
        self.codec()
            .decode_without_bom_handling_and_without_replacement(bytes)
    }
}

/// Pick the encoding to decode `bytes` with. Never fails; see the
/// module docs for the heuristic.
pub fn resolve_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.is_empty() || bytes.starts_with(UTF8_BOM) {
        return TextEncoding::Utf8;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return TextEncoding::Utf8;
    }
    if let Some(encoding) = detect_legacy(bytes) {
        return encoding;
    }
    for encoding in TextEncoding::TRIAL_ORDER {
        if let Some(text) = encoding.decode_strict(bytes) {
            if !text.is_empty() {
                return encoding;
            }
        }
    }
    TextEncoding::Utf8
}

/// Resolve the encoding of `bytes` and decode them with it.
pub fn decode(bytes: &[u8]) -> (TextEncoding, String) {
    let encoding = resolve_encoding(bytes);
    (encoding, encoding.decode(bytes))
}

/// Score the legacy candidates against each other.
///
/// Each candidate that decodes without error gets a plausibility score;
/// the strictly best score wins and ties keep the earlier candidate, so
/// the result is deterministic.
fn detect_legacy(bytes: &[u8]) -> Option<TextEncoding> {
    let candidates = [TextEncoding::Gbk, TextEncoding::Gb18030, TextEncoding::Big5];

    let mut best: Option<(f64, TextEncoding)> = None;
    for candidate in candidates {
        let Some(text) = candidate.decode_strict(bytes) else {
            continue;
        };
        let score = cjk_score(&text);
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, candidate));
        }
    }

    let (score, encoding) = best?;
    // Below this the "clean" decode is mostly garbage; let the trial
    // list make the call instead.
    if score < 0.5 {
        return None;
    }
    if encoding == TextEncoding::Gbk && is_gb2312(bytes) {
        return Some(TextEncoding::Gb2312);
    }
    Some(encoding)
}

/// Fraction of non-ASCII output that falls in ranges a Chinese novel
/// plausibly uses. An all-ASCII decode scores 1.0.
fn cjk_score(text: &str) -> f64 {
    let mut non_ascii = 0u32;
    let mut plausible = 0u32;
    for c in text.chars() {
        if c.is_ascii() {
            continue;
        }
        non_ascii += 1;
        let u = c as u32;
        let ok = matches!(u,
            0x4E00..=0x9FFF        // CJK unified ideographs
            | 0x3400..=0x4DBF      // CJK extension A
            | 0x3000..=0x303F      // CJK punctuation
            | 0xFF00..=0xFFEF      // fullwidth forms
            | 0x2014 | 0x2018..=0x201D | 0x2026 // dashes, quotes, ellipsis
        );
        if ok {
            plausible += 1;
        }
    }
    if non_ascii == 0 {
        1.0
    } else {
        f64::from(plausible) / f64::from(non_ascii)
    }
}

/// True when every multi-byte pair sits in the EUC-CN (GB2312) range.
fn is_gb2312(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x80 {
            i += 1;
            continue;
        }
        if !(0xA1..=0xF7).contains(&b) {
            return false;
        }
        match bytes.get(i + 1) {
            Some(&t) if (0xA1..=0xFE).contains(&t) => i += 2,
            _ => return false,
        }
    }
    true
}
