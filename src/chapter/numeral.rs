//! Chapter numeral parsing.
//!
//! Handles pure Arabic digit strings, Chinese numerals, and the messy
//! mixed cases real novel files contain. Parsing never fails: anything
//! unintelligible degrades to chapter 1, and a computed 0 is coerced to
//! 1 because chapter numbers are never 0.

/// Parse a chapter numeral captured from a heading.
///
/// Chinese numerals accumulate positionally: 一–九 add their value,
/// 十/百/千/万 multiply the accumulator (an empty accumulator counts as
/// 1, so 十 alone is 10). An Arabic digit embedded in an otherwise
/// Chinese string short-circuits the whole parse to "strip everything
/// but digits".
///
/// # Examples
///
/// ```
/// use zhanghui::chapter::parse_chapter_number;
///
/// assert_eq!(parse_chapter_number("42"), 42);
/// assert_eq!(parse_chapter_number("十"), 10);
/// assert_eq!(parse_chapter_number("二十一"), 21);
/// assert_eq!(parse_chapter_number("三百"), 300);
/// ```
pub fn parse_chapter_number(numeral: &str) -> u32 {
    if !numeral.is_empty() && numeral.bytes().all(|b| b.is_ascii_digit()) {
        return numeral.parse().map_or(1, |n: u32| n.max(1));
    }

    let mut acc: u32 = 0;
    for c in numeral.chars() {
        match digit_value(c) {
            Some(v) if v >= 10 => {
                if acc == 0 {
                    acc = 1;
                }
                acc = acc.saturating_mul(v);
            }
            Some(v) => acc = acc.saturating_add(v),
            None if c.is_ascii_digit() => {
                // Mixed Chinese/Arabic: fall back to the digits alone.
                let digits: String = numeral.chars().filter(char::is_ascii_digit).collect();
                return digits.parse().map_or(1, |n: u32| n.max(1));
            }
            None => {}
        }
    }
    acc.max(1)
}

fn digit_value(c: char) -> Option<u32> {
    match c {
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        '万' => Some(10000),
        _ => None,
    }
}
