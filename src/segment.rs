//! Universal-newline segmentation of decoded text.
//!
//! Splits on `\r\n`, `\n`, or a bare `\r`, treating each as a single
//! boundary. Consecutive separators are not merged, so blank lines come
//! through as empty segments, and a trailing terminator yields a final
//! empty segment (the assembler's blank-line policy absorbs it).

use memchr::memchr2;

/// Segment `text` into physical lines. The iterator is lazy and
/// borrows from `text`; call again to restart from the top.
pub fn segment(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

/// Iterator over the lines of a decoded document.
///
/// # Examples
///
/// ```
/// use zhanghui::segment;
///
/// let lines: Vec<_> = segment("a\r\nb\rc\n\nd").collect();
/// assert_eq!(lines, ["a", "b", "c", "", "d"]);
/// ```
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match memchr2(b'\r', b'\n', rest.as_bytes()) {
            Some(i) => {
                let line = &rest[..i];
                // \r\n is one boundary, not two.
                let width = if rest.as_bytes()[i] == b'\r' && rest.as_bytes().get(i + 1) == Some(&b'\n')
                {
                    2
                } else {
                    1
                };
                self.rest = Some(&rest[i + width..]);
                Some(line)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl std::iter::FusedIterator for Lines<'_> {}
