//! End-to-end pipeline tests: raw bytes in, chapters and numbered
//! lines out, across the supported encodings.

use std::io::Write;

use zhanghui::{TextEncoding, parse_bytes, parse_file, resolve_encoding};

const NOVEL: &str = "\
第一章 风起\n\
青萍之末，风乍起。\n\
\n\
他沿着河岸走了很久。\n\
第二章 夜行\n\
城门在身后关闭。\n";

#[test]
fn utf8_novel_parses_into_chapters() {
    let parsed = parse_bytes(NOVEL.as_bytes());

    assert_eq!(parsed.total_chapters, 2);
    assert_eq!(parsed.chapters[0].title, "风起");
    assert_eq!(parsed.chapters[0].start_line, 1);
    assert_eq!(parsed.chapters[0].end_line, 4);
    assert_eq!(parsed.chapters[1].title, "夜行");
    assert_eq!(parsed.chapters[1].start_line, 5);

    // Heading lines count as content; the interior blank survives.
    assert_eq!(parsed.lines[0].content, "第一章 风起");
    assert_eq!(parsed.lines[2].content, "");
    assert_eq!(parsed.lines[2].chapter, 1);
}

#[test]
fn gbk_novel_decodes_and_parses_identically() {
    let (gbk_bytes, _, had_errors) = encoding_rs::GBK.encode(NOVEL);
    assert!(!had_errors);
    // Sanity: the buffer really is invalid UTF-8.
    assert!(std::str::from_utf8(&gbk_bytes).is_err());

    let from_gbk = parse_bytes(&gbk_bytes);
    let from_utf8 = parse_bytes(NOVEL.as_bytes());
    assert_eq!(from_gbk, from_utf8);
}

#[test]
fn gbk_buffer_resolves_to_gb_family_not_lossy_utf8() {
    let (gbk_bytes, _, _) = encoding_rs::GBK.encode("你好，世界。风起于青萍之末。");
    let encoding = resolve_encoding(&gbk_bytes);
    assert!(matches!(
        encoding,
        TextEncoding::Gbk | TextEncoding::Gb2312
    ));
    assert!(!encoding.decode(&gbk_bytes).contains('\u{FFFD}'));
}

#[test]
fn ascii_decodes_identically_under_every_candidate() {
    let ascii = b"Chapter 1\nThe rain had stopped.\n";
    for encoding in TextEncoding::TRIAL_ORDER {
        assert_eq!(encoding.decode(ascii), "Chapter 1\nThe rain had stopped.\n");
    }
    assert_eq!(resolve_encoding(ascii), TextEncoding::Utf8);
}

#[test]
fn parse_is_idempotent() {
    let (gbk_bytes, _, _) = encoding_rs::GBK.encode(NOVEL);
    assert_eq!(parse_bytes(&gbk_bytes), parse_bytes(&gbk_bytes));
    assert_eq!(parse_bytes(NOVEL.as_bytes()), parse_bytes(NOVEL.as_bytes()));
}

#[test]
fn empty_buffer_yields_empty_result() {
    let parsed = parse_bytes(b"");
    assert!(parsed.is_empty());
    assert_eq!(parsed.total_chapters, 0);
    assert_eq!(parsed.total_lines, 0);
}

#[test]
fn undecodable_garbage_still_parses() {
    let parsed = parse_bytes(&[0xFF, 0xFF, 0x0A, 0xFF]);
    // Lossy replacement characters are real content lines.
    assert_eq!(parsed.total_chapters, 1);
    assert_eq!(parsed.total_lines, 2);
}

#[test]
fn mixed_heading_conventions_in_one_document() {
    let text = "\
第一章 开端\n\
内容一\n\
Chapter 2: Crossing\n\
content two\n\
3. 终章\n\
内容三\n";
    let parsed = parse_bytes(text.as_bytes());

    let numbers: Vec<_> = parsed.chapters.iter().map(|c| c.chapter).collect();
    assert_eq!(numbers, [1, 2, 3]);
    let titles: Vec<_> = parsed.chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["开端", "Crossing", "终章"]);

    // Boundaries tile the document without gaps.
    for pair in parsed.chapters.windows(2) {
        assert_eq!(pair[0].end_line + 1, pair[1].start_line);
    }
}

#[test]
fn chapter_accessors_match_line_attribution() {
    let parsed = parse_bytes(NOVEL.as_bytes());

    let ch2: Vec<_> = parsed
        .chapter_lines(2)
        .map(|l| l.content.as_str())
        .collect();
    // The trailing newline leaves a final blank line in chapter 2.
    assert_eq!(ch2, ["第二章 夜行", "城门在身后关闭。", ""]);

    let line = parsed.line(5).expect("line 5 exists");
    assert_eq!(line.chapter, 2);
    assert_eq!(line.content, "第二章 夜行");
}

#[test]
fn crlf_and_lf_inputs_agree() {
    let lf = parse_bytes(NOVEL.as_bytes());
    let crlf = parse_bytes(NOVEL.replace('\n', "\r\n").as_bytes());
    assert_eq!(lf, crlf);
}

#[test]
fn parse_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let (gbk_bytes, _, _) = encoding_rs::GBK.encode(NOVEL);
    file.write_all(&gbk_bytes).expect("write");

    let parsed = parse_file(file.path()).expect("parse");
    assert_eq!(parsed.total_chapters, 2);
    assert_eq!(parsed.chapters[1].title, "夜行");
}

#[test]
fn parse_file_missing_path_is_an_io_error() {
    let err = parse_file("/nonexistent/zhanghui-test.txt").unwrap_err();
    assert!(matches!(err, zhanghui::Error::Io(_)));
}
