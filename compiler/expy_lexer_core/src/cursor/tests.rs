use super::earliest_of;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert_eq!(cursor.current(), b'\n');
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

// === EOF Detection ===

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance(); // at '\0' (interior null)
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Prefix Matching ===

#[test]
fn starts_with_matches_upcoming_bytes() {
    let buf = SourceBuffer::new("0x1F");
    let mut cursor = buf.cursor();
    assert!(cursor.starts_with("0x"));
    assert!(!cursor.starts_with("0o"));
    cursor.advance_n(2);
    assert!(cursor.starts_with("1F\n"));
}

#[test]
fn starts_with_past_padding_is_false() {
    let buf = SourceBuffer::new("=");
    let cursor = buf.cursor();
    assert!(!cursor.starts_with(&"=".repeat(200)));
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

// === Eat While ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let buf = SourceBuffer::new("123abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b != 0);
    assert!(cursor.is_eof());
}

// === Comment Skipping ===

#[test]
fn eat_until_newline_stops_on_newline() {
    let buf = SourceBuffer::new("\" note\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), b'\n');
}

// === String Delimiters ===

#[test]
fn skip_to_string_delim_finds_quote() {
    let buf = SourceBuffer::new("abc'rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\'');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_backslash_first() {
    let buf = SourceBuffer::new("a\\n'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_string_delim_stops_at_appended_newline() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\n');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_stops_at_interior_null() {
    let buf = SourceBuffer::new("ab\0'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert_eq!(cursor.pos(), 2);
    assert!(!cursor.is_eof());
}

// === Whitespace ===

#[test]
fn eat_whitespace_counts_spaces_and_tabs() {
    let buf = SourceBuffer::new(" \t  x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_whitespace(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_whitespace_does_not_eat_carriage_return() {
    let buf = SourceBuffer::new("  \r");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_whitespace(), 2);
    assert_eq!(cursor.current(), b'\r');
}

// === Helpers ===

#[test]
fn earliest_of_picks_minimum() {
    assert_eq!(earliest_of(Some(4), Some(2)), Some(2));
    assert_eq!(earliest_of(None, Some(7)), Some(7));
    assert_eq!(earliest_of(Some(1), None), Some(1));
    assert_eq!(earliest_of(None, None), None);
}

mod proptest_scanning {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn eat_whitespace_matches_scalar_count(
            bytes in proptest::collection::vec(
                prop_oneof![Just(' '), Just('\t'), Just('a'), Just('\n'), Just('\r')],
                0..128,
            )
        ) {
            let source: String = bytes.into_iter().collect();
            let expected = source.bytes().take_while(|&b| b == b' ' || b == b'\t').count();
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            let eaten = cursor.eat_whitespace();
            prop_assert_eq!(eaten as usize, expected);
            prop_assert_eq!(cursor.pos() as usize, expected);
        }

        #[test]
        fn string_delim_matches_naive_search(source in "[a-c'\\\\\n ]{0,64}") {
            let buf = SourceBuffer::new(&source);
            let text = buf.text();
            let expected = text
                .bytes()
                .position(|b| matches!(b, b'\'' | b'\\' | b'\n' | 0))
                .unwrap_or(text.len());
            let mut cursor = buf.cursor();
            cursor.skip_to_string_delim();
            prop_assert_eq!(cursor.pos() as usize, expected);
        }
    }
}
