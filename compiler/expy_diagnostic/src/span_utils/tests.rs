use super::*;
use pretty_assertions::assert_eq;

#[test]
fn start_of_source() {
    assert_eq!(resolve("ab\ncd\n", 0), (1, 1));
}

#[test]
fn single_line() {
    let source = "hello world\n";
    assert_eq!(resolve(source, 4), (1, 5));
    assert_eq!(resolve(source, 10), (1, 11));
}

#[test]
fn second_line() {
    let source = "ab\ncd\n";
    assert_eq!(resolve(source, 3), (2, 1)); // 'c'
    assert_eq!(resolve(source, 4), (2, 2)); // 'd'
}

#[test]
fn offset_on_newline_belongs_to_the_line_it_ends() {
    let source = "ab\ncd\n";
    assert_eq!(resolve(source, 2), (1, 3));
    assert_eq!(resolve(source, 5), (2, 3));
}

#[test]
fn sentinel_offset() {
    // The sentinel sits right after the trailing newline.
    assert_eq!(resolve("ab\ncd\n", 6), (3, 1));
}

#[test]
fn past_the_end_clamps() {
    assert_eq!(resolve("ab\n", 400), resolve("ab\n", 3));
}

#[test]
fn consecutive_newlines() {
    let source = "a\n\n\nb\n";
    assert_eq!(resolve(source, 4), (4, 1));
}

#[test]
fn columns_count_characters() {
    // 'é' is two bytes, the emoji four.
    let source = "x = '\u{e9}\u{1F600}' @\n";
    let at = source.find('@').map_or(0, |i| i as u32);
    assert_eq!(resolve(source, at), (1, 10));
}

#[test]
fn empty_source() {
    assert_eq!(resolve("", 0), (1, 1));
    assert_eq!(resolve("", 3), (1, 1));
}

#[test]
fn describes_ordinary_characters_quoted() {
    assert_eq!(char_at("a @ b\n", 2), "\"@\"");
    assert_eq!(char_at("'x\n", 0), "\"'\"");
}

#[test]
fn describes_non_ascii_character_whole() {
    assert_eq!(char_at("x \u{e9}\n", 2), "\"\u{e9}\"");
}

#[test]
fn line_ends_are_end_of_input() {
    assert_eq!(char_at("ab\n", 2), END_OF_INPUT);
    assert_eq!(char_at("a\0b\n", 1), END_OF_INPUT);
    assert_eq!(char_at("ab\n", 3), END_OF_INPUT);
    assert_eq!(char_at("ab\n", 99), END_OF_INPUT);
}

mod proptest_resolve {
    use super::super::*;
    use proptest::prelude::*;
    use proptest::sample::Index;

    /// Line/column by splitting the prefix on newlines.
    fn reference(source: &str, offset: usize) -> (u32, u32) {
        let lines: Vec<&str> = source[..offset].split('\n').collect();
        let last = lines.last().map_or(0, |line| line.chars().count());
        (lines.len() as u32, last as u32 + 1)
    }

    proptest! {
        #[test]
        fn agrees_with_splitting(source in "[a-c \n\u{e9}\u{4e2d}]{0,40}", pick in any::<Index>()) {
            let boundaries: Vec<usize> = source
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(source.len()))
                .collect();
            let offset = *pick.get(&boundaries);
            prop_assert_eq!(resolve(&source, offset as u32), reference(&source, offset));
        }

        #[test]
        fn lines_never_decrease(source in "[ab\n]{0,40}") {
            let mut previous = (1, 1);
            for offset in 0..=source.len() as u32 {
                let here = resolve(&source, offset);
                prop_assert!(here.0 >= previous.0);
                previous = here;
            }
        }
    }
}
