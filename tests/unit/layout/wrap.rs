use super::*;

#[test]
fn short_text_is_one_line() {
    assert_eq!(wrap("Learn systems design", 55), vec!["Learn systems design"]);
}

#[test]
fn empty_and_blank_text_yield_nothing() {
    assert!(wrap("", 55).is_empty());
    assert!(wrap("   \n\t ", 55).is_empty());
}

#[test]
fn breaks_between_words() {
    assert_eq!(
        wrap("the quick brown fox jumps", 10),
        vec!["the quick", "brown fox", "jumps"]
    );
}

#[test]
fn newlines_become_spaces() {
    assert_eq!(wrap("one\ntwo\tthree", 55), vec!["one two three"]);
}

#[test]
fn leading_space_kept_only_on_first_line() {
    assert_eq!(wrap("  ab cd", 5), vec!["  ab", "cd"]);
}

#[test]
fn long_words_are_split_at_width() {
    assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(wrap("ab cdefghij", 5), vec!["ab cd", "efghi", "j"]);
}

#[test]
fn counts_characters_not_bytes() {
    let lines = wrap("ééééé ééééé", 5);
    assert_eq!(lines, vec!["ééééé", "ééééé"]);
}

#[test]
fn no_line_exceeds_width() {
    let text = "I want to be able to design, build and operate resilient distributed \
                systems, write clear documentation, and supercalifragilisticexpialidociously \
                review pull requests every single day without burning out.";
    for width in [1usize, 5, 10, 23, 55, 80] {
        let lines = wrap(text, width);
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(line.chars().count() <= width, "width {width}: {line:?}");
            assert!(!line.ends_with(' '), "width {width}: {line:?}");
        }
    }
}

#[test]
fn words_survive_wrapping() {
    let text = "a bb ccc dddd eeeee ffffff";
    let joined = wrap(text, 7).join(" ");
    assert_eq!(joined, text);
}

#[test]
fn full_line_is_not_extended_by_a_long_word() {
    let text = format!("{} {}", "a".repeat(54), "b".repeat(60));
    let lines = wrap(&text, 55);
    assert_eq!(lines, vec!["a".repeat(54), "b".repeat(55), "b".repeat(5)]);
    assert!(lines.iter().all(|l| l.chars().count() <= 55));
}

#[test]
fn exactly_full_line_before_a_long_word() {
    let text = format!("{} {}", "a".repeat(55), "b".repeat(60));
    assert_eq!(
        wrap(&text, 55),
        vec!["a".repeat(55), "b".repeat(55), "b".repeat(5)]
    );
}
