use crate::{Mode, Status, assert_diagnostics, assert_dump, tag};

#[test]
fn plain_class() {
    assert_dump!("[abc]", @r"
    CharClass 0..5 `[abc]` ok
      LiteralChar 1..2 `a` ok
      LiteralChar 2..3 `b` ok
      LiteralChar 3..4 `c` ok
    status: ok
    ");
}

#[test]
fn valid_range() {
    assert_dump!("[a-z]", @r"
    CharClass 0..5 `[a-z]` ok
      CharRange 1..4 `a-z` ok
    status: ok
    ");
}

#[test]
fn negated_class() {
    assert_dump!("[^a-z_]", @r"
    CharClass 0..7 `[^a-z_]` ok
      ClassControl 1..2 `^` ok
      CharRange 2..5 `a-z` ok
      LiteralChar 5..6 `_` ok
    status: ok
    ");
}

#[test]
fn inverted_range() {
    assert_dump!("[z-a]", @r"
    CharClass 0..5 `[z-a]` error
      CharRange 1..4 `z-a` error
    status: error
    ");
    assert_diagnostics!("[z-a]", @"error at 1..4: range `z-a` is out of order (fix: swap the endpoints)");
}

#[test]
fn inverted_range_fix_swaps_endpoints() {
    let tagging = tag("[z-a]", Mode::Search);
    let fix = tagging.diagnostics.iter().next().and_then(|d| d.fix()).cloned();

    assert_eq!(fix.map(|f| f.replacement().to_string()), Some("a-z".to_string()));
}

#[test]
fn single_char_range_is_inverted() {
    assert_eq!(tag("[a-a]", Mode::Search).status, Status::Error);
}

#[test]
fn dash_at_edges_is_literal() {
    assert_dump!("[-a-]", @r"
    CharClass 0..5 `[-a-]` ok
      LiteralChar 1..2 `-` ok
      LiteralChar 2..3 `a` ok
      LiteralChar 3..4 `-` ok
    status: ok
    ");
}

#[test]
fn leading_bracket_is_literal() {
    assert_dump!("[]a]", @r"
    CharClass 0..4 `[]a]` ok
      LiteralChar 1..2 `]` ok
      LiteralChar 2..3 `a` ok
    status: ok
    ");
    assert_dump!("[^]]", @r"
    CharClass 0..4 `[^]]` ok
      ClassControl 1..2 `^` ok
      LiteralChar 2..3 `]` ok
    status: ok
    ");
}

#[test]
fn escaped_bracket_and_backspace() {
    assert_dump!(r"[\]\b]", @r"
    CharClass 0..6 `[\]\b]` ok
      EscapedChar 1..3 `\]` ok
      EscapedChar 3..5 `\b` ok
    status: ok
    ");
}

#[test]
fn escaped_range_endpoints() {
    assert_dump!(r"[\x41-\x5A]", @r"
    CharClass 0..11 `[\x41-\x5A]` ok
      CharRange 1..10 `\x41-\x5A` ok
    status: ok
    ");
}

#[test]
fn shorthand_before_dash() {
    assert_dump!(r"[\d-z]", @r"
    CharClass 0..6 `[\d-z]` ok
      ClassShorthand 1..3 `\d` ok
      LiteralChar 3..4 `-` ok
      LiteralChar 4..5 `z` ok
    status: ok
    ");
}

#[test]
fn shorthand_as_range_end() {
    assert_dump!(r"[a-\d]", @r"
    CharClass 0..6 `[a-\d]` error
      CharRange 1..5 `a-\d` error
    status: error
    ");
    assert_diagnostics!(r"[a-\d]", @r"error at 3..5: range endpoint is not a single character: `\d`");
}

#[test]
fn subtraction() {
    assert_dump!("[a-z-[aeiou]]", @r"
    CharClass 0..13 `[a-z-[aeiou]]` ok
      CharRange 1..4 `a-z` ok
      ClassControl 4..5 `-` ok
      CharClass 5..12 `[aeiou]` ok
        LiteralChar 6..7 `a` ok
        LiteralChar 7..8 `e` ok
        LiteralChar 8..9 `i` ok
        LiteralChar 9..10 `o` ok
        LiteralChar 10..11 `u` ok
    status: ok
    ");
}

#[test]
fn class_contents_are_not_coalesced() {
    let tagging = tag("x[ab]y", Mode::Search);
    let class = &tagging.nodes[1];

    assert_eq!(class.children().map(|c| c.len()), Some(2));
}

#[test]
fn error_inside_class_keeps_scanning() {
    assert_dump!(r"[\cé-]a", @r"
    CharClass 0..7 `[\cé-]` error
      ControlChar 1..5 `\cé` error
      LiteralChar 5..6 `-` ok
    status: error
    ");
}
