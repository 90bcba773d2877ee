use crate::{Mode, assert_diagnostics, assert_dump, tag};

#[test]
fn capturing_group() {
    assert_dump!("(ab)", @r"
    Subexpression 0..4 `(ab)` ok
      LiteralRun 1..3 `ab` ok
    status: ok
    ");
}

#[test]
fn nested_groups() {
    assert_dump!("((a)b)", @r"
    Subexpression 0..6 `((a)b)` ok
      Subexpression 1..4 `(a)` ok
        LiteralChar 2..3 `a` ok
      LiteralChar 4..5 `b` ok
    status: ok
    ");
}

#[test]
fn named_group() {
    assert_dump!(r"(?<year>\d+)", @r"
    NamedGroup 0..12 `(?<year>\d+)` ok name=year
      GroupControl 1..2 `?` ok
      GroupName 2..8 `<year>` ok
      ClassShorthand 8..10 `\d` ok
      Quantifier 10..11 `+` ok
    status: ok
    ");
}

#[test]
fn quoted_group_name() {
    assert_dump!("(?'x'a)", @r"
    NamedGroup 0..7 `(?'x'a)` ok name=x
      GroupControl 1..2 `?` ok
      GroupName 2..5 `'x'` ok
      LiteralChar 5..6 `a` ok
    status: ok
    ");
}

#[test]
fn non_capturing_and_lookaround() {
    assert_dump!("(?:a)(?<!b)", @r"
    Subexpression 0..5 `(?:a)` ok
      GroupControl 1..3 `?:` ok
      LiteralChar 3..4 `a` ok
    Subexpression 5..11 `(?<!b)` ok
      GroupControl 6..9 `?<!` ok
      LiteralChar 9..10 `b` ok
    status: ok
    ");
}

#[test]
fn inline_options() {
    assert_dump!("(?i)a", @r"
    Subexpression 0..4 `(?i)` ok
      GroupControl 1..3 `?i` ok
    LiteralChar 4..5 `a` ok
    status: ok
    ");
    assert_dump!("(?im-sx:a)", @r"
    Subexpression 0..10 `(?im-sx:a)` ok
      GroupControl 1..8 `?im-sx:` ok
      LiteralChar 8..9 `a` ok
    status: ok
    ");
}

#[test]
fn comment_group() {
    assert_dump!("(?#note)a", @r"
    Subexpression 0..8 `(?#note)` ok
      GroupControl 1..7 `?#note` ok
    LiteralChar 8..9 `a` ok
    status: ok
    ");
}

#[test]
fn unclosed_comment() {
    assert_dump!("(?#x", @r"
    Subexpression 0..4 `(?#x` unfinished
      GroupControl 1..4 `?#x` unfinished
    status: unfinished
    ");
    assert_diagnostics!("(?#x", @"unfinished at 0..1: missing closing `)`");
}

#[test]
fn conditional_group() {
    assert_dump!("(?(x)a|b)", @r"
    Subexpression 0..9 `(?(x)a|b)` ok
      GroupControl 1..2 `?` ok
      Subexpression 2..5 `(x)` ok
        LiteralChar 3..4 `x` ok
      LiteralChar 5..6 `a` ok
      AltChar 6..7 `|` ok
      LiteralChar 7..8 `b` ok
    status: ok
    ");
}

#[test]
fn unknown_construct_keeps_scanning() {
    assert_dump!("(?%a)b", @r"
    Subexpression 0..5 `(?%a)` warning
      GroupControl 1..3 `?%` warning
      LiteralChar 3..4 `a` ok
    LiteralChar 5..6 `b` ok
    status: warning
    ");
    assert_diagnostics!("(?%a)b", @"warning at 1..3: unrecognized grouping construct: `(?%`");
}

#[test]
fn invalid_group_name() {
    assert_dump!("(?<1a>b)", @r"
    NamedGroup 0..3 `(?<` error
      GroupControl 1..2 `?` ok
      GroupName 2..3 `<` error
    status: error
    ");
    assert_diagnostics!("(?<1a>b)", @"error at 3..4: invalid group name: unexpected `1` (hint: names start with a letter or `_` and continue with letters, digits or `_`)");
}

#[test]
fn group_name_cut_short() {
    assert_dump!("(?<ab", @r"
    NamedGroup 0..5 `(?<ab` error
      GroupControl 1..2 `?` ok
      GroupName 2..5 `<ab` error
    status: error
    ");
}

#[test]
fn group_name_is_not_set_when_invalid() {
    let tagging = tag("(?<a-b>x)", Mode::Search);
    assert_eq!(tagging.nodes[0].name(), None);
}

#[test]
fn error_in_body_leaves_group_unfinished() {
    assert_dump!("(a[z-a]b)", @r"
    Subexpression 0..7 `(a[z-a]` unfinished
      LiteralChar 1..2 `a` ok
      CharClass 2..7 `[z-a]` error
        CharRange 3..6 `z-a` error
    LiteralChar 7..8 `b` ok
    Subexpression 8..9 `)` error
    status: unfinished
    ");
}
