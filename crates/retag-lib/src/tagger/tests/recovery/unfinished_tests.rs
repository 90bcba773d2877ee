use crate::{Mode, Status, assert_diagnostics, assert_dump, tag};

#[test]
fn unclosed_class() {
    assert_dump!("[abc", @r"
    CharClass 0..4 `[abc` unfinished
      LiteralChar 1..2 `a` ok
      LiteralChar 2..3 `b` ok
      LiteralChar 3..4 `c` ok
    status: unfinished
    ");
    assert_diagnostics!("[abc", @"unfinished at 0..4: missing closing `]`");
}

#[test]
fn unclosed_group() {
    assert_dump!("(a", @r"
    Subexpression 0..2 `(a` unfinished
      LiteralChar 1..2 `a` ok
    status: unfinished
    ");
    assert_diagnostics!("(a", @"unfinished at 0..1: missing closing `)`");
}

#[test]
fn inner_group_closed_outer_open() {
    assert_dump!("((a)", @r"
    Subexpression 0..4 `((a)` unfinished
      Subexpression 1..4 `(a)` ok
        LiteralChar 2..3 `a` ok
    status: unfinished
    ");
}

#[test]
fn group_construct_cut_short() {
    assert_dump!("(?", @r"
    Subexpression 0..2 `(?` unfinished
      GroupControl 1..2 `?` unfinished
    status: unfinished
    ");
    assert_dump!("(?i", @r"
    Subexpression 0..3 `(?i` unfinished
      GroupControl 1..3 `?i` unfinished
    status: unfinished
    ");
}

#[test]
fn brace_cut_short() {
    assert_dump!("a{2,", @r"
    LiteralChar 0..1 `a` ok
    Quantifier 1..4 `{2,` unfinished
      RepeatBound 2..3 `2` ok
    status: unfinished
    ");
    assert_dump!("a{", @r"
    LiteralChar 0..1 `a` ok
    Quantifier 1..2 `{` unfinished
    status: unfinished
    ");
}

#[test]
fn escapes_cut_short() {
    for pattern in ["\\", r"\c", r"\x4", r"\u12", r"\p", r"\p{Lu", r"\k", r"\k<a"] {
        assert_eq!(
            tag(pattern, Mode::Search).status,
            Status::Unfinished,
            "pattern {pattern:?}"
        );
    }
}

#[test]
fn trailing_backslash() {
    assert_dump!("a\\", @r"
    LiteralChar 0..1 `a` ok
    EscapedChar 1..2 `\` unfinished
    status: unfinished
    ");
    assert_diagnostics!("a\\", @"unfinished at 1..2: pattern ends with a lone `\\`");
}

#[test]
fn range_end_cut_short() {
    assert_dump!(r"[a-\x4", @r"
    CharClass 0..6 `[a-\x4` unfinished
      CharRange 1..6 `a-\x4` unfinished
    status: unfinished
    ");
    assert_diagnostics!(r"[a-\x4", @r"
    unfinished at 3..6: incomplete escape sequence
    unfinished at 0..6: missing closing `]`
    ");
}

#[test]
fn unfinished_outranks_error() {
    assert_eq!(tag("[z-a", Mode::Search).status, Status::Unfinished);
}
