use crate::{assert_diagnostics, assert_dump};

#[test]
fn two_branches() {
    assert_dump!("a|b", @r"
    LiteralChar 0..1 `a` ok
    AltChar 1..2 `|` ok
    LiteralChar 2..3 `b` ok
    status: ok
    ");
}

#[test]
fn branches_coalesce_separately() {
    assert_dump!("ab|cd", @r"
    LiteralRun 0..2 `ab` ok
    AltChar 2..3 `|` ok
    LiteralRun 3..5 `cd` ok
    status: ok
    ");
}

#[test]
fn empty_left_branch() {
    assert_dump!("|a", @r"
    AltChar 0..1 `|` warning
    LiteralChar 1..2 `a` ok
    status: warning
    ");
    assert_diagnostics!("|a", @"warning at 0..1: alternation branch is empty");
}

#[test]
fn empty_right_branch() {
    assert_dump!("a|", @r"
    LiteralChar 0..1 `a` ok
    AltChar 1..2 `|` warning
    status: warning
    ");
}

#[test]
fn doubled_bar() {
    assert_diagnostics!("a||b", @r"
    warning at 1..2: alternation branch is empty
    warning at 2..3: alternation branch is empty
    ");
}

#[test]
fn empty_branch_before_group_close() {
    assert_dump!("(a|)b", @r"
    Subexpression 0..4 `(a|)` warning
      LiteralChar 1..2 `a` ok
      AltChar 2..3 `|` warning
    LiteralChar 4..5 `b` ok
    status: warning
    ");
}

#[test]
fn empty_branch_after_group_control() {
    assert_dump!("(?:|a)", @r"
    Subexpression 0..6 `(?:|a)` warning
      GroupControl 1..3 `?:` ok
      AltChar 3..4 `|` warning
      LiteralChar 4..5 `a` ok
    status: warning
    ");
}

#[test]
fn error_in_right_branch_stops_scan() {
    assert_dump!("a|[z-a]b", @r"
    LiteralChar 0..1 `a` ok
    AltChar 1..2 `|` ok
    CharClass 2..7 `[z-a]` error
      CharRange 3..6 `z-a` error
    status: error
    ");
}
