use crate::syntax::Status;
use crate::{Mode, Tagger, assert_diagnostics, assert_dump, tag};

#[test]
fn numbered_backreference() {
    assert_dump!(r"(a)\1", @r"
    Subexpression 0..3 `(a)` ok
      LiteralChar 1..2 `a` ok
    Backreference 3..5 `\1` ok number=1
    status: ok
    ");
}

#[test]
fn forward_reference_resolves() {
    assert_dump!(r"\1(a)", @r"
    Backreference 0..2 `\1` ok number=1
    Subexpression 2..5 `(a)` ok
      LiteralChar 3..4 `a` ok
    status: ok
    ");
}

#[test]
fn unresolved_reference() {
    assert_dump!(r"(a)\2", @r"
    Subexpression 0..3 `(a)` ok
      LiteralChar 1..2 `a` ok
    Backreference 3..5 `\2` warning
    status: warning
    ");
}

#[test]
fn without_prescan_nothing_resolves() {
    let mut tagger = Tagger::new(Mode::Search).with_group_prescan(false);

    assert_eq!(tagger.try_parse(r"(a)\1"), Status::Warning);
    assert_eq!(tagger.nodes()[1].number(), None);
}

#[test]
fn longest_resolving_digit_run() {
    let pattern = format!("{}\\12", "(a)".repeat(12));
    let tagging = tag(&pattern, Mode::Search);
    let backref = &tagging.nodes[12];

    assert_eq!(backref.text(), r"\12");
    assert_eq!(backref.number(), Some(12));
}

#[test]
fn digit_run_falls_back_to_shorter_reference() {
    assert_dump!(r"(a)(b)\12", @r"
    Subexpression 0..3 `(a)` ok
      LiteralChar 1..2 `a` ok
    Subexpression 3..6 `(b)` ok
      LiteralChar 4..5 `b` ok
    Backreference 6..8 `\1` ok number=1
    LiteralChar 8..9 `2` ok
    status: ok
    ");
}

#[test]
fn named_backreference() {
    assert_dump!(r"(?<word>\w+)\k<word>", @r"
    NamedGroup 0..12 `(?<word>\w+)` ok name=word
      GroupControl 1..2 `?` ok
      GroupName 2..8 `<word>` ok
      ClassShorthand 8..10 `\w` ok
      Quantifier 10..11 `+` ok
    Backreference 12..20 `\k<word>` ok number=1
    status: ok
    ");
}

#[test]
fn named_groups_numbered_after_unnamed() {
    let tagging = tag(r"(?<n>a)(b)\k<n>\k'1'", Mode::Search);

    assert_eq!(tagging.nodes[2].number(), Some(2));
    assert_eq!(tagging.nodes[3].number(), Some(1));
}

#[test]
fn unknown_name() {
    assert_diagnostics!(r"\k<nope>", @"warning at 0..8: group `nope` is not defined");
}

#[test]
fn malformed_named_reference() {
    assert_dump!(r"\kx", @r"
    Backreference 0..2 `\k` error
    status: error
    ");
    assert_diagnostics!(r"\k<>", @"error at 0..4: invalid group name: name is empty (hint: names start with a letter or `_` and continue with letters, digits or `_`)");
}

#[test]
fn digits_in_class_are_escapes() {
    assert_dump!(r"(a)[\1]", @r"
    Subexpression 0..3 `(a)` ok
      LiteralChar 1..2 `a` ok
    CharClass 3..7 `[\1]` ok
      EscapedChar 4..6 `\1` ok
    status: ok
    ");
}
