use crate::diagnostics::DiagnosticKind;
use crate::{Mode, Status, Tagger, tag};

fn parse_with_depth(pattern: &str, depth: u32) -> String {
    let mut tagger = Tagger::new(Mode::Search).with_max_depth(depth);
    tagger.try_parse(pattern);
    tagger.into_tagging().dump()
}

#[test]
fn groups_past_the_limit() {
    insta::assert_snapshot!(parse_with_depth("(((a)))", 2), @r"
    Subexpression 0..7 `(((a)))` error
      Subexpression 1..7 `((a)))` error
        Subexpression 2..7 `(a)))` error
    status: error
    ");
}

#[test]
fn classes_past_the_limit() {
    insta::assert_snapshot!(parse_with_depth("[[[a]]]", 2), @r"
    CharClass 0..7 `[[[a]]]` error
      CharClass 1..7 `[[a]]]` error
        CharClass 2..7 `[a]]]` error
    status: error
    ");
}

#[test]
fn default_limit() {
    let depth = 300;
    let pattern = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let tagging = tag(&pattern, Mode::Search);

    assert_eq!(tagging.status, Status::Error);
    let too_deep: Vec<_> = tagging
        .diagnostics
        .iter()
        .filter(|d| d.kind() == DiagnosticKind::NestingTooDeep)
        .collect();
    assert_eq!(too_deep.len(), 1);
    assert_eq!(too_deep[0].range(), 256..257);
}

#[test]
fn within_the_limit() {
    let pattern = format!("{}a{}", "(".repeat(256), ")".repeat(256));
    assert_eq!(tag(&pattern, Mode::Search).status, Status::Ok);
}

#[test]
fn long_alternation_is_not_nesting() {
    let pattern = format!("{}a", "a|".repeat(10_000));
    let tagging = tag(&pattern, Mode::Search);

    assert_eq!(tagging.status, Status::Ok);
    assert_eq!(tagging.nodes.len(), 20_001);
}
