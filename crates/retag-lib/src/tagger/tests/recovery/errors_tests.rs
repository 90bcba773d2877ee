use crate::diagnostics::DiagnosticKind;
use crate::{Error, Mode, Status, check, tag};

#[test]
fn check_accepts_ok_and_warning() {
    assert!(check("a*", Mode::Search).is_ok());

    let tagging = check("|a", Mode::Search).expect("warnings are accepted");
    assert_eq!(tagging.status, Status::Warning);
}

#[test]
fn check_rejects_errors() {
    let err = check("[z-a]", Mode::Search).unwrap_err();

    assert!(matches!(err, Error::InvalidPattern(_)));
    assert_eq!(err.to_string(), "pattern is invalid with 1 errors");
    assert_eq!(err.diagnostics().error_count(), 1);
}

#[test]
fn check_rejects_incomplete() {
    let err = check("(a", Mode::Search).unwrap_err();

    assert!(matches!(err, Error::IncompletePattern(_)));
    assert_eq!(err.to_string(), "pattern is incomplete");
}

#[test]
fn error_stops_top_level_scan() {
    let tagging = tag(r"a\p{Nope}bc", Mode::Search);

    assert_eq!(tagging.nodes.len(), 2);
    assert_eq!(tagging.nodes.text(), r"a\p{Nope}");
}

#[test]
fn every_error_is_explained() {
    let cases = [
        ("[z-a]", DiagnosticKind::InvertedRange),
        (r"[a-\w]", DiagnosticKind::RangeEndpointNotChar),
        ("\\cé", DiagnosticKind::InvalidControlChar),
        (r"\xZZ", DiagnosticKind::InvalidHexDigit),
        (r"\pL", DiagnosticKind::MissingCategoryBraces),
        (r"\p{L_}", DiagnosticKind::InvalidCategoryName),
        (r"\p{Nope}", DiagnosticKind::UnknownCategory),
        ("(?<1>a)", DiagnosticKind::InvalidGroupName),
        (r"\kx", DiagnosticKind::MalformedNamedBackref),
        (")", DiagnosticKind::UnmatchedParen),
    ];

    for (pattern, kind) in cases {
        let tagging = tag(pattern, Mode::Search);
        assert_eq!(tagging.status, Status::Error, "pattern {pattern:?}");
        assert!(
            tagging.diagnostics.iter().any(|d| d.kind() == kind),
            "pattern {pattern:?} lacks {kind:?}: {:?}",
            tagging.diagnostics
        );
    }
}
