//! Syntactic classification of tagged spans.

use serde::Serialize;

/// Every construct the tagger recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    /// A single literal character.
    LiteralChar,
    /// Adjacent literal characters merged by the coalescing pass.
    LiteralRun,
    /// `[...]`
    CharClass,
    /// `a-z` inside a class.
    CharRange,
    /// `^` negation or `-` subtraction marker inside a class.
    ClassControl,
    /// `\n`, `\.`, `\]`, ...
    EscapedChar,
    /// `^`, `$`, `\A`, `\b`, ...
    AnchorControl,
    Dot,
    /// `\d`, `\s`, `\w` and their negations.
    ClassShorthand,
    /// `\cX`
    ControlChar,
    /// `\012`
    OctalEscape,
    /// `\xHH`
    HexEscape,
    /// `\uHHHH`
    UnicodeEscape,
    /// `\p{Name}` / `\P{Name}`
    UnicodeCategory,
    /// `?`, `+`, `*`, `{n,m}`, optionally followed by a lazy `?`.
    Quantifier,
    /// Numeric bound inside a brace quantifier.
    RepeatBound,
    /// `|`
    AltChar,
    /// `(...)`
    Subexpression,
    /// The `?` construct marker after `(`.
    GroupControl,
    /// `<name>` / `'name'` of a named group.
    GroupName,
    /// `(?<name>...)`
    NamedGroup,
    /// `\1`, `\k<name>`
    Backreference,
}

impl Tag {
    /// Nodes that the coalescing pass may merge.
    pub fn is_literal(self) -> bool {
        matches!(self, Tag::LiteralChar | Tag::LiteralRun)
    }

    pub fn is_quantifier(self) -> bool {
        self == Tag::Quantifier
    }

    pub fn is_group(self) -> bool {
        matches!(self, Tag::Subexpression | Tag::NamedGroup)
    }

    /// Denotes exactly one code point, so it can be a range endpoint.
    pub fn is_single_char(self) -> bool {
        matches!(
            self,
            Tag::LiteralChar
                | Tag::EscapedChar
                | Tag::OctalEscape
                | Tag::HexEscape
                | Tag::UnicodeEscape
                | Tag::ControlChar
        )
    }

    /// Whether a quantifier may follow a node of this kind.
    pub fn is_quantifiable(self) -> bool {
        !matches!(
            self,
            Tag::AltChar
                | Tag::Quantifier
                | Tag::AnchorControl
                | Tag::GroupControl
                | Tag::GroupName
                | Tag::RepeatBound
        )
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
