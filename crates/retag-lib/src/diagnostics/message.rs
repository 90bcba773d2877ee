use std::ops::Range;

use crate::syntax::Status;

/// Causes of a non-Ok status, grouped by the status they imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Input ended inside a multi-character construct
    TrailingBackslash,
    IncompleteEscape,
    UnclosedClass,
    UnclosedGroup,
    UnclosedRepeat,

    // Structurally invalid
    InvertedRange,
    RangeEndpointNotChar,
    InvalidControlChar,
    InvalidHexDigit,
    MissingCategoryBraces,
    InvalidCategoryName,
    UnknownCategory,
    InvalidGroupName,
    MalformedNamedBackref,
    UnmatchedParen,
    NestingTooDeep,

    // Parseable but suspicious
    UnresolvedBackref,
    EmptyAlternative,
    NothingToQuantify,
    QuantifiedWarning,
    InvalidRepeatBounds,
    UnknownGroupConstruct,
}

impl DiagnosticKind {
    /// Node status this diagnostic accompanies.
    pub fn status(&self) -> Status {
        match self {
            Self::TrailingBackslash
            | Self::IncompleteEscape
            | Self::UnclosedClass
            | Self::UnclosedGroup
            | Self::UnclosedRepeat => Status::Unfinished,

            Self::UnresolvedBackref
            | Self::EmptyAlternative
            | Self::NothingToQuantify
            | Self::QuantifiedWarning
            | Self::InvalidRepeatBounds
            | Self::UnknownGroupConstruct => Status::Warning,

            _ => Status::Error,
        }
    }

    /// Default hint for this kind, shown after the message.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidControlChar => Some("`\\c` must be followed by a letter or one of `@[`"),
            Self::InvalidGroupName => {
                Some("names start with a letter or `_` and continue with letters, digits or `_`")
            }
            Self::UnmatchedParen => Some("escape it as `\\)` to match a literal parenthesis"),
            Self::InvalidRepeatBounds => Some("use `{n}`, `{n,}` or `{n,m}` with 0 < n < m"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::TrailingBackslash => "pattern ends with a lone `\\`",
            Self::IncompleteEscape => "incomplete escape sequence",
            Self::UnclosedClass => "missing closing `]`",
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnclosedRepeat => "missing closing `}`",

            Self::InvertedRange => "range is out of order",
            Self::RangeEndpointNotChar => "range endpoint is not a single character",
            Self::InvalidControlChar => "invalid control character escape",
            Self::InvalidHexDigit => "invalid hexadecimal digit",
            Self::MissingCategoryBraces => "expected `{` after category escape",
            Self::InvalidCategoryName => "category name must contain only letters",
            Self::UnknownCategory => "unknown Unicode category",
            Self::InvalidGroupName => "invalid group name",
            Self::MalformedNamedBackref => "expected `<` or `'` after `\\k`",
            Self::UnmatchedParen => "unmatched closing `)`",
            Self::NestingTooDeep => "nesting is too deep",

            Self::UnresolvedBackref => "reference to undefined group",
            Self::EmptyAlternative => "alternation branch is empty",
            Self::NothingToQuantify => "quantifier has nothing to repeat",
            Self::QuantifiedWarning => "quantifier applies to a flagged item",
            Self::InvalidRepeatBounds => "repeat bounds are not increasing",
            Self::UnknownGroupConstruct => "unrecognized grouping construct",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::InvertedRange => "range `{}` is out of order".to_string(),
            Self::UnknownCategory => "`{}` is not a known Unicode category".to_string(),
            Self::UnresolvedBackref => "group `{}` is not defined".to_string(),
            Self::InvalidGroupName => "invalid group name: {}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// Suggested replacement for the diagnostic's range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range of the pattern the diagnostic points at.
    pub(crate) range: Range<usize>,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            fix: None,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }

    pub fn status(&self) -> Status {
        self.kind.status()
    }

    pub fn is_error(&self) -> bool {
        self.status() == Status::Error
    }

    pub fn is_warning(&self) -> bool {
        self.status() == Status::Warning
    }

    pub fn is_unfinished(&self) -> bool {
        self.status() == Status::Unfinished
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.status(),
            self.range.start,
            self.range.end,
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        if let Some(hint) = self.kind.default_hint() {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
