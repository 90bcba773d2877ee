//! Four-valued diagnostic status attached to every node and to a whole parse.

use serde::Serialize;

/// Outcome of recognizing a construct.
///
/// Variants are declared in severity order, so the derived `Ord` is the lattice:
/// `Ok < Warning < Error < Unfinished`. An unfinished construct outranks everything
/// else because the user is still typing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Ok,
    /// Parseable but suspicious (unresolved reference, empty branch, ...).
    Warning,
    /// Structurally invalid. Stops scanning of the sibling list it occurs in.
    Error,
    /// The pattern ended before a multi-character construct was complete.
    Unfinished,
}

impl Status {
    /// The more severe of the two.
    #[must_use]
    pub fn combine(self, other: Status) -> Status {
        self.max(other)
    }

    /// Fold a sequence of outcomes, starting from `Ok`.
    pub fn fold(statuses: impl IntoIterator<Item = Status>) -> Status {
        statuses.into_iter().fold(Status::Ok, Status::combine)
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn is_warning(self) -> bool {
        self == Status::Warning
    }

    pub fn is_error(self) -> bool {
        self == Status::Error
    }

    pub fn is_unfinished(self) -> bool {
        self == Status::Unfinished
    }

    /// Ok or Warning: nothing an editor should reject.
    pub fn is_acceptable(self) -> bool {
        self <= Status::Warning
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Warning => write!(f, "warning"),
            Status::Error => write!(f, "error"),
            Status::Unfinished => write!(f, "unfinished"),
        }
    }
}
