//! Grammar productions, one file per construct family.
//!
//! Every production consumes at least one character, pushes the nodes it recognized
//! onto the current scope and returns their combined status.

mod classes;
mod escapes;
mod groups;
mod sequence;

/// Where an escape appears; classes and sequences accept different escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EscapeContext {
    Sequence,
    Class,
}
