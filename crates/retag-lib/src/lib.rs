//! Retag: diagnostic tagging of regular-expression patterns.
//!
//! The tagger splits a pattern into positioned, classified nodes and grades each one as
//! ok, warning, error or unfinished, so an editor can highlight a pattern while it is
//! still being typed.
//!
//! # Example
//!
//! ```
//! use retag_lib::{Mode, Status, tag};
//!
//! let tagging = tag(r"(\d+)-\1", Mode::Search);
//! assert_eq!(tagging.status, Status::Ok);
//! println!("{}", tagging.nodes.dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod syntax;
pub mod tagger;


pub use diagnostics::{Diagnostics, DiagnosticsPrinter};
pub use syntax::{Node, NodeList, Status, Tag};
pub use tagger::{Mode, Tagger, Tagging, check, tag};

/// Errors from the checked entry points.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("pattern is invalid with {} errors", .0.error_count())]
    InvalidPattern(Diagnostics),

    /// The pattern ends in the middle of a construct.
    #[error("pattern is incomplete")]
    IncompletePattern(Diagnostics),
}

impl Error {
    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            Error::InvalidPattern(diagnostics) | Error::IncompletePattern(diagnostics) => {
                diagnostics
            }
        }
    }
}

/// Result type for checked tagging.
pub type Result<T> = std::result::Result<T, Error>;
