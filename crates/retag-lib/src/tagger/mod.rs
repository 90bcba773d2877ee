//! Pattern tagger.
//!
//! # Architecture
//!
//! A single recursive-descent pass over the pattern's characters with no separate lexer.
//! Each production pushes positioned nodes onto the current sibling list; groups and
//! classes open a fresh list on a scope stack and wrap it into a composite node when they
//! close. After the pass, adjacent literals are merged into runs.
//!
//! # Statuses
//!
//! Nothing is ever rejected outright. Each node carries a [`Status`] and every non-Ok
//! status is explained by a diagnostic. An `Error` stops the scan of the sibling list it
//! occurred in, so the tree then covers a prefix of the pattern. Input that merely ends
//! too early is `Unfinished`, which outranks everything else.
//!
//! Before the main pass the pattern is pre-scanned for capturing groups, so numbered and
//! named backreferences resolve against groups defined anywhere in the pattern.

mod coalesce;
mod core;
mod grammar;
mod invariants;
mod prescan;


use crate::diagnostics::Diagnostics;
use crate::syntax::{NodeList, Status};
use crate::{Error, Result};

use self::core::Parser;
use coalesce::coalesce;
use prescan::GroupTable;

const DEFAULT_MAX_DEPTH: u32 = 256;

/// Which grammar a pattern is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full regex syntax.
    #[default]
    Search,
    /// Replacement text: only backslash escapes are special.
    Replace,
}

/// Reusable tagger; holds the result of the last [`try_parse`](Self::try_parse).
#[derive(Debug, Clone)]
pub struct Tagger {
    mode: Mode,
    max_depth: u32,
    group_prescan: bool,
    nodes: NodeList,
    status: Status,
    diagnostics: Diagnostics,
}

/// Outcome of tagging one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagging {
    pub nodes: NodeList,
    pub status: Status,
    pub diagnostics: Diagnostics,
}

impl Tagger {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            max_depth: DEFAULT_MAX_DEPTH,
            group_prescan: true,
            nodes: NodeList::new(),
            status: Status::Ok,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Deepest allowed nesting of groups and classes.
    pub fn with_max_depth(mut self, limit: u32) -> Self {
        self.max_depth = limit;
        self
    }

    /// When disabled, the group count is zero and no numeric backreference resolves.
    pub fn with_group_prescan(mut self, enabled: bool) -> Self {
        self.group_prescan = enabled;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Tag `pattern`, replacing the previous result, and return the overall status.
    pub fn try_parse(&mut self, pattern: &str) -> Status {
        let groups = if self.group_prescan && self.mode == Mode::Search {
            GroupTable::scan(pattern)
        } else {
            GroupTable::default()
        };

        let mut parser = Parser::new(pattern, self.mode, groups, self.max_depth);
        let status = parser.parse_root();
        let (mut nodes, diagnostics) = parser.finish();
        coalesce(&mut nodes);

        self.nodes = nodes;
        self.status = status;
        self.diagnostics = diagnostics;
        status
    }

    pub fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_tagging(self) -> Tagging {
        Tagging {
            nodes: self.nodes,
            status: self.status,
            diagnostics: self.diagnostics,
        }
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl Tagging {
    /// Tree dump followed by a `status:` line.
    pub fn dump(&self) -> String {
        format!("{}status: {}\n", self.nodes.dump(), self.status)
    }
}

/// Tag `pattern` with default options.
pub fn tag(pattern: &str, mode: Mode) -> Tagging {
    let mut tagger = Tagger::new(mode);
    tagger.try_parse(pattern);
    tagger.into_tagging()
}

/// Tag `pattern`, failing unless the result is Ok or Warning.
pub fn check(pattern: &str, mode: Mode) -> Result<Tagging> {
    let tagging = tag(pattern, mode);
    match tagging.status {
        Status::Error => Err(Error::InvalidPattern(tagging.diagnostics)),
        Status::Unfinished => Err(Error::IncompletePattern(tagging.diagnostics)),
        Status::Ok | Status::Warning => Ok(tagging),
    }
}
