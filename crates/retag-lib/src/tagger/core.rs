//! Parser state and low-level cursor operations.

use std::ops::Range;

use super::Mode;
use super::prescan::GroupTable;
use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics};
use crate::syntax::{Node, NodeList, Status, Tag};

/// Per-parse state.
///
/// `current` is the children list being filled; entering a group or class saves it on
/// `scopes` and starts a fresh one, leaving hands the filled list back and restores the
/// parent's.
pub(crate) struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) pos: usize,
    pub(super) mode: Mode,
    pub(super) current: NodeList,
    pub(super) scopes: Vec<NodeList>,
    pub(super) groups: GroupTable,
    pub(super) diagnostics: Diagnostics,
    /// Set once nesting exceeded the limit; the rest of the input was swallowed.
    pub(super) aborted: bool,
    depth: u32,
    max_depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, mode: Mode, groups: GroupTable, max_depth: u32) -> Self {
        Self {
            source,
            pos: 0,
            mode,
            current: NodeList::new(),
            scopes: Vec::with_capacity(8),
            groups,
            diagnostics: Diagnostics::new(),
            aborted: false,
            depth: 0,
            max_depth,
        }
    }

    pub fn parse_root(&mut self) -> Status {
        self.parse_sequence(None)
    }

    pub fn finish(self) -> (NodeList, Diagnostics) {
        self.ensure_scopes_balanced();
        (self.current, self.diagnostics)
    }

    pub(super) fn is_search(&self) -> bool {
        self.mode == Mode::Search
    }

    pub(super) fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume while `pred` holds; returns how many chars were consumed.
    pub(super) fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&pred) {
            self.bump();
            count += 1;
        }
        count
    }

    pub(super) fn slice(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Byte range of the character at the cursor (empty at end of input).
    pub(super) fn char_range(&self) -> Range<usize> {
        let len = self.peek().map_or(0, char::len_utf8);
        self.pos..self.pos + len
    }

    pub(super) fn push(&mut self, node: Node) {
        self.current.push(node);
    }

    /// Push a leaf covering `start..pos`.
    pub(super) fn push_leaf(&mut self, tag: Tag, start: usize, status: Status) -> Status {
        let text = self.slice(start);
        self.push(Node::leaf(tag, start, text, status));
        status
    }

    /// Consume one character and push it as a leaf.
    pub(super) fn single(&mut self, tag: Tag, status: Status) -> Status {
        let start = self.pos;
        self.bump();
        self.push_leaf(tag, start, status)
    }

    pub(super) fn previous(&self) -> Option<&Node> {
        self.current.last()
    }

    pub(super) fn open_scope(&mut self) {
        let parent = std::mem::take(&mut self.current);
        self.scopes.push(parent);
    }

    pub(super) fn close_scope(&mut self) -> NodeList {
        let parent = self.scopes.pop().unwrap_or_default();
        std::mem::replace(&mut self.current, parent)
    }

    pub(super) fn enter_nesting(&mut self) -> bool {
        if self.depth >= self.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// A group or class opening past the depth limit takes the rest of the input with it.
    pub(super) fn reject_too_deep(&mut self, tag: Tag) -> Status {
        let start = self.pos;
        let delimiter = self.char_range();
        self.pos = self.source.len();
        self.aborted = true;
        self.diagnostics
            .report(DiagnosticKind::NestingTooDeep, delimiter)
            .emit();
        self.push_leaf(tag, start, Status::Error)
    }

    pub(super) fn report(&mut self, kind: DiagnosticKind, range: Range<usize>) -> DiagnosticBuilder<'_> {
        self.diagnostics.report(kind, range)
    }
}
