//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;

impl Parser<'_> {
    pub(super) fn ensure_scopes_balanced(&self) {
        assert!(
            self.scopes.is_empty(),
            "Parser: {} scope(s) left open after parsing (every open_scope needs a close_scope)",
            self.scopes.len()
        );
    }
}
