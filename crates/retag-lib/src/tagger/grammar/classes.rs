//! Character classes and ranges.

use super::EscapeContext;
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{Node, Status, Tag};
use crate::tagger::core::Parser;

impl Parser<'_> {
    /// `[...]`, `[^...]`, with ranges and nested classes.
    ///
    /// Errors inside a class do not stop the scan; the class still looks for its `]`.
    pub(super) fn parse_class(&mut self) -> Status {
        if !self.enter_nesting() {
            return self.reject_too_deep(Tag::CharClass);
        }

        let start = self.pos;
        self.bump();
        self.open_scope();

        if self.peek() == Some('^') {
            self.single(Tag::ClassControl, Status::Ok);
        }

        let body_start = self.pos;
        let mut status = Status::Ok;
        let mut closed = false;

        while let Some(c) = self.peek() {
            let at_body_start = self.pos == body_start;
            let item = match c {
                ']' if !at_body_start => {
                    self.bump();
                    closed = true;
                    break;
                }
                '\\' => self.parse_escape(EscapeContext::Class),
                '[' => self.parse_class(),
                '-' if !at_body_start => self.parse_class_dash(),
                _ => self.single(Tag::LiteralChar, Status::Ok),
            };
            status = status.combine(item);
        }

        let children = self.close_scope();
        self.exit_nesting();

        if self.aborted {
            status = Status::Error;
        } else if !closed {
            self.report(DiagnosticKind::UnclosedClass, start..self.pos)
                .emit();
            status = Status::Unfinished;
        }

        let text = self.slice(start);
        self.push(Node::composite(Tag::CharClass, start, text, status, children));
        status
    }

    /// A `-` inside a class: subtraction marker, range, or literal.
    fn parse_class_dash(&mut self) -> Status {
        match self.peek_nth(1) {
            Some('[') => return self.single(Tag::ClassControl, Status::Ok),
            Some(']') | None => return self.single(Tag::LiteralChar, Status::Ok),
            Some(_) => {}
        }

        if !self.previous().is_some_and(|prev| prev.tag.is_single_char()) {
            return self.single(Tag::LiteralChar, Status::Ok);
        }

        self.bump();
        let upper = match self.peek() {
            Some('\\') => self.parse_escape(EscapeContext::Class),
            _ => self.single(Tag::LiteralChar, Status::Ok),
        };

        let (Some(high), Some(low)) = (self.current.0.pop(), self.current.0.pop()) else {
            return upper;
        };
        self.merge_range(low, high)
    }

    fn merge_range(&mut self, low: Node, high: Node) -> Status {
        let range = low.start..self.pos;
        let text = self.slice(low.start);

        let status = if !low.status.is_ok() || !high.status.is_ok() {
            low.status.combine(high.status)
        } else {
            match (low.code_point(), high.code_point()) {
                (Some(first), Some(last)) if first < last => Status::Ok,
                (Some(_), Some(_)) => {
                    self.report(DiagnosticKind::InvertedRange, range)
                        .message(text)
                        .fix("swap the endpoints", format!("{}-{}", high.text, low.text))
                        .emit();
                    Status::Error
                }
                _ => {
                    let culprit = if low.code_point().is_none() { &low } else { &high };
                    self.report(DiagnosticKind::RangeEndpointNotChar, culprit.range())
                        .message(format!("`{}`", culprit.text))
                        .emit();
                    Status::Error
                }
            }
        };

        self.push(Node::leaf(Tag::CharRange, low.start, text, status));
        status
    }
}
