//! Sibling sequences: literals, anchors, alternation and quantifiers.

use super::EscapeContext;
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{Node, NodeList, Status, Tag};
use crate::tagger::Mode;
use crate::tagger::core::Parser;

/// Outcome of looking ahead past a `{`.
enum Brace {
    /// Not a repeat; the `{` is an ordinary character.
    Literal,
    /// Input ended before the closing `}`.
    Unfinished { end: usize },
    Complete { end: usize },
}

impl Parser<'_> {
    /// Parse siblings until `stop` (left unconsumed) or end of input.
    ///
    /// An `Error` item ends the sequence: nothing after it is classified.
    pub(crate) fn parse_sequence(&mut self, stop: Option<char>) -> Status {
        let mut status = Status::Ok;

        while let Some(c) = self.peek() {
            if Some(c) == stop {
                break;
            }

            let item = match self.mode {
                Mode::Search => self.parse_search_item(c, stop),
                Mode::Replace => self.parse_replace_item(c),
            };
            status = status.combine(item);

            if item.is_error() {
                break;
            }
        }

        status
    }

    fn parse_search_item(&mut self, c: char, stop: Option<char>) -> Status {
        match c {
            '\\' => self.parse_escape(EscapeContext::Sequence),
            '[' => self.parse_class(),
            '(' => self.parse_group(),
            ')' => self.parse_unmatched_paren(),
            '|' => self.parse_alternation(stop),
            '?' | '*' | '+' => self.parse_quantifier(),
            '{' => self.parse_brace(),
            '.' => self.single(Tag::Dot, Status::Ok),
            '^' | '$' => self.single(Tag::AnchorControl, Status::Ok),
            _ => self.single(Tag::LiteralChar, Status::Ok),
        }
    }

    fn parse_replace_item(&mut self, c: char) -> Status {
        match c {
            '\\' => self.parse_escape(EscapeContext::Sequence),
            _ => self.single(Tag::LiteralChar, Status::Ok),
        }
    }

    fn parse_unmatched_paren(&mut self) -> Status {
        let start = self.pos;
        self.bump();
        self.report(DiagnosticKind::UnmatchedParen, start..self.pos)
            .fix("escape the parenthesis", "\\)")
            .emit();
        self.push_leaf(Tag::Subexpression, start, Status::Error)
    }

    /// A `|` splits the current sibling list; the right-hand side continues in the same
    /// scope until `stop`.
    fn parse_alternation(&mut self, stop: Option<char>) -> Status {
        let start = self.pos;
        let left_empty = self
            .previous()
            .is_none_or(|prev| matches!(prev.tag, Tag::AltChar | Tag::GroupControl | Tag::GroupName));
        self.bump();
        let right_empty = self.peek().is_none_or(|c| c == '|' || Some(c) == stop);

        let status = if left_empty || right_empty {
            self.report(DiagnosticKind::EmptyAlternative, start..self.pos)
                .emit();
            Status::Warning
        } else {
            Status::Ok
        };

        self.push_leaf(Tag::AltChar, start, status)
    }

    /// `?`, `*`, `+`, or a lazy `?` following another quantifier.
    fn parse_quantifier(&mut self) -> Status {
        let start = self.pos;
        let c = self.bump();

        if c == Some('?')
            && let Some(prev) = self.current.last_mut()
            && prev.tag == Tag::Quantifier
            && !prev.status.is_unfinished()
            && !is_lazy(prev)
        {
            prev.text.push('?');
            return Status::Ok;
        }

        let status = self.operand_status(start..self.pos);
        self.push_leaf(Tag::Quantifier, start, status)
    }

    /// Status a quantifier gets from the item it would repeat.
    fn operand_status(&mut self, range: std::ops::Range<usize>) -> Status {
        let kind = match self.previous() {
            Some(prev) if !prev.tag.is_quantifiable() => DiagnosticKind::NothingToQuantify,
            None => DiagnosticKind::NothingToQuantify,
            Some(prev) if !prev.status.is_ok() => DiagnosticKind::QuantifiedWarning,
            Some(_) => return Status::Ok,
        };
        self.report(kind, range).emit();
        Status::Warning
    }

    /// `{n}`, `{n,}` or `{n,m}`; anything else starting with `{` is a literal brace.
    fn parse_brace(&mut self) -> Status {
        let start = self.pos;

        match self.scan_brace() {
            Brace::Literal => self.single(Tag::LiteralChar, Status::Ok),
            Brace::Unfinished { end } => {
                let bounds = self.brace_bounds(start, end);
                self.pos = end;
                self.report(DiagnosticKind::UnclosedRepeat, start..end).emit();
                let text = self.slice(start);
                self.push(Node::composite(Tag::Quantifier, start, text, Status::Unfinished, bounds));
                Status::Unfinished
            }
            Brace::Complete { end } => {
                let bounds = self.brace_bounds(start, end);
                self.pos = end;
                let status = match repeat_bounds(&bounds) {
                    (Some(low), high) if low > 0 && high.is_none_or(|high| high > low) => {
                        self.operand_status(start..end)
                    }
                    _ => {
                        self.report(DiagnosticKind::InvalidRepeatBounds, start..end).emit();
                        Status::Warning
                    }
                };
                let text = self.slice(start);
                self.push(Node::composite(Tag::Quantifier, start, text, status, bounds));
                status
            }
        }
    }

    fn scan_brace(&self) -> Brace {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

        let low = digits(1);
        let mut i = 1 + low;
        if i == bytes.len() {
            return Brace::Unfinished { end: self.pos + i };
        }
        if low == 0 {
            return Brace::Literal;
        }

        if bytes[i] == b',' {
            i += 1;
            i += digits(i);
            if i == bytes.len() {
                return Brace::Unfinished { end: self.pos + i };
            }
        }

        match bytes[i] {
            b'}' => Brace::Complete {
                end: self.pos + i + 1,
            },
            _ => Brace::Literal,
        }
    }

    /// Digit runs between `start` and `end` as bound nodes.
    fn brace_bounds(&self, start: usize, end: usize) -> NodeList {
        let mut bounds = NodeList::new();
        let body = &self.source[start..end];
        let mut offset = 0;

        for part in body[1..].trim_end_matches('}').split(',') {
            offset += 1;
            if !part.is_empty() {
                bounds.push(Node::leaf(Tag::RepeatBound, start + offset, part, Status::Ok));
            }
            offset += part.len();
        }

        bounds
    }
}

fn is_lazy(quantifier: &Node) -> bool {
    quantifier.text.len() > 1 && quantifier.text.ends_with('?')
}

fn repeat_bounds(bounds: &NodeList) -> (Option<u64>, Option<u64>) {
    let value = |node: &Node| node.text.parse::<u64>().unwrap_or(u64::MAX);
    (bounds.get(0).map(value), bounds.get(1).map(value))
}
