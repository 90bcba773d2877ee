//! Groups: capturing, named, and the `(?...)` constructs.

use crate::diagnostics::DiagnosticKind;
use crate::syntax::{Node, Status, Tag};
use crate::tagger::core::Parser;

/// What the part after `(` declared.
struct Header {
    status: Status,
    named: bool,
    name: Option<String>,
}

impl Header {
    fn unnamed(status: Status) -> Self {
        Self {
            status,
            named: false,
            name: None,
        }
    }
}

impl Parser<'_> {
    pub(super) fn parse_group(&mut self) -> Status {
        if !self.enter_nesting() {
            return self.reject_too_deep(Tag::Subexpression);
        }

        let start = self.pos;
        self.bump();
        self.open_scope();

        let header = if self.peek() == Some('?') {
            self.parse_group_header()
        } else {
            Header::unnamed(Status::Ok)
        };

        let body = if header.status.is_acceptable() {
            header.status.combine(self.parse_sequence(Some(')')))
        } else {
            header.status
        };

        let closed = header.status.is_acceptable() && self.peek() == Some(')');
        if closed {
            self.bump();
        }

        let children = self.close_scope();
        self.exit_nesting();

        let status = if closed {
            body
        } else if header.status.is_error() || self.aborted {
            Status::Error
        } else {
            // An error inside the body already explains why `)` was not reached.
            if !body.is_error() {
                self.report(DiagnosticKind::UnclosedGroup, start..start + 1)
                    .emit();
            }
            Status::Unfinished
        };

        let tag = if header.named {
            Tag::NamedGroup
        } else {
            Tag::Subexpression
        };
        let text = self.slice(start);
        self.push(Node::group(tag, start, text, status, header.name, children));
        status
    }

    fn parse_group_header(&mut self) -> Header {
        let start = self.pos;
        self.bump();

        let Some(c) = self.peek() else {
            return Header::unnamed(self.push_leaf(Tag::GroupControl, start, Status::Unfinished));
        };

        match c {
            ':' | '=' | '!' | '>' => {
                self.bump();
                Header::unnamed(self.push_leaf(Tag::GroupControl, start, Status::Ok))
            }
            '<' if matches!(self.peek_nth(1), Some('=' | '!')) => {
                self.bump();
                self.bump();
                Header::unnamed(self.push_leaf(Tag::GroupControl, start, Status::Ok))
            }
            '#' => Header::unnamed(self.parse_comment(start)),
            // Conditional: the `(condition)` is parsed as the body's first group.
            '(' => Header::unnamed(self.push_leaf(Tag::GroupControl, start, Status::Ok)),
            '<' | '\'' => {
                self.push_leaf(Tag::GroupControl, start, Status::Ok);
                let (status, name) = self.parse_group_name();
                Header {
                    status,
                    named: true,
                    name,
                }
            }
            c if is_inline_option(c) => Header::unnamed(self.parse_inline_options(start)),
            _ => Header::unnamed(self.flag_group_construct(start)),
        }
    }

    /// `?imnsx-imnsx:` or `?imnsx-imnsx)`; the `)` is left for the group.
    fn parse_inline_options(&mut self, start: usize) -> Status {
        self.bump_while(is_inline_option);

        match self.peek() {
            Some(':') => {
                self.bump();
                self.push_leaf(Tag::GroupControl, start, Status::Ok)
            }
            Some(')') => self.push_leaf(Tag::GroupControl, start, Status::Ok),
            Some(_) => self.flag_group_construct(start),
            None => self.push_leaf(Tag::GroupControl, start, Status::Unfinished),
        }
    }

    /// `?#...` up to the closing `)`, which is left for the group.
    fn parse_comment(&mut self, start: usize) -> Status {
        self.bump_while(|c| c != ')');
        let status = if self.peek().is_some() {
            Status::Ok
        } else {
            Status::Unfinished
        };
        self.push_leaf(Tag::GroupControl, start, status)
    }

    /// Unknown construct marker; the group body is still parsed.
    fn flag_group_construct(&mut self, start: usize) -> Status {
        if self.peek() != Some(')') {
            self.bump();
        }
        let text = self.slice(start);
        self.report(DiagnosticKind::UnknownGroupConstruct, start..self.pos)
            .message(format!("`({text}`"))
            .emit();
        self.push_leaf(Tag::GroupControl, start, Status::Warning)
    }

    /// `<name>` or `'name'`, delimiters included in the node.
    fn parse_group_name(&mut self) -> (Status, Option<String>) {
        let start = self.pos;
        let close = match self.bump() {
            Some('<') => '>',
            _ => '\'',
        };

        let name_start = self.pos;
        if self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
            self.bump_while(|c| c.is_alphanumeric() || c == '_');
        }
        let name = self.slice(name_start);

        match self.peek() {
            Some(c) if c == close && !name.is_empty() => {
                self.bump();
                self.push_leaf(Tag::GroupName, start, Status::Ok);
                (Status::Ok, Some(name.to_string()))
            }
            found => {
                let (range, detail) = match found {
                    Some(c) => (self.char_range(), format!("unexpected `{c}`")),
                    None => (start..self.pos, "pattern ends inside the name".to_string()),
                };
                self.report(DiagnosticKind::InvalidGroupName, range)
                    .message(detail)
                    .emit();
                (self.push_leaf(Tag::GroupName, start, Status::Error), None)
            }
        }
    }
}

fn is_inline_option(c: char) -> bool {
    matches!(c, 'i' | 'm' | 'n' | 's' | 'x' | '-')
}
