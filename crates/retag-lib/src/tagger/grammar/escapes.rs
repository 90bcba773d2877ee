//! Backslash escapes.

use super::EscapeContext;
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{Node, Status, Tag, unicode};
use crate::tagger::core::Parser;
use crate::tagger::prescan::is_group_name;

impl Parser<'_> {
    pub(super) fn parse_escape(&mut self, context: EscapeContext) -> Status {
        let start = self.pos;
        self.bump();

        let Some(c) = self.peek() else {
            self.report(DiagnosticKind::TrailingBackslash, start..self.pos)
                .emit();
            return self.push_leaf(Tag::EscapedChar, start, Status::Unfinished);
        };

        let search = self.is_search();
        let in_class = context == EscapeContext::Class;

        match c {
            '0'..='9' => self.parse_numeric_escape(start, in_class),
            'c' => self.parse_control_escape(start),
            'x' => self.parse_hex_escape(start, Tag::HexEscape, 2),
            'u' => self.parse_hex_escape(start, Tag::UnicodeEscape, 4),
            'p' | 'P' => self.parse_category_escape(start),
            'd' | 'D' | 's' | 'S' | 'w' | 'W' if search => self.escaped(start, Tag::ClassShorthand),
            'A' | 'Z' | 'z' | 'G' | 'b' | 'B' if search && !in_class => {
                self.escaped(start, Tag::AnchorControl)
            }
            'k' if search && !in_class => self.parse_named_backref(start),
            _ => self.escaped(start, Tag::EscapedChar),
        }
    }

    /// Backslash plus one character.
    fn escaped(&mut self, start: usize, tag: Tag) -> Status {
        self.bump();
        self.push_leaf(tag, start, Status::Ok)
    }

    /// Octal escape or numbered backreference.
    fn parse_numeric_escape(&mut self, start: usize, in_class: bool) -> Status {
        let digits = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        let octal = self
            .rest()
            .bytes()
            .take(3)
            .take_while(|b| (b'0'..=b'7').contains(b))
            .count();

        if self.rest().starts_with('0') || octal == 3 {
            self.pos += octal;
            return self.push_leaf(Tag::OctalEscape, start, Status::Ok);
        }

        if !self.is_search() || in_class {
            return self.escaped(start, Tag::EscapedChar);
        }

        let run = &self.rest()[..digits];
        let resolved = (1..=digits.min(9)).rev().find_map(|len| {
            let number = run[..len].parse::<u32>().ok()?;
            self.groups.resolves(number).then_some((len, number))
        });

        match resolved {
            Some((len, number)) => {
                self.pos += len;
                let text = self.slice(start);
                self.push(Node::backreference(start, text, Status::Ok, Some(number)));
                Status::Ok
            }
            None => {
                self.pos += 1;
                let text = self.slice(start);
                self.report(DiagnosticKind::UnresolvedBackref, start..self.pos)
                    .message(&text[1..])
                    .emit();
                self.push(Node::backreference(start, text, Status::Warning, None));
                Status::Warning
            }
        }
    }

    /// `\c` followed by one of `@`..`[`, or a lowercase letter.
    fn parse_control_escape(&mut self, start: usize) -> Status {
        self.bump();

        match self.peek() {
            None => {
                self.report(DiagnosticKind::IncompleteEscape, start..self.pos)
                    .emit();
                self.push_leaf(Tag::ControlChar, start, Status::Unfinished)
            }
            Some(c) if ('@'..='[').contains(&c) || c.is_ascii_lowercase() => {
                self.bump();
                self.push_leaf(Tag::ControlChar, start, Status::Ok)
            }
            Some(c) => {
                self.bump();
                self.report(DiagnosticKind::InvalidControlChar, start..self.pos)
                    .message(format!("`\\c{c}`"))
                    .emit();
                self.push_leaf(Tag::ControlChar, start, Status::Error)
            }
        }
    }

    /// `\x` with two hex digits or `\u` with four.
    fn parse_hex_escape(&mut self, start: usize, tag: Tag, width: usize) -> Status {
        self.bump();

        for _ in 0..width {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    self.bump();
                }
                Some(c) => {
                    self.report(DiagnosticKind::InvalidHexDigit, self.char_range())
                        .message(format!("`{c}`"))
                        .emit();
                    return self.push_leaf(tag, start, Status::Error);
                }
                None => {
                    self.report(DiagnosticKind::IncompleteEscape, start..self.pos)
                        .emit();
                    return self.push_leaf(tag, start, Status::Unfinished);
                }
            }
        }

        self.push_leaf(tag, start, Status::Ok)
    }

    /// `\p{Name}` or `\P{Name}`.
    fn parse_category_escape(&mut self, start: usize) -> Status {
        self.bump();

        match self.peek() {
            Some('{') => {
                self.bump();
            }
            Some(_) => {
                self.report(DiagnosticKind::MissingCategoryBraces, start..self.pos)
                    .emit();
                return self.push_leaf(Tag::UnicodeCategory, start, Status::Error);
            }
            None => return self.unfinished_escape(start, Tag::UnicodeCategory),
        }

        let name_start = self.pos;
        self.bump_while(|c| c.is_ascii_alphabetic());

        match self.peek() {
            Some('}') => {
                let name = self.slice(name_start);
                self.bump();
                if unicode::is_known_category(name) {
                    return self.push_leaf(Tag::UnicodeCategory, start, Status::Ok);
                }
                self.report(DiagnosticKind::UnknownCategory, start..self.pos)
                    .message(name)
                    .emit();
                self.push_leaf(Tag::UnicodeCategory, start, Status::Error)
            }
            Some(_) => {
                self.report(DiagnosticKind::InvalidCategoryName, self.char_range())
                    .emit();
                self.push_leaf(Tag::UnicodeCategory, start, Status::Error)
            }
            None => self.unfinished_escape(start, Tag::UnicodeCategory),
        }
    }

    /// `\k<name>`, `\k'name'` or the numeric forms `\k<1>`.
    fn parse_named_backref(&mut self, start: usize) -> Status {
        self.bump();

        let close = match self.peek() {
            Some('<') => '>',
            Some('\'') => '\'',
            Some(_) => {
                self.report(DiagnosticKind::MalformedNamedBackref, start..self.pos)
                    .emit();
                return self.push_leaf(Tag::Backreference, start, Status::Error);
            }
            None => return self.unfinished_escape(start, Tag::Backreference),
        };
        self.bump();

        let name_start = self.pos;
        self.bump_while(|c| c.is_alphanumeric() || c == '_');
        let name = self.slice(name_start);

        match self.peek() {
            Some(c) if c == close && !name.is_empty() => {
                self.bump();
            }
            Some(c) => {
                let range = if c == close { start..self.pos + 1 } else { self.char_range() };
                let detail = if c == close {
                    "name is empty".to_string()
                } else {
                    format!("unexpected `{c}`")
                };
                self.report(DiagnosticKind::InvalidGroupName, range)
                    .message(detail)
                    .emit();
                return self.push_leaf(Tag::Backreference, start, Status::Error);
            }
            None => return self.unfinished_escape(start, Tag::Backreference),
        }

        let number = if name.bytes().all(|b| b.is_ascii_digit()) {
            name.parse::<u32>().ok().filter(|&n| self.groups.resolves(n))
        } else if is_group_name(name) {
            self.groups.number_of(name)
        } else {
            None
        };

        let status = match number {
            Some(_) => Status::Ok,
            None => {
                self.report(DiagnosticKind::UnresolvedBackref, start..self.pos)
                    .message(name)
                    .emit();
                Status::Warning
            }
        };

        let text = self.slice(start);
        self.push(Node::backreference(start, text, status, number));
        status
    }

    fn unfinished_escape(&mut self, start: usize, tag: Tag) -> Status {
        self.report(DiagnosticKind::IncompleteEscape, start..self.pos)
            .emit();
        self.push_leaf(tag, start, Status::Unfinished)
    }
}
