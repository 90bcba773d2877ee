//! Rendering of diagnostics against the pattern they were reported on.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};

use super::{DiagnosticMessage, Diagnostics};
use crate::syntax::Status;

/// Renders annotated pattern excerpts, or one-line records when no pattern is attached.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    pattern: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            pattern: None,
            path: None,
            colored: false,
        }
    }

    pub fn pattern(mut self, pattern: &'s str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// File the pattern was read from, shown in the excerpt header.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(pattern) = self.pattern else {
            return self.format_records(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&self.report(diag, pattern)))?;
        }
        Ok(())
    }

    fn report<'a>(&'a self, diag: &'a DiagnosticMessage, pattern: &'a str) -> Vec<Group<'a>> {
        let span = visible_span(diag.range(), pattern.len());

        let mut excerpt = Snippet::source(pattern).line_start(1).annotation(
            AnnotationKind::Primary
                .span(span.clone())
                .label(span_label(diag.status())),
        );
        if let Some(path) = self.path {
            excerpt = excerpt.path(path);
        }

        let mut cause = level_of(diag.status())
            .primary_title(diag.message())
            .element(excerpt);
        if let Some(hint) = diag.kind().default_hint() {
            cause = cause.element(Level::NOTE.message(hint));
        }

        let mut report = vec![cause];
        if let Some(fix) = diag.fix() {
            report.push(
                Level::HELP.secondary_title(fix.description()).element(
                    Snippet::source(pattern)
                        .line_start(1)
                        .patch(Patch::new(span, fix.replacement())),
                ),
            );
        }
        report
    }

    fn format_records(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

fn level_of(status: Status) -> Level<'static> {
    match status {
        Status::Error => Level::ERROR,
        Status::Warning => Level::WARNING,
        Status::Unfinished => Level::NOTE.with_name("unfinished"),
        Status::Ok => Level::INFO,
    }
}

fn span_label(status: Status) -> &'static str {
    match status {
        Status::Unfinished => "pattern ends here",
        Status::Error => "invalid",
        Status::Warning | Status::Ok => "suspicious",
    }
}

/// Empty ranges (end of input) are widened to one column when the pattern allows it.
fn visible_span(range: Range<usize>, len: usize) -> Range<usize> {
    if range.is_empty() {
        range.start..(range.start + 1).min(len)
    } else {
        range
    }
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
