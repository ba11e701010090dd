//! Core diagnostic types.
//!
//! Defines [`Diagnostic`] and [`Label`], the building blocks the lexer,
//! parser and IR generator use to report problems. Every diagnostic is an
//! error; the front end has nothing weaker to say.

use std::fmt;
use std::fmt::Write as _;

use shade_ir::Span;

use crate::ErrorCode;

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A positioned, coded message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Human-readable fixes, e.g. "did you mean `color`?".
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label for context, e.g. an earlier declaration.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// First primary label's span.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    /// Render with `line:column` positions resolved against `source`.
    ///
    /// ```text
    /// error[E2002]: unknown identifier 'colr'
    ///   --> 3:12
    ///   = help: did you mean `color`?
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("error[{}]: {}", self.code, self.message);
        for label in &self.labels {
            let (line, col) = label.span.line_col(source);
            let marker = if label.is_primary { "-->" } else { ":::" };
            let _ = write!(out, "\n  {marker} {line}:{col}");
            if !label.message.is_empty() {
                let _ = write!(out, ": {}", label.message);
            }
        }
        for note in &self.notes {
            let _ = write!(out, "\n  = note: {note}");
        }
        for suggestion in &self.suggestions {
            let _ = write!(out, "\n  = help: {suggestion}");
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}
