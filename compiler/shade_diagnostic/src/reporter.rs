//! Error reporter shared by the parser and the IR generator.
//!
//! Features:
//! - Error counting that survives rewinds
//! - A fatal flag that short-circuits the top-level declaration loop
//! - Marks and rewinds for speculative parsing

use shade_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Reporter state captured before a speculative parse.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ReporterMark {
    len: usize,
    error_count: usize,
    fatal: bool,
}

/// Collects diagnostics for one compilation unit.
///
/// # Example
///
/// ```text
/// let mut reporter = ErrorReporter::new();
/// reporter.error(span, ErrorCode::E2002, "unknown identifier 'x'");
/// assert_eq!(reporter.error_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    fatal: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully built diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(code = %diagnostic.code, message = %diagnostic.message, "diagnostic");
        self.error_count += 1;
        self.diagnostics.push(diagnostic);
    }

    /// Record an error at `span`.
    pub fn error(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.report(
            Diagnostic::error(code)
                .with_message(message)
                .with_label(span, ""),
        );
    }

    /// Record an error and set the fatal flag.
    pub fn fatal(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.error(span, code, message);
        self.fatal = true;
    }

    /// Whether a fatal error ended the current unit.
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn mark(&self) -> ReporterMark {
        ReporterMark {
            len: self.diagnostics.len(),
            error_count: self.error_count,
            fatal: self.fatal,
        }
    }

    /// Drop everything reported since `mark` and restore the fatal flag.
    pub fn rewind(&mut self, mark: ReporterMark) {
        self.diagnostics.truncate(mark.len);
        self.error_count = mark.error_count;
        self.fatal = mark.fatal;
    }
}
