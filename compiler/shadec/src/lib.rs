//! Driver for the shade front end.
//!
//! [`compile`] runs the whole pipeline on one unit of source text: the
//! parser builds the syntax tree, and when it reported nothing the IR
//! generator turns it into a typed [`Program`]. Diagnostics from both phases
//! come back together in a [`CompileResult`].

use std::sync::Once;

use shade_diagnostic::ErrorReporter;

pub use shade_diagnostic::{Diagnostic, ErrorCode};
pub use shade_sema::{Program, ProgramKind, ProgramSettings};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=shade_parse=debug` or `RUST_LOG=shade_sema=trace`. Setting
/// `SHADE_LOG_TREE` switches to indented span-tree output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if std::env::var_os("SHADE_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .init();
        }
    });
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "error format arguments receive fields by reference"
)]
fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// A unit failed to compile.
#[derive(thiserror::Error, Debug)]
pub enum CompileError {
    #[error("compilation failed with {count} error{}", plural(.count))]
    Failed {
        count: usize,
        diagnostics: Vec<Diagnostic>,
    },
}

/// Everything one compilation produced.
#[derive(Debug)]
pub struct CompileResult {
    /// The typed program; `None` when any error was reported.
    pub program: Option<Program>,
    /// Diagnostics in the order they were reported.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileResult {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Diagnostic messages, without codes or locations.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .map(|diagnostic| diagnostic.message.as_str())
            .collect()
    }

    /// All diagnostics rendered against `source`, one block per diagnostic.
    pub fn render(&self, source: &str) -> String {
        self.diagnostics
            .iter()
            .map(|diagnostic| diagnostic.render(source))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The program, or every diagnostic when compilation failed.
    pub fn into_result(self) -> Result<Program, CompileError> {
        let count = self.error_count();
        match self.program {
            Some(program) if count == 0 => Ok(program),
            _ => Err(CompileError::Failed {
                count,
                diagnostics: self.diagnostics,
            }),
        }
    }
}

/// Compile one unit of source text.
///
/// IR generation only runs on a unit that parsed without errors, so a
/// syntax error never produces follow-on semantic diagnostics.
#[tracing::instrument(level = "debug", skip_all, fields(kind = %kind, len = source.len()))]
pub fn compile(source: &str, kind: ProgramKind, settings: ProgramSettings) -> CompileResult {
    let mut reporter = ErrorReporter::new();
    let parsed = shade_parse::parse(source, &mut reporter);
    let program = if reporter.has_errors() {
        tracing::debug!(errors = reporter.error_count(), "skipping IR generation");
        None
    } else {
        shade_sema::generate(&parsed, kind, settings, &mut reporter)
    };
    CompileResult {
        program,
        diagnostics: reporter.into_diagnostics(),
    }
}
