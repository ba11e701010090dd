//! IR generation: name resolution, type checking and lowering of the
//! syntax tree into a [`Program`].
//!
//! Every conversion returns `Option`. `None` means an error has already
//! been reported; callers propagate it without substituting a default.
//! Top-level declarations are converted independently so one bad function
//! does not hide errors in the next.
//!
//! # Module Structure
//!
//! - `decl`: extensions, structs, globals, interface blocks, functions and
//!   generic expansion
//! - `stmt`: statements and control-flow context
//! - `expr`: identifiers, operators, indexing, fields and swizzles
//! - `call`: overload resolution and constructors
//! - `coerce`: implicit conversions
//! - `write`: assignment target validation
//! - `fold`: constant folding

mod call;
mod coerce;
mod decl;
mod expr;
mod fold;
mod stmt;
mod write;

use shade_diagnostic::{Diagnostic, ErrorCode, ErrorReporter};
use shade_ir::ast::{AstArena, Expr, ExprId, Stmt, StmtId};
use shade_ir::Span;
use shade_parse::ParseOutput;
use shade_types::Idx;

use crate::intrinsics;
use crate::ir::{FunctionId, Program};
use crate::symbols::{Symbol, SymbolTable};
use crate::{ProgramKind, ProgramSettings};

/// Convert a parsed unit into a typed program.
///
/// Returns `None` when any error was reported while generating; the
/// diagnostics are in `reporter`.
#[tracing::instrument(level = "debug", skip_all, fields(kind = %kind))]
pub fn generate(
    parsed: &ParseOutput,
    kind: ProgramKind,
    settings: ProgramSettings,
    reporter: &mut ErrorReporter,
) -> Option<Program> {
    let errors_before = reporter.error_count();
    let mut generator = IrGenerator::new(&parsed.arena, reporter, kind, settings);
    generator.convert_module(&parsed.module);
    let program = generator.program;
    (reporter.error_count() == errors_before).then_some(program)
}

/// State of one IR generation pass.
pub(crate) struct IrGenerator<'a, 'r> {
    arena: &'a AstArena,
    reporter: &'r mut ErrorReporter,
    program: Program,
    symbols: SymbolTable,
    /// Function whose body is being converted.
    current_function: Option<FunctionId>,
    loop_depth: u32,
    switch_depth: u32,
}

impl<'a, 'r> IrGenerator<'a, 'r> {
    /// A generator whose root scope holds the builtin types and the
    /// intrinsic functions, with an empty global scope on top.
    pub(crate) fn new(
        arena: &'a AstArena,
        reporter: &'r mut ErrorReporter,
        kind: ProgramKind,
        settings: ProgramSettings,
    ) -> Self {
        let mut generator = IrGenerator {
            arena,
            reporter,
            program: Program::new(kind, settings),
            symbols: SymbolTable::new(),
            current_function: None,
            loop_depth: 0,
            switch_depth: 0,
        };
        let builtins = generator.program.types.builtins().to_vec();
        for (name, ty) in builtins {
            generator.symbols.declare(&name, Symbol::Type(ty));
        }
        for function in intrinsics::declarations() {
            generator.function(function, true);
        }
        generator.symbols.push_scope();
        generator
    }

    #[inline]
    fn ast_expr(&self, id: ExprId) -> &'a Expr {
        self.arena.expr(id)
    }

    #[inline]
    fn ast_stmt(&self, id: StmtId) -> &'a Stmt {
        self.arena.stmt(id)
    }

    #[inline]
    fn settings(&self) -> ProgramSettings {
        self.program.settings
    }

    fn format_type(&self, ty: Idx) -> String {
        self.program.types.format_type(ty)
    }

    fn error(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.reporter.error(span, code, message);
    }

    /// Report an unknown name, suggesting the closest visible one.
    fn error_unknown(
        &mut self,
        span: Span,
        code: ErrorCode,
        message: String,
        suggestion: Option<String>,
    ) {
        let mut diagnostic = Diagnostic::error(code)
            .with_message(message)
            .with_label(span, "");
        if let Some(name) = suggestion {
            diagnostic = diagnostic.with_suggestion(format!("did you mean '{name}'?"));
        }
        self.reporter.report(diagnostic);
    }

    /// Report `name` as already bound, pointing at the earlier declaration
    /// when the program has one.
    fn error_redefinition(&mut self, span: Span, name: &str) {
        let previous = self
            .symbols
            .lookup(name)
            .and_then(|symbol| self.declaration_span(symbol));
        let mut diagnostic = Diagnostic::error(ErrorCode::E2004)
            .with_message(format!("symbol '{name}' was already defined"))
            .with_label(span, "");
        if let Some(previous) = previous {
            diagnostic = diagnostic.with_secondary_label(previous, "previously defined here");
        }
        self.reporter.report(diagnostic);
    }

    /// Where `symbol` was declared in the program's own source.
    fn declaration_span(&self, symbol: &Symbol) -> Option<Span> {
        match symbol {
            Symbol::Variable(variable) | Symbol::Field { owner: variable, .. } => {
                Some(self.program.variable(*variable).span)
            }
            Symbol::Function(_) | Symbol::UnresolvedFunction(_) => symbol
                .overloads()
                .iter()
                .map(|&function| self.program.function(function))
                .find(|function| !function.is_builtin)
                .map(|function| function.span),
            Symbol::Type(_) => None,
        }
    }

    /// Run `f` inside a fresh scope.
    fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.symbols.push_scope();
        let result = f(self);
        self.symbols.pop_scope();
        result
    }
}

#[cfg(test)]
mod tests;
